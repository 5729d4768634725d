//! Pure core of the vending controller.
//!
//! This module contains everything that computes without side effects:
//! - The closed state and request enums
//! - The authoritative transition/notice table
//! - Immutable history of handled requests
//!
//! Nothing here locks, logs, allocates channels, or touches a clock other
//! than the timestamps recorded into history by the imperative shell.

mod history;
mod request;
mod state;
mod transition;

pub use history::{History, StepRecord};
pub use request::VendRequest;
pub use state::VendState;
pub use transition::{apply, step, Outcome};
