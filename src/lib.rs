//! Vendo: a beverage-vending finite-state controller
//!
//! Vendo is built around a "pure core, imperative shell" split. The transition
//! rule is a single pure function over a closed space of states and requests,
//! while locking, timestamps, and logging live in the controller that wraps it.
//! A channel-served worker in [`service`] offers the same machine to many
//! threads at once.
//!
//! # Core Concepts
//!
//! - **States**: the closed enum `NoMoney`, `HasMoney`, `Sold`; exactly one is current
//! - **Requests**: `InsertMoney`, `EjectMoney`, `SelectBeverage`, `Vend`; total, never failing
//! - **History**: immutable audit of every handled request, no-ops included
//! - **Checkpoints**: serialize a controller, validate, and resume it later
//!
//! # Example
//!
//! ```rust
//! use vendo::{Controller, VendState};
//!
//! let machine = Controller::new();
//!
//! assert_eq!(machine.eject_money(), "No money to eject.");
//! assert_eq!(machine.insert_money(), "Money inserted.");
//! assert_eq!(machine.select_beverage(), "Beverage selected.");
//! assert_eq!(machine.vend(), "Vending...");
//!
//! // A full cycle lands back at the initial state.
//! assert_eq!(machine.current_state(), VendState::NoMoney);
//! ```

pub mod checkpoint;
pub mod controller;
pub mod core;
pub mod notice;
pub mod service;

// Re-export commonly used types
pub use checkpoint::{Checkpoint, CheckpointError, CHECKPOINT_VERSION};
pub use controller::Controller;
pub use core::{apply, step, History, Outcome, StepRecord, VendRequest, VendState};
pub use notice::{Catalog, CatalogBuilder, CatalogError};
pub use service::{Reply, ServiceError, ServiceHandle};
