//! The vending controller: sole owner of the current state.
//!
//! The controller is the imperative shell around the pure core. Each
//! operation takes the lock, resolves the pure rule, commits the next
//! state, records the step, and returns the catalog line. The lock is held
//! for the whole read-decide-write, so every operation is linearizable with
//! respect to the current state; the work under the lock is a table lookup
//! with no suspension points.

use crate::checkpoint::{Checkpoint, CheckpointError};
use crate::core::{step, History, StepRecord, VendRequest, VendState};
use crate::notice::Catalog;
use chrono::Utc;
use log::trace;
use parking_lot::Mutex;

/// A beverage-vending finite-state controller.
///
/// Holds exactly one [`VendState`] at all times: never unset, never two.
/// Operations cannot fail: a request that does not apply in the current
/// state is a no-op that still emits its informational line.
///
/// # Example
///
/// ```rust
/// use vendo::{Controller, VendState};
///
/// let machine = Controller::new();
/// assert_eq!(machine.current_state(), VendState::NoMoney);
///
/// assert_eq!(machine.insert_money(), "Money inserted.");
/// assert_eq!(machine.select_beverage(), "Beverage selected.");
/// assert_eq!(machine.vend(), "Vending...");
/// assert_eq!(machine.current_state(), VendState::NoMoney);
/// ```
pub struct Controller {
    catalog: Catalog,
    inner: Mutex<Inner>,
}

struct Inner {
    state: VendState,
    history: History,
}

impl Controller {
    /// Create a controller in [`VendState::INITIAL`] with the reference
    /// catalog.
    pub fn new() -> Controller {
        Controller::with_catalog(Catalog::default())
    }

    /// Create a controller in [`VendState::INITIAL`] with a custom catalog.
    pub fn with_catalog(catalog: Catalog) -> Controller {
        Controller {
            catalog,
            inner: Mutex::new(Inner {
                state: VendState::INITIAL,
                history: History::new(),
            }),
        }
    }

    /// Rebuild a controller from a checkpoint.
    ///
    /// The checkpoint is validated first; see [`Checkpoint::validate`].
    pub fn restore(checkpoint: Checkpoint, catalog: Catalog) -> Result<Controller, CheckpointError> {
        checkpoint.validate()?;
        Ok(Controller {
            catalog,
            inner: Mutex::new(Inner {
                state: checkpoint.state,
                history: checkpoint.history,
            }),
        })
    }

    /// Put money in the machine.
    pub fn insert_money(&self) -> &str {
        self.handle(VendRequest::InsertMoney)
    }

    /// Ask for the inserted money back.
    pub fn eject_money(&self) -> &str {
        self.handle(VendRequest::EjectMoney)
    }

    /// Pick a beverage.
    pub fn select_beverage(&self) -> &str {
        self.handle(VendRequest::SelectBeverage)
    }

    /// Dispense the selected beverage.
    pub fn vend(&self) -> &str {
        self.handle(VendRequest::Vend)
    }

    /// Handle a request by value.
    ///
    /// The four named operations all come through here; so does the
    /// channel-served worker in [`crate::service`].
    pub fn handle(&self, request: VendRequest) -> &str {
        let mut inner = self.inner.lock();
        let from = inner.state;
        let outcome = step(from, request);
        let to = outcome.next.unwrap_or(from);
        inner.state = to;
        inner.history = inner.history.record(StepRecord {
            request,
            from,
            to,
            at: Utc::now(),
        });
        drop(inner);

        trace!("{request}: {from} -> {to}");
        self.catalog.line(from, request)
    }

    /// The current state. Does not mutate.
    pub fn current_state(&self) -> VendState {
        self.inner.lock().state
    }

    /// A snapshot of the audit history.
    pub fn history(&self) -> History {
        self.inner.lock().history.clone()
    }

    /// Capture the controller as a serializable checkpoint.
    pub fn checkpoint(&self) -> Checkpoint {
        let inner = self.inner.lock();
        Checkpoint::capture(inner.state, inner.history.clone())
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
