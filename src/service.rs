//! Channel-served access to one controller.
//!
//! The second serialization strategy: instead of callers sharing the
//! controller's lock, a dedicated worker thread owns the controller
//! outright and handles queued commands one at a time. Handles are cheap
//! clones of the queue's sender and can be spread across threads; each call
//! blocks only until the worker has handled its command.
//!
//! Dropping every handle closes the queue; `stop` closes it early. Either
//! way the worker exits and its join handle yields the controller back.

use crate::controller::Controller;
use crate::core::{VendRequest, VendState};
use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use log::debug;
use std::thread::{self, JoinHandle};
use thiserror::Error;

/// The only failure the service surface can produce.
///
/// The machine itself never fails; this reports that the worker is gone.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("vending service has stopped")]
    Stopped,
}

/// What the worker sends back for one handled request.
#[derive(Clone, Debug)]
pub struct Reply {
    /// The informational line the request emitted.
    pub line: String,
    /// The state after the request was handled.
    pub state: VendState,
}

enum Command {
    Apply {
        request: VendRequest,
        reply: Sender<Reply>,
    },
    Inspect {
        reply: Sender<VendState>,
    },
    Stop,
}

/// Cloneable front to the worker; offers the controller's operations.
#[derive(Clone)]
pub struct ServiceHandle {
    tx: Sender<Command>,
}

/// Move `controller` into a worker thread and return a handle to it.
pub fn spawn(controller: Controller) -> (ServiceHandle, JoinHandle<Controller>) {
    let (tx, rx) = unbounded();
    let worker = thread::spawn(move || serve(controller, rx));
    (ServiceHandle { tx }, worker)
}

fn serve(controller: Controller, rx: Receiver<Command>) -> Controller {
    debug!("vending service started");
    while let Ok(command) = rx.recv() {
        match command {
            Command::Apply { request, reply } => {
                let line = controller.handle(request).to_string();
                let state = controller.current_state();
                // The caller may have given up on the reply; that is its
                // business, the request is already handled.
                let _ = reply.send(Reply { line, state });
            }
            Command::Inspect { reply } => {
                let _ = reply.send(controller.current_state());
            }
            Command::Stop => break,
        }
    }
    debug!("vending service stopped");
    controller
}

impl ServiceHandle {
    /// Put money in the machine.
    pub fn insert_money(&self) -> Result<Reply, ServiceError> {
        self.apply(VendRequest::InsertMoney)
    }

    /// Ask for the inserted money back.
    pub fn eject_money(&self) -> Result<Reply, ServiceError> {
        self.apply(VendRequest::EjectMoney)
    }

    /// Pick a beverage.
    pub fn select_beverage(&self) -> Result<Reply, ServiceError> {
        self.apply(VendRequest::SelectBeverage)
    }

    /// Dispense the selected beverage.
    pub fn vend(&self) -> Result<Reply, ServiceError> {
        self.apply(VendRequest::Vend)
    }

    /// Queue a request and block until the worker has handled it.
    pub fn apply(&self, request: VendRequest) -> Result<Reply, ServiceError> {
        let (reply_tx, reply_rx) = bounded(1);
        self.tx
            .send(Command::Apply {
                request,
                reply: reply_tx,
            })
            .map_err(|_| ServiceError::Stopped)?;
        reply_rx.recv().map_err(|_| ServiceError::Stopped)
    }

    /// The worker's current state. Does not mutate.
    pub fn current_state(&self) -> Result<VendState, ServiceError> {
        let (reply_tx, reply_rx) = bounded(1);
        self.tx
            .send(Command::Inspect { reply: reply_tx })
            .map_err(|_| ServiceError::Stopped)?;
        reply_rx.recv().map_err(|_| ServiceError::Stopped)
    }

    /// Ask the worker to finish.
    ///
    /// Commands still queued behind the stop are dropped; their callers see
    /// [`ServiceError::Stopped`]. The worker's join handle then yields the
    /// controller.
    pub fn stop(&self) -> Result<(), ServiceError> {
        self.tx.send(Command::Stop).map_err(|_| ServiceError::Stopped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serves_the_reference_scenario() {
        let (handle, worker) = spawn(Controller::new());

        assert_eq!(handle.eject_money().unwrap().line, "No money to eject.");
        assert_eq!(handle.vend().unwrap().line, "No money. Also no selection.");
        assert_eq!(handle.insert_money().unwrap().line, "Money inserted.");
        assert_eq!(handle.select_beverage().unwrap().line, "Beverage selected.");

        let last = handle.vend().unwrap();
        assert_eq!(last.line, "Vending...");
        assert_eq!(last.state, VendState::NoMoney);

        drop(handle);
        let controller = worker.join().unwrap();
        assert_eq!(controller.history().len(), 5);
    }

    #[test]
    fn reply_carries_post_request_state() {
        let (handle, worker) = spawn(Controller::new());

        assert_eq!(handle.insert_money().unwrap().state, VendState::HasMoney);
        assert_eq!(handle.current_state().unwrap(), VendState::HasMoney);
        assert_eq!(
            handle.select_beverage().unwrap().state,
            VendState::Sold
        );

        drop(handle);
        worker.join().unwrap();
    }

    #[test]
    fn clones_share_one_machine() {
        let (handle, worker) = spawn(Controller::new());
        let other = handle.clone();

        handle.insert_money().unwrap();
        let reply = other.select_beverage().unwrap();
        assert_eq!(reply.line, "Beverage selected.");
        assert_eq!(reply.state, VendState::Sold);

        drop(handle);
        drop(other);
        let controller = worker.join().unwrap();
        assert_eq!(controller.current_state(), VendState::Sold);
    }

    #[test]
    fn dropping_every_handle_stops_the_worker() {
        let (handle, worker) = spawn(Controller::new());
        let clone = handle.clone();
        handle.insert_money().unwrap();
        drop(handle);

        // Worker is still up while one handle lives.
        clone.eject_money().unwrap();
        drop(clone);

        let controller = worker.join().unwrap();
        assert_eq!(controller.current_state(), VendState::NoMoney);
        assert_eq!(controller.history().len(), 2);
    }

    #[test]
    fn calls_after_stop_report_stopped() {
        let (handle, worker) = spawn(Controller::new());
        handle.insert_money().unwrap();
        handle.stop().unwrap();
        let controller = worker.join().unwrap();
        assert_eq!(controller.current_state(), VendState::HasMoney);

        assert!(matches!(handle.insert_money(), Err(ServiceError::Stopped)));
        assert!(matches!(handle.current_state(), Err(ServiceError::Stopped)));
        assert!(matches!(handle.stop(), Err(ServiceError::Stopped)));
    }

    #[test]
    fn worker_returns_the_controller_for_checkpointing() {
        let (handle, worker) = spawn(Controller::new());
        handle.insert_money().unwrap();
        handle.select_beverage().unwrap();
        drop(handle);

        let controller = worker.join().unwrap();
        assert_eq!(controller.current_state(), VendState::Sold);
        let checkpoint = controller.checkpoint();
        assert_eq!(checkpoint.state, VendState::Sold);
    }
}
