//! The four requests a caller can put to the controller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A caller request, dispatched against the current state.
///
/// Every request is total: it is defined in every state, and a request that
/// is not meaningful in the current state is a no-op with an informational
/// line rather than an error.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum VendRequest {
    /// Put money in the machine.
    InsertMoney,
    /// Ask for the inserted money back.
    EjectMoney,
    /// Pick a beverage.
    SelectBeverage,
    /// Dispense the selected beverage.
    Vend,
}

impl VendRequest {
    /// All requests, in declaration order.
    ///
    /// Catalog storage indexes by position in this array.
    pub const ALL: [VendRequest; 4] = [
        VendRequest::InsertMoney,
        VendRequest::EjectMoney,
        VendRequest::SelectBeverage,
        VendRequest::Vend,
    ];

    /// The request's name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InsertMoney => "InsertMoney",
            Self::EjectMoney => "EjectMoney",
            Self::SelectBeverage => "SelectBeverage",
            Self::Vend => "Vend",
        }
    }
}

impl fmt::Display for VendRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
