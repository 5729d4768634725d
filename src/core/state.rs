//! The closed set of controller states.
//!
//! States are pure values: they carry no machine data and hold no reference
//! back to the controller that owns them. The transition rule lives in
//! [`crate::core::transition`], not on the states themselves.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three modes a vending controller can be in.
///
/// The set is closed by design: every `match` over it is exhaustive, so the
/// closure property (any step lands back in this set) holds at compile time.
///
/// # Example
///
/// ```rust
/// use vendo::core::VendState;
///
/// assert_eq!(VendState::INITIAL, VendState::NoMoney);
/// assert_eq!(VendState::Sold.name(), "Sold");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum VendState {
    /// Nothing inserted yet; the machine is waiting for money.
    NoMoney,
    /// Money inserted, no beverage selected.
    HasMoney,
    /// A beverage was selected and is waiting to be vended.
    Sold,
}

impl VendState {
    /// The state every freshly constructed controller starts in.
    pub const INITIAL: VendState = VendState::NoMoney;

    /// All states, in declaration order.
    ///
    /// Catalog storage indexes by position in this array.
    pub const ALL: [VendState; 3] = [VendState::NoMoney, VendState::HasMoney, VendState::Sold];

    /// The state's name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NoMoney => "NoMoney",
            Self::HasMoney => "HasMoney",
            Self::Sold => "Sold",
        }
    }
}

impl fmt::Display for VendState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
