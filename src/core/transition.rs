//! The authoritative transition and notice table.
//!
//! All twelve (state, request) pairs are resolved by one exhaustive match:
//! the compiler proves the rule total, and adding a state or request later
//! refuses to build until every new pair is decided. A resolved pair never
//! fails; a request that does not apply in the current state is a no-op
//! that only emits its line.

use super::request::VendRequest;
use super::state::VendState;

/// Result of resolving one request against a state.
///
/// Handlers do not touch the controller: they report the next state (or
/// `None` for "no change") together with the line to emit, and the
/// controller applies the change. States stay pure values with no back
/// reference to their owner.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Outcome {
    /// The state to adopt, or `None` when the request is a no-op here.
    pub next: Option<VendState>,
    /// Reference wording of the informational line for this pair.
    pub line: &'static str,
}

/// Resolve one request against a state.
///
/// Deterministic and total: the same pair always yields the same outcome,
/// and every pair yields one.
///
/// # Example
///
/// ```rust
/// use vendo::core::{step, VendRequest, VendState};
///
/// let out = step(VendState::NoMoney, VendRequest::InsertMoney);
/// assert_eq!(out.next, Some(VendState::HasMoney));
/// assert_eq!(out.line, "Money inserted.");
///
/// let noop = step(VendState::NoMoney, VendRequest::EjectMoney);
/// assert_eq!(noop.next, None);
/// assert_eq!(noop.line, "No money to eject.");
/// ```
pub fn step(state: VendState, request: VendRequest) -> Outcome {
    use VendRequest::*;
    use VendState::*;

    match (state, request) {
        (NoMoney, InsertMoney) => go(HasMoney, "Money inserted."),
        (NoMoney, EjectMoney) => stay("No money to eject."),
        (NoMoney, SelectBeverage) => stay("No money."),
        (NoMoney, Vend) => stay("No money. Also no selection."),

        (HasMoney, InsertMoney) => stay("You already inserted money..."),
        (HasMoney, EjectMoney) => go(NoMoney, "Ejecting money..."),
        (HasMoney, SelectBeverage) => go(Sold, "Beverage selected."),
        (HasMoney, Vend) => stay("You have not selected a beverage."),

        (Sold, InsertMoney) => stay("Please wait while vending."),
        (Sold, EjectMoney) => stay("Too late buddy."),
        (Sold, SelectBeverage) => stay("You've already selected a beverage."),
        (Sold, Vend) => go(NoMoney, "Vending..."),
    }
}

/// The committed next state for a pair: the new state on a transition, the
/// unchanged one on a no-op.
///
/// # Example
///
/// ```rust
/// use vendo::core::{apply, VendRequest, VendState};
///
/// assert_eq!(
///     apply(VendState::Sold, VendRequest::Vend),
///     VendState::NoMoney
/// );
/// assert_eq!(
///     apply(VendState::Sold, VendRequest::EjectMoney),
///     VendState::Sold
/// );
/// ```
pub fn apply(state: VendState, request: VendRequest) -> VendState {
    step(state, request).next.unwrap_or(state)
}

fn go(next: VendState, line: &'static str) -> Outcome {
    Outcome {
        next: Some(next),
        line,
    }
}

fn stay(line: &'static str) -> Outcome {
    Outcome { next: None, line }
}

#[cfg(test)]
mod tests {
    use super::*;
    use VendRequest::*;
    use VendState::*;

    #[test]
    fn no_money_row_matches_table() {
        assert_eq!(step(NoMoney, InsertMoney).next, Some(HasMoney));
        assert_eq!(step(NoMoney, EjectMoney).next, None);
        assert_eq!(step(NoMoney, SelectBeverage).next, None);
        assert_eq!(step(NoMoney, Vend).next, None);
    }

    #[test]
    fn has_money_row_matches_table() {
        assert_eq!(step(HasMoney, InsertMoney).next, None);
        assert_eq!(step(HasMoney, EjectMoney).next, Some(NoMoney));
        assert_eq!(step(HasMoney, SelectBeverage).next, Some(Sold));
        assert_eq!(step(HasMoney, Vend).next, None);
    }

    #[test]
    fn sold_row_matches_table() {
        assert_eq!(step(Sold, InsertMoney).next, None);
        assert_eq!(step(Sold, EjectMoney).next, None);
        assert_eq!(step(Sold, SelectBeverage).next, None);
        assert_eq!(step(Sold, Vend).next, Some(NoMoney));
    }

    #[test]
    fn reference_wording_is_exact() {
        assert_eq!(step(NoMoney, InsertMoney).line, "Money inserted.");
        assert_eq!(step(NoMoney, EjectMoney).line, "No money to eject.");
        assert_eq!(step(NoMoney, SelectBeverage).line, "No money.");
        assert_eq!(step(NoMoney, Vend).line, "No money. Also no selection.");
        assert_eq!(step(HasMoney, InsertMoney).line, "You already inserted money...");
        assert_eq!(step(HasMoney, EjectMoney).line, "Ejecting money...");
        assert_eq!(step(HasMoney, SelectBeverage).line, "Beverage selected.");
        assert_eq!(step(HasMoney, Vend).line, "You have not selected a beverage.");
        assert_eq!(step(Sold, InsertMoney).line, "Please wait while vending.");
        assert_eq!(step(Sold, EjectMoney).line, "Too late buddy.");
        assert_eq!(step(Sold, SelectBeverage).line, "You've already selected a beverage.");
        assert_eq!(step(Sold, Vend).line, "Vending...");
    }

    #[test]
    fn rule_is_deterministic() {
        for state in VendState::ALL {
            for request in VendRequest::ALL {
                assert_eq!(step(state, request), step(state, request));
            }
        }
    }

    #[test]
    fn every_pair_stays_in_the_state_set() {
        for state in VendState::ALL {
            for request in VendRequest::ALL {
                let next = apply(state, request);
                assert!(VendState::ALL.contains(&next));
            }
        }
    }

    #[test]
    fn insert_money_is_idempotent_after_first_call() {
        let first = apply(NoMoney, InsertMoney);
        assert_eq!(first, HasMoney);
        let second = apply(first, InsertMoney);
        assert_eq!(second, HasMoney);
    }

    #[test]
    fn vending_twice_requires_a_full_cycle() {
        // No transition re-enters Sold directly.
        for request in VendRequest::ALL {
            assert_ne!(step(Sold, request).next, Some(Sold), "{request} re-entered Sold");
        }
        // After a vend, another vend is a no-op until money and a selection
        // come back in.
        let mut state = apply(Sold, Vend);
        assert_eq!(state, NoMoney);
        assert_eq!(apply(state, Vend), NoMoney);
        state = apply(state, InsertMoney);
        assert_eq!(state, HasMoney);
        state = apply(state, SelectBeverage);
        assert_eq!(state, Sold);
        assert_eq!(apply(state, Vend), NoMoney);
    }

    #[test]
    fn machine_is_cyclic_with_no_terminal_state() {
        // From every state some request still causes a transition.
        for state in VendState::ALL {
            assert!(
                VendRequest::ALL
                    .iter()
                    .any(|r| step(state, *r).next.is_some()),
                "{state} has no outgoing transition"
            );
        }
    }
}
