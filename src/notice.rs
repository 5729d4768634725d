//! Notice catalog: the lines a controller emits.
//!
//! Each handled request emits exactly one line, chosen by the
//! (state-before, request) pair. The default catalog carries the reference
//! wording from [`crate::core::step`]; a caller may localize individual
//! lines through [`CatalogBuilder`], but the mapping must stay one-to-one:
//! the line is the only user-visible evidence of which pair was handled.

use crate::core::{step, VendRequest, VendState};
use std::borrow::Cow;
use thiserror::Error;

/// Errors from building a catalog that would break the notice contract.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("line for ({state}, {request}) is empty; every pair must emit one line")]
    EmptyLine {
        state: VendState,
        request: VendRequest,
    },

    #[error("line {text:?} is used by more than one (state, request) pair")]
    DuplicateLine { text: String },
}

/// Complete (state, request) -> line mapping.
///
/// Construct with [`Catalog::default`] for the reference wording or with
/// [`Catalog::builder`] to localize lines.
///
/// # Example
///
/// ```rust
/// use vendo::notice::Catalog;
/// use vendo::core::{VendRequest, VendState};
///
/// let catalog = Catalog::default();
/// assert_eq!(
///     catalog.line(VendState::Sold, VendRequest::Vend),
///     "Vending..."
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    lines: [[Cow<'static, str>; 4]; 3],
}

impl Default for Catalog {
    /// The bit-exact reference wording.
    fn default() -> Self {
        Self {
            lines: reference_lines(),
        }
    }
}

impl Catalog {
    /// Start a builder pre-filled with the reference wording.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// The line emitted for a (state, request) pair.
    pub fn line(&self, state: VendState, request: VendRequest) -> &str {
        &self.lines[state_index(state)][request_index(request)]
    }
}

/// Builder for localized catalogs.
///
/// Overrides replace single lines; `build` verifies the result still emits
/// a distinct non-empty line for every pair.
///
/// # Example
///
/// ```rust
/// use vendo::notice::Catalog;
/// use vendo::core::{VendRequest, VendState};
///
/// let catalog = Catalog::builder()
///     .line(VendState::Sold, VendRequest::Vend, "Ihr Getränk kommt...")
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     catalog.line(VendState::Sold, VendRequest::Vend),
///     "Ihr Getränk kommt..."
/// );
/// // Untouched pairs keep the reference wording.
/// assert_eq!(
///     catalog.line(VendState::NoMoney, VendRequest::InsertMoney),
///     "Money inserted."
/// );
/// ```
#[derive(Clone, Debug)]
pub struct CatalogBuilder {
    lines: [[Cow<'static, str>; 4]; 3],
}

impl CatalogBuilder {
    /// Create a builder holding the reference wording.
    pub fn new() -> Self {
        Self {
            lines: reference_lines(),
        }
    }

    /// Replace the line for one (state, request) pair.
    pub fn line(
        mut self,
        state: VendState,
        request: VendRequest,
        text: impl Into<String>,
    ) -> Self {
        self.lines[state_index(state)][request_index(request)] = Cow::Owned(text.into());
        self
    }

    /// Build the catalog, verifying the one-to-one contract.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        for state in VendState::ALL {
            for request in VendRequest::ALL {
                let text = &self.lines[state_index(state)][request_index(request)];
                if text.is_empty() {
                    return Err(CatalogError::EmptyLine { state, request });
                }
            }
        }

        let mut seen: Vec<&str> = Vec::with_capacity(12);
        for row in &self.lines {
            for text in row {
                if seen.contains(&text.as_ref()) {
                    return Err(CatalogError::DuplicateLine {
                        text: text.clone().into_owned(),
                    });
                }
                seen.push(text.as_ref());
            }
        }

        Ok(Catalog { lines: self.lines })
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn reference_lines() -> [[Cow<'static, str>; 4]; 3] {
    VendState::ALL.map(|state| VendRequest::ALL.map(|request| Cow::Borrowed(step(state, request).line)))
}

// Storage indexes follow the declaration order of the ALL arrays.
fn state_index(state: VendState) -> usize {
    match state {
        VendState::NoMoney => 0,
        VendState::HasMoney => 1,
        VendState::Sold => 2,
    }
}

fn request_index(request: VendRequest) -> usize {
    match request {
        VendRequest::InsertMoney => 0,
        VendRequest::EjectMoney => 1,
        VendRequest::SelectBeverage => 2,
        VendRequest::Vend => 3,
    }
}
