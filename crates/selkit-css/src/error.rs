//! Error types for selector construction.
//!
//! Every variant is a caller mistake: a fragment added out of grammar order, a
//! repeated unique fragment, or a malformed combine request. Failed operations
//! never leave a selector half-modified.

use thiserror::Error;

use crate::selector::FragmentKind;

/// Errors that can occur while building or combining selectors.
///
/// # Examples
///
/// ```rust
/// use selkit_css::{SelectorError, builder};
///
/// // An id after a class breaks the element, id, class, ... order.
/// let result = builder::element("div").class("a").and_then(|s| s.id("b"));
/// assert!(matches!(result, Err(SelectorError::Order { .. })));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// An element, id, or pseudo-element was added to a selector that
    /// already has one.
    #[error(
        "Element, id and pseudo-element should not occur more then one time inside the selector"
    )]
    DuplicateFragment {
        /// The repeated kind.
        kind: FragmentKind,
    },

    /// A fragment was added after a fragment of a later kind.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    Order {
        /// The kind that was rejected.
        kind: FragmentKind,
        /// The latest kind already present in the selector.
        after: FragmentKind,
    },

    /// `combine_all` was given fewer than two operands.
    #[error("at least two selectors are needed to combine, got {0}")]
    TooFewOperands(usize),

    /// `combine_all` was given a combinator list of the wrong length.
    #[error("expected {expected} combinators between the selectors, got {found}")]
    CombinatorCount {
        /// One less than the number of operands.
        expected: usize,
        /// How many combinators were supplied.
        found: usize,
    },

    /// An operand passed to `combine_all` was a selector with no fragments.
    #[error("selector {0} in the combination is empty")]
    EmptyOperand(usize),

    /// A combinator token was not one of ` `, `>`, `+`, `~`.
    #[error("unknown combinator '{0}'")]
    UnknownCombinator(String),

    /// A fragment kind name was not recognized.
    #[error("unknown fragment kind '{0}'")]
    UnknownFragmentKind(String),
}
