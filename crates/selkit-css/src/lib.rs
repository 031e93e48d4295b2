//! CSS selector construction for selkit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Fragments** ([§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, id, class, attribute, pseudo-class, and pseudo-element fragments
//!   - The grammar order between them and the "at most once" rule
//!
//! - **Selector builder**
//!   - Fluent, validated construction of compound selectors
//!   - Serialization back to CSS text
//!
//! - **Combinators** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child, next-sibling, and subsequent-sibling
//!   - Nested and flat combined selectors
//!
//! # Not Implemented
//!
//! - Parsing selector text
//! - Specificity
//! - Matching against a document
//!
//! # Example
//!
//! ```rust
//! use selkit_css::{Combinator, builder, combine};
//!
//! # fn main() -> Result<(), selkit_css::SelectorError> {
//! let selector = combine(
//!     builder::element("div").id("main")?.class("container")?.class("draggable")?,
//!     Combinator::NextSibling,
//!     builder::element("table").id("data")?,
//! );
//! assert_eq!(selector.stringify(), "div#main.container.draggable + table#data");
//! # Ok(())
//! # }
//! ```

/// Factory functions that start a selector.
pub mod builder;
/// Errors raised while building or combining selectors.
pub mod error;
/// Selector fragments, compound selectors, and combinators.
pub mod selector;

// Re-exports for convenience
pub use error::SelectorError;
pub use selector::combine::{combine, combine_all};
pub use selector::{CombinedSelector, Combinator, Fragment, FragmentKind, Operand, Selector};
