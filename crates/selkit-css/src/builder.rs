//! Entry points for building selectors.
//!
//! Each function starts a fresh [`Selector`] seeded with one fragment; the
//! result is then extended with the fluent methods on `Selector`:
//!
//! ```rust
//! use selkit_css::builder;
//!
//! # fn main() -> Result<(), selkit_css::SelectorError> {
//! let link = builder::element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
//! # Ok(())
//! # }
//! ```

use crate::selector::{Fragment, FragmentKind, Selector};

pub use crate::selector::combine::{combine, combine_all};

/// Start a selector with a type selector, e.g. `div`.
#[must_use]
pub fn element(name: impl Into<String>) -> Selector {
    Selector::seeded(Fragment::new(FragmentKind::Element, name))
}

/// Start a selector with an id, e.g. `#main`.
#[must_use]
pub fn id(name: impl Into<String>) -> Selector {
    Selector::seeded(Fragment::new(FragmentKind::Id, name))
}

/// Start a selector with a class, e.g. `.container`.
#[must_use]
pub fn class(name: impl Into<String>) -> Selector {
    Selector::seeded(Fragment::new(FragmentKind::Class, name))
}

/// Start a selector with an attribute condition, e.g. `[href]`.
#[must_use]
pub fn attr(condition: impl Into<String>) -> Selector {
    Selector::seeded(Fragment::new(FragmentKind::Attribute, condition))
}

/// Start a selector with a pseudo-class, e.g. `:focus`.
#[must_use]
pub fn pseudo_class(name: impl Into<String>) -> Selector {
    Selector::seeded(Fragment::new(FragmentKind::PseudoClass, name))
}

/// Start a selector with a pseudo-element, e.g. `::before`.
#[must_use]
pub fn pseudo_element(name: impl Into<String>) -> Selector {
    Selector::seeded(Fragment::new(FragmentKind::PseudoElement, name))
}

/// Start a selector with a fragment whose kind is only known at runtime.
#[must_use]
pub fn fragment(kind: FragmentKind, value: impl Into<String>) -> Selector {
    Selector::seeded(Fragment::new(kind, value))
}
