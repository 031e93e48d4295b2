//! CSS selector construction
//!
//! A [`Selector`] is a compound selector built one fragment at a time. Each
//! addition is checked against the grammar of
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//! before anything is stored:
//!
//! - fragments appear in the order element, id, class, attribute,
//!   pseudo-class, pseudo-element;
//! - element, id, and pseudo-element appear at most once.
//!
//! Compound selectors are joined into complex selectors with
//! [`combine`](combine::combine).

use std::fmt;

use selkit_common::warning::warn_once;
use serde::Serialize;

use crate::error::SelectorError;

/// Combinators and combined selectors.
pub mod combine;
/// Fragment kinds and their rendering.
pub mod fragment;

pub use combine::{CombinedSelector, Combinator, Operand};
pub use fragment::{Fragment, FragmentKind};

/// A compound selector under construction.
///
/// Fragments are stored in the order they were added, which the grammar
/// checks guarantee is also the order CSS requires.
///
/// ```rust
/// use selkit_css::builder;
///
/// # fn main() -> Result<(), selkit_css::SelectorError> {
/// let selector = builder::id("main").class("container")?.class("editable")?;
/// assert_eq!(selector.stringify(), "#main.container.editable");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Selector {
    fragments: Vec<Fragment>,
}

impl Selector {
    /// Create an empty selector.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    /// Start a selector from a fragment. An empty selector accepts any
    /// first fragment, so this cannot fail.
    pub(crate) fn seeded(fragment: Fragment) -> Self {
        check_value(&fragment);
        Self {
            fragments: vec![fragment],
        }
    }

    /// Append a fragment after checking it against the compound selector grammar.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::DuplicateFragment`] if the fragment is an element,
    ///   id, or pseudo-element and one is already present.
    /// - [`SelectorError::Order`] if any fragment of a later kind is already
    ///   present.
    ///
    /// On error the selector is left exactly as it was.
    pub fn push(&mut self, fragment: Fragment) -> Result<(), SelectorError> {
        self.validate(fragment.kind)?;
        check_value(&fragment);
        self.fragments.push(fragment);
        Ok(())
    }

    fn validate(&self, kind: FragmentKind) -> Result<(), SelectorError> {
        if kind.is_unique() && self.contains(kind) {
            return Err(SelectorError::DuplicateFragment { kind });
        }
        // Compare against the latest kind anywhere in the selector, not just
        // the last fragment pushed.
        match self.max_kind() {
            Some(after) if after > kind => Err(SelectorError::Order { kind, after }),
            _ => Ok(()),
        }
    }

    fn with(
        mut self,
        kind: FragmentKind,
        value: impl Into<String>,
    ) -> Result<Self, SelectorError> {
        self.push(Fragment::new(kind, value))?;
        Ok(self)
    }

    /// Add a type selector such as `div`.
    ///
    /// # Errors
    ///
    /// Fails if the selector already has an element, or any other fragment.
    pub fn element(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.with(FragmentKind::Element, name)
    }

    /// Add an id selector; `id("main")` renders as `#main`.
    ///
    /// # Errors
    ///
    /// Fails if the selector already has an id, or any fragment that must
    /// follow the id.
    pub fn id(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.with(FragmentKind::Id, name)
    }

    /// Add a class selector; `class("container")` renders as `.container`.
    ///
    /// # Errors
    ///
    /// Fails if an attribute, pseudo-class, or pseudo-element is already present.
    pub fn class(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.with(FragmentKind::Class, name)
    }

    /// Add an attribute selector. The condition is written between brackets
    /// verbatim: `attr(r#"href$=".png""#)` renders as `[href$=".png"]`.
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-class or pseudo-element is already present.
    pub fn attr(self, condition: impl Into<String>) -> Result<Self, SelectorError> {
        self.with(FragmentKind::Attribute, condition)
    }

    /// Add a pseudo-class; `pseudo_class("focus")` renders as `:focus`.
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-element is already present.
    pub fn pseudo_class(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.with(FragmentKind::PseudoClass, name)
    }

    /// Add a pseudo-element; `pseudo_element("before")` renders as `::before`.
    ///
    /// # Errors
    ///
    /// Fails if the selector already has a pseudo-element.
    pub fn pseudo_element(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.with(FragmentKind::PseudoElement, name)
    }

    /// The fragments in the order they were added.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Number of fragments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether no fragment has been added yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Whether a fragment of `kind` is present.
    #[must_use]
    pub fn contains(&self, kind: FragmentKind) -> bool {
        self.fragments.iter().any(|f| f.kind == kind)
    }

    /// The latest kind (in grammar order) present in the selector.
    #[must_use]
    pub fn max_kind(&self) -> Option<FragmentKind> {
        self.fragments.iter().map(|f| f.kind).max()
    }

    /// Render the selector as CSS text.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            write!(f, "{fragment}")?;
        }
        Ok(())
    }
}

/// Report values that are accepted but almost certainly a mistake.
fn check_value(fragment: &Fragment) {
    if fragment.value.is_empty() {
        warn_once("Selector", &format!("empty {} name", fragment.kind));
    } else if fragment.kind != FragmentKind::Attribute
        && fragment.value.chars().any(char::is_whitespace)
    {
        warn_once(
            "Selector",
            &format!("{} name '{}' contains whitespace", fragment.kind, fragment.value),
        );
    }
}
