//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
//!
//! Joining compound selectors into complex selectors.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::Selector;
use crate::error::SelectorError;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    SubsequentSibling,
}

impl Combinator {
    /// The single-character token for this combinator.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::Descendant => ' ',
            Self::Child => '>',
            Self::NextSibling => '+',
            Self::SubsequentSibling => '~',
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for Combinator {
    type Err = SelectorError;

    /// Accepts the bare token or a descriptive name.
    ///
    /// `" "` is only recognized untrimmed, since trimming it would leave
    /// nothing to match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == " " {
            return Ok(Self::Descendant);
        }
        match s.trim() {
            "descendant" => Ok(Self::Descendant),
            ">" | "child" => Ok(Self::Child),
            "+" | "next-sibling" | "adjacent" => Ok(Self::NextSibling),
            "~" | "subsequent-sibling" | "general" => Ok(Self::SubsequentSibling),
            _ => Err(SelectorError::UnknownCombinator(s.to_string())),
        }
    }
}

/// One side of a combinator: a compound selector or an already combined one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Operand {
    /// A compound selector.
    Selector(Selector),
    /// A nested complex selector, rendered inline.
    Combined(CombinedSelector),
}

impl From<Selector> for Operand {
    fn from(selector: Selector) -> Self {
        Self::Selector(selector)
    }
}

/// Operands are copied, so one selector can be reused across many combines.
impl From<&Selector> for Operand {
    fn from(selector: &Selector) -> Self {
        Self::Selector(selector.clone())
    }
}

impl From<CombinedSelector> for Operand {
    fn from(combined: CombinedSelector) -> Self {
        Self::Combined(combined)
    }
}

impl From<&CombinedSelector> for Operand {
    fn from(combined: &CombinedSelector) -> Self {
        Self::Combined(combined.clone())
    }
}

impl Operand {
    /// Whether this operand renders as no text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Selector(selector) => selector.is_empty(),
            Self::Combined(_) => false,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selector(selector) => fmt::Display::fmt(selector, f),
            Self::Combined(combined) => fmt::Display::fmt(combined, f),
        }
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// "A complex selector is a chain of one or more compound selectors separated
/// by combinators."
///
/// Operands are kept left to right, with `combinators[i]` sitting between
/// `operands[i]` and `operands[i + 1]`. There are always at least two operands.
///
/// Each combinator is written with a single space on either side, so the
/// descendant combinator renders as three spaces:
///
/// ```text
/// div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CombinedSelector {
    operands: Vec<Operand>,
    combinators: Vec<Combinator>,
}

impl CombinedSelector {
    /// Join two operands with a combinator.
    ///
    /// Operands are not checked: an empty selector renders as nothing, so
    /// `new(Selector::new(), Combinator::Child, li)` gives `" > li"`. Use
    /// [`CombinedSelector::from_parts`] to have empty operands rejected.
    #[must_use]
    pub fn new(
        left: impl Into<Operand>,
        combinator: Combinator,
        right: impl Into<Operand>,
    ) -> Self {
        Self {
            operands: vec![left.into(), right.into()],
            combinators: vec![combinator],
        }
    }

    /// Join `operands` with `combinators`, which must hold exactly one
    /// combinator per gap.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::TooFewOperands`] for fewer than two operands.
    /// - [`SelectorError::CombinatorCount`] if `combinators.len()` is not
    ///   `operands.len() - 1`.
    /// - [`SelectorError::EmptyOperand`] with the 1-based position of the
    ///   first selector that has no fragments.
    pub fn from_parts(
        operands: Vec<Operand>,
        combinators: Vec<Combinator>,
    ) -> Result<Self, SelectorError> {
        if operands.len() < 2 {
            return Err(SelectorError::TooFewOperands(operands.len()));
        }
        let expected = operands.len() - 1;
        if combinators.len() != expected {
            return Err(SelectorError::CombinatorCount {
                expected,
                found: combinators.len(),
            });
        }
        if let Some(index) = operands.iter().position(Operand::is_empty) {
            return Err(SelectorError::EmptyOperand(index + 1));
        }
        Ok(Self {
            operands,
            combinators,
        })
    }

    /// Extend the chain on the right. Like [`CombinedSelector::new`], this
    /// does not check the operand.
    #[must_use]
    pub fn then(mut self, combinator: Combinator, operand: impl Into<Operand>) -> Self {
        self.combinators.push(combinator);
        self.operands.push(operand.into());
        self
    }

    /// The operands, left to right.
    #[must_use]
    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }

    /// The combinators, left to right.
    #[must_use]
    pub fn combinators(&self) -> &[Combinator] {
        &self.combinators
    }

    /// Render the complex selector as CSS text.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut operands = self.operands.iter();
        if let Some(first) = operands.next() {
            write!(f, "{first}")?;
        }
        for (combinator, operand) in self.combinators.iter().zip(operands) {
            write!(f, " {combinator} {operand}")?;
        }
        Ok(())
    }
}

/// Join two operands with a combinator.
///
/// Empty selectors are accepted and render as nothing; see
/// [`combine_all`] for the checked form.
///
/// ```rust
/// use selkit_css::{Combinator, builder, combine};
///
/// # fn main() -> Result<(), selkit_css::SelectorError> {
/// let rows = combine(builder::element("table"), Combinator::Child, builder::element("tr"));
/// assert_eq!(rows.stringify(), "table > tr");
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn combine(
    left: impl Into<Operand>,
    combinator: Combinator,
    right: impl Into<Operand>,
) -> CombinedSelector {
    CombinedSelector::new(left, combinator, right)
}

/// Join a list of operands with a list of combinators, one per gap.
///
/// # Errors
///
/// See [`CombinedSelector::from_parts`].
pub fn combine_all(
    operands: impl IntoIterator<Item = Operand>,
    combinators: impl IntoIterator<Item = Combinator>,
) -> Result<CombinedSelector, SelectorError> {
    CombinedSelector::from_parts(
        operands.into_iter().collect(),
        combinators.into_iter().collect(),
    )
}
