//! Simple selector fragments and their grammar ordering.

use std::fmt;

use serde::Serialize;
use strum_macros::{Display, EnumString};

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// The kind of a single fragment within a compound selector.
///
/// Variants are declared in the order a compound selector must list them:
/// the derived `Ord` is the grammar order, and [`FragmentKind::rank`] exposes
/// it as a number from 1 to 6.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FragmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `table`, `a`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#data`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.container`, `.draggable`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[href$=".png"]`
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:focus`, `:nth-of-type(even)`
    PseudoClass,

    /// [CSS Pseudo-Elements Level 4](https://www.w3.org/TR/css-pseudo-4/)
    ///
    /// Examples: `::before`, `::first-line`
    PseudoElement,
}

impl FragmentKind {
    /// Every kind, in grammar order.
    pub const ORDER: [Self; 6] = [
        Self::Element,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
    ];

    /// Position of this kind in the grammar order, starting at 1.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Element => 1,
            Self::Id => 2,
            Self::Class => 3,
            Self::Attribute => 4,
            Self::PseudoClass => 5,
            Self::PseudoElement => 6,
        }
    }

    /// Element, id, and pseudo-element may appear at most once per selector.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Text written before the fragment value.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    /// Text written after the fragment value.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            _ => "",
        }
    }
}

/// One piece of a compound selector: a kind plus its raw value.
///
/// The value is stored exactly as given. `Fragment::new(FragmentKind::Attribute,
/// r#"href$=".png""#)` renders as `[href$=".png"]`; nothing is parsed or escaped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Fragment {
    /// What kind of fragment this is.
    pub kind: FragmentKind,
    /// The name, attribute condition, or pseudo-class argument text.
    pub value: String,
}

impl Fragment {
    /// Create a fragment of the given kind.
    #[must_use]
    pub fn new(kind: FragmentKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.kind.prefix(), self.value, self.kind.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_follow_declaration_order() {
        for pair in FragmentKind::ORDER.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].rank() + 1, pair[1].rank());
        }
        assert_eq!(FragmentKind::Element.rank(), 1);
        assert_eq!(FragmentKind::PseudoElement.rank(), 6);
    }

    #[test]
    fn test_unique_kinds() {
        let unique: Vec<_> = FragmentKind::ORDER
            .into_iter()
            .filter(|kind| kind.is_unique())
            .collect();
        assert_eq!(
            unique,
            [
                FragmentKind::Element,
                FragmentKind::Id,
                FragmentKind::PseudoElement
            ]
        );
    }

    #[test]
    fn test_fragment_rendering() {
        let cases = [
            (FragmentKind::Element, "div", "div"),
            (FragmentKind::Id, "main", "#main"),
            (FragmentKind::Class, "container", ".container"),
            (FragmentKind::Attribute, r#"href$=".png""#, r#"[href$=".png"]"#),
            (FragmentKind::PseudoClass, "focus", ":focus"),
            (FragmentKind::PseudoElement, "before", "::before"),
        ];
        for (kind, value, expected) in cases {
            assert_eq!(Fragment::new(kind, value).to_string(), expected);
        }
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(FragmentKind::PseudoClass.to_string(), "pseudo-class");
        assert_eq!(FragmentKind::Attribute.to_string(), "attribute");
        assert_eq!(
            "pseudo-element".parse::<FragmentKind>(),
            Ok(FragmentKind::PseudoElement)
        );
        assert_eq!("attr".parse::<FragmentKind>(), Ok(FragmentKind::Attribute));
        assert_eq!(
            "attribute".parse::<FragmentKind>(),
            Ok(FragmentKind::Attribute)
        );
        assert!("tag".parse::<FragmentKind>().is_err());
    }
}
