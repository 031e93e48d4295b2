//! Turning command-line parts into a selector.
//!
//! A script is a list of parts. `kind=value` parts add a fragment to the
//! current compound selector; combinator parts (`>`, `+`, `~`, `descendant`)
//! close it and start the next one.

use anyhow::{Context, Result, bail};
use selkit_css::{
    CombinedSelector, Combinator, Fragment, FragmentKind, Operand, Selector, SelectorError,
};
use serde::Serialize;

/// The result of running a script: either a lone compound selector or a
/// combined one.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Built {
    /// No combinators were used.
    Selector(Selector),
    /// At least one combinator was used.
    Combined(CombinedSelector),
}

impl Built {
    /// Render as CSS text.
    #[must_use]
    pub fn stringify(&self) -> String {
        match self {
            Self::Selector(selector) => selector.stringify(),
            Self::Combined(combined) => combined.stringify(),
        }
    }
}

/// Split `kind=value` at the first `=`; attribute conditions keep the rest.
fn parse_fragment(part: &str) -> Result<Fragment> {
    let Some((kind, value)) = part.split_once('=') else {
        bail!("expected 'kind=value' or a combinator, got '{part}'");
    };
    let kind: FragmentKind = kind
        .parse()
        .map_err(|_| SelectorError::UnknownFragmentKind(kind.to_string()))?;
    Ok(Fragment::new(kind, value))
}

/// Build a selector from script parts.
///
/// # Errors
///
/// Fails on a malformed part, a fragment that breaks the selector grammar,
/// or a combinator with nothing on one side.
pub fn run<S: AsRef<str>>(parts: &[S]) -> Result<Built> {
    let mut operands: Vec<Operand> = Vec::new();
    let mut combinators: Vec<Combinator> = Vec::new();
    let mut current = Selector::new();

    for (index, part) in parts.iter().enumerate() {
        let part = part.as_ref();
        if let Ok(combinator) = part.parse::<Combinator>() {
            if current.is_empty() {
                bail!(
                    "combinator '{part}' at position {} has no selector before it",
                    index + 1
                );
            }
            operands.push(std::mem::take(&mut current).into());
            combinators.push(combinator);
            continue;
        }
        let fragment = parse_fragment(part)?;
        current
            .push(fragment)
            .with_context(|| format!("cannot add '{part}' to '{current}'"))?;
    }

    if current.is_empty() {
        bail!("expected a selector after the last combinator");
    }
    if operands.is_empty() {
        return Ok(Built::Selector(current));
    }
    operands.push(current.into());
    Ok(Built::Combined(CombinedSelector::from_parts(operands, combinators)?))
}
