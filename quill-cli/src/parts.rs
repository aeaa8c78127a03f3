//! Command-line selector syntax.
//!
//! A selector is given as a list of tokens: `kind:value` parts
//! (`element:div`, `id:main`, `class:x`, `attr:href`, `pseudo-class:hover`,
//! `pseudo-element:before`) separated by combinator tokens (`+`, `~`, `>`,
//! `descendant`).

use anyhow::{Context, Result, anyhow, bail};
use quill_css::{Combinator, PartKind, SelectorBuilder, css_selector_builder};

/// One command-line token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// A compound-selector part.
    Part(PartKind, &'a str),
    /// A combinator between two compound selectors.
    Combinator(Combinator),
}

fn part_kind(name: &str) -> Option<PartKind> {
    match name {
        "element" => Some(PartKind::Element),
        "id" => Some(PartKind::Id),
        "class" => Some(PartKind::Class),
        "attr" | "attribute" => Some(PartKind::Attribute),
        "pseudo-class" => Some(PartKind::PseudoClass),
        "pseudo-element" => Some(PartKind::PseudoElement),
        _ => None,
    }
}

/// Classify a single token.
///
/// # Errors
///
/// Returns an error for tokens that are neither a combinator nor a
/// `kind:value` pair with a known kind.
pub fn parse_token(token: &str) -> Result<Token<'_>> {
    if token == "descendant" {
        return Ok(Token::Combinator(Combinator::Descendant));
    }
    if let Ok(combinator) = token.parse::<Combinator>() {
        return Ok(Token::Combinator(combinator));
    }

    let (kind, value) = token
        .split_once(':')
        .ok_or_else(|| anyhow!("expected `kind:value` or a combinator, got '{token}'"))?;
    let kind = part_kind(kind).ok_or_else(|| anyhow!("unknown selector part kind '{kind}'"))?;
    Ok(Token::Part(kind, value))
}

/// Build a selector from command-line tokens.
///
/// # Errors
///
/// Returns an error for unparseable tokens, a combinator without a
/// selector on both sides, or invalid part ordering.
pub fn build_selector<I, S>(tokens: I) -> Result<SelectorBuilder>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut compounds = Vec::new();
    let mut combinators = Vec::new();
    let mut current = css_selector_builder();

    for raw in tokens {
        let raw = raw.as_ref();
        match parse_token(raw)? {
            Token::Part(kind, value) => {
                current = current
                    .push(kind, value)
                    .with_context(|| format!("cannot add '{raw}' to '{current}'"))?;
            }
            Token::Combinator(combinator) => {
                if current.parts().is_empty() {
                    bail!("combinator '{raw}' needs a selector on its left");
                }
                compounds.push(std::mem::take(&mut current));
                combinators.push(combinator);
            }
        }
    }

    if current.parts().is_empty() && !combinators.is_empty() {
        bail!("trailing combinator needs a selector on its right");
    }
    compounds.push(current);

    // Fold from the right, nesting the way the builder is usually chained.
    let mut selector = compounds.pop().unwrap_or_default();
    while let (Some(left), Some(combinator)) = (compounds.pop(), combinators.pop()) {
        selector = SelectorBuilder::combine(&left, combinator.as_str(), &selector);
    }
    Ok(selector)
}
