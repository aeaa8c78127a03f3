//! CSS selector building
//!
//! This module builds selector strings per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/) out of chained,
//! immutable builder steps. Nothing here parses CSS; values are taken
//! verbatim and only the order and multiplicity of parts are validated.

use std::fmt;

use quill_common::warning::warn_once;
use strum_macros::{Display, EnumString};
use thiserror::Error;

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// The category of a single part of a compound selector. The discriminant
/// is the part's rank: within one compound selector parts must appear in
/// non-decreasing rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum PartKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Example: `div`
    #[strum(serialize = "element")]
    Element = 1,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Example: `#main`
    #[strum(serialize = "id")]
    Id = 2,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Example: `.container`
    #[strum(serialize = "class")]
    Class = 3,

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Example: `[href$=".png"]`
    #[strum(serialize = "attribute")]
    Attribute = 4,

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Example: `:focus`
    #[strum(serialize = "pseudo-class")]
    PseudoClass = 5,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Example: `::before`
    #[strum(serialize = "pseudo-element")]
    PseudoElement = 6,
}

impl PartKind {
    /// All part kinds in rank order.
    pub const ALL: [Self; 6] = [
        Self::Element,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
    ];

    /// Position of this kind in the required part ordering (1-based).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Element, id and pseudo-element may occur at most once per compound
    /// selector.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Render `value` as a selector fragment of this kind.
    #[must_use]
    pub fn render(self, value: &str) -> String {
        match self {
            Self::Element => value.to_string(),
            Self::Id => format!("#{value}"),
            Self::Class => format!(".{value}"),
            Self::Attribute => format!("[{value}]"),
            Self::PseudoClass => format!(":{value}"),
            Self::PseudoElement => format!("::{value}"),
        }
    }

    const fn singleton_bit(self) -> u8 {
        match self {
            Self::Element => 0b001,
            Self::Id => 0b010,
            Self::PseudoElement => 0b100,
            Self::Class | Self::Attribute | Self::PseudoClass => 0,
        }
    }
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// The symbols [`SelectorBuilder::combine`] is meant to be called with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    #[strum(serialize = " ")]
    Descendant,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    #[strum(serialize = "+")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    #[strum(serialize = "~")]
    SubsequentSibling,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    #[strum(serialize = ">")]
    Child,
}

impl Combinator {
    /// The combinator symbol as written between two compound selectors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
            Self::Child => ">",
        }
    }
}

/// Invalid use of the selector builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// An element, id or pseudo-element was added to a selector that
    /// already has one.
    #[error(
        "Element, id and pseudo-element should not occur more then one time inside the selector (repeated {kind})"
    )]
    DuplicateSingletonPart {
        /// The repeated kind.
        kind: PartKind,
    },

    /// A part was added after a part of higher rank.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element (got {next} after {previous})"
    )]
    OutOfOrderPart {
        /// The earlier, higher-ranked part.
        previous: PartKind,
        /// The part that broke the ordering.
        next: PartKind,
    },
}

/// Set of singleton kinds already used, one bit per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct UsedSingletons(u8);

impl UsedSingletons {
    const fn contains(self, kind: PartKind) -> bool {
        let bit = kind.singleton_bit();
        bit != 0 && self.0 & bit == bit
    }

    const fn with(self, kind: PartKind) -> Self {
        Self(self.0 | kind.singleton_bit())
    }
}

/// An immutable, chainable CSS selector under construction.
///
/// Every part-adding method leaves `self` untouched and returns a new
/// builder, so a failed call never affects the selector it was called on.
///
/// ```
/// use quill_css::selector::css_selector_builder;
///
/// let selector = css_selector_builder()
///     .element("a")?
///     .attr("href$=\".png\"")?
///     .pseudo_class("focus")?;
/// assert_eq!(selector.stringify(), "a[href$=\".png\"]:focus");
/// # Ok::<(), quill_css::selector::SelectorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorBuilder {
    fragment: String,
    used: UsedSingletons,
    parts: Vec<PartKind>,
    combined: bool,
}

/// Entry point: a fresh, empty builder.
#[must_use]
pub fn css_selector_builder() -> SelectorBuilder {
    SelectorBuilder::new()
}

impl SelectorBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a type selector (`div`).
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateSingletonPart`] if an element is already
    /// present, [`SelectorError::OutOfOrderPart`] if a higher-ranked part
    /// precedes it.
    pub fn element(&self, value: &str) -> Result<Self, SelectorError> {
        self.push(PartKind::Element, value)
    }

    /// Append an id selector (`#value`).
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateSingletonPart`] if an id is already
    /// present, [`SelectorError::OutOfOrderPart`] if a higher-ranked part
    /// precedes it.
    pub fn id(&self, value: &str) -> Result<Self, SelectorError> {
        self.push(PartKind::Id, value)
    }

    /// Append a class selector (`.value`). May repeat.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrderPart`] if a higher-ranked part precedes it.
    pub fn class(&self, value: &str) -> Result<Self, SelectorError> {
        self.push(PartKind::Class, value)
    }

    /// Append an attribute selector. `value` is the bracket contents, e.g.
    /// `href$=".png"`. May repeat.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrderPart`] if a higher-ranked part precedes it.
    pub fn attr(&self, value: &str) -> Result<Self, SelectorError> {
        self.push(PartKind::Attribute, value)
    }

    /// Append a pseudo-class (`:value`). May repeat.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrderPart`] if a pseudo-element precedes it.
    pub fn pseudo_class(&self, value: &str) -> Result<Self, SelectorError> {
        self.push(PartKind::PseudoClass, value)
    }

    /// Append a pseudo-element (`::value`).
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateSingletonPart`] if a pseudo-element is
    /// already present.
    pub fn pseudo_element(&self, value: &str) -> Result<Self, SelectorError> {
        self.push(PartKind::PseudoElement, value)
    }

    /// Append a part of any kind.
    ///
    /// # Errors
    ///
    /// See [`SelectorError`].
    pub fn push(&self, kind: PartKind, value: &str) -> Result<Self, SelectorError> {
        if kind.is_singleton() && self.used.contains(kind) {
            return Err(SelectorError::DuplicateSingletonPart { kind });
        }

        let mut parts = self.parts.clone();
        parts.push(kind);
        if let Some(pair) = parts.windows(2).find(|pair| pair[0].rank() > pair[1].rank()) {
            return Err(SelectorError::OutOfOrderPart {
                previous: pair[0],
                next: pair[1],
            });
        }

        Ok(Self {
            fragment: format!("{}{}", self.fragment, kind.render(value)),
            used: self.used.with(kind),
            parts,
            combined: self.combined,
        })
    }

    /// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
    ///
    /// Join two built selectors with a combinator: `left combinator right`,
    /// single spaces around the combinator.
    ///
    /// The combinator is not validated; a symbol outside `' '`, `+`, `~`,
    /// `>` is used as given and reported once through the warning system.
    /// The result carries no part history, so adding parts to it starts a
    /// fresh ordering sequence.
    #[must_use]
    pub fn combine(left: &Self, combinator: &str, right: &Self) -> Self {
        if combinator.parse::<Combinator>().is_err() {
            warn_once(
                "Selector",
                &format!("unknown combinator '{combinator}' passed to combine"),
            );
        }

        Self {
            fragment: format!("{left} {combinator} {right}"),
            used: UsedSingletons::default(),
            parts: Vec::new(),
            combined: true,
        }
    }

    /// The selector text built so far.
    #[must_use]
    pub fn stringify(&self) -> &str {
        &self.fragment
    }

    /// Part kinds appended since the builder was created or last combined.
    #[must_use]
    pub fn parts(&self) -> &[PartKind] {
        &self.parts
    }

    /// Whether this selector came out of [`SelectorBuilder::combine`].
    #[must_use]
    pub const fn is_combined(&self) -> bool {
        self.combined
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fragment)
    }
}
