//! Tag configuration.
//!
//! Configuration is a plain immutable value passed explicitly into each
//! call. Construct it once, share it by reference; nothing here mutates
//! after construction.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One recognized tag and whether the response must contain it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TagSpec {
    /// Tag name, matched case-insensitively as `<name>` / `</name>`.
    pub name: String,
    /// Required tags block the pass verdict when absent or unclosed.
    pub required: bool,
}

impl TagSpec {
    /// Creates a required tag spec.
    #[must_use]
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
        }
    }

    /// Creates an optional tag spec.
    #[must_use]
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
        }
    }
}

/// The full set of recognized tags.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TagConfig {
    specs: Vec<TagSpec>,
}

/// The tag wrapping narrative text shown to the player. Required.
pub const NARRATIVE_TAG: &str = "gametxt";
/// The tag wrapping the model's reasoning. Optional.
pub const REASONING_TAG: &str = "thinking";
/// The tag wrapping structured history entries. Optional.
pub const HISTORY_TAG: &str = "history";
/// The tag wrapping variable-mutation directives. Optional.
pub const DIRECTIVE_TAG: &str = "UpdateVariable";

impl TagConfig {
    /// Builds a config from an explicit spec list.
    #[must_use]
    pub fn new(specs: Vec<TagSpec>) -> Self {
        Self { specs }
    }

    /// The recognized tag specs, in configuration order.
    #[must_use]
    pub fn specs(&self) -> &[TagSpec] {
        &self.specs
    }

    /// Looks up a spec by case-insensitive name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TagSpec> {
        self.specs
            .iter()
            .find(|spec| spec.name.eq_ignore_ascii_case(name))
    }
}

impl Default for TagConfig {
    /// The stock tag set: optional `thinking`, required `gametxt`,
    /// optional `history`, optional `UpdateVariable`.
    fn default() -> Self {
        Self::new(vec![
            TagSpec::optional(REASONING_TAG),
            TagSpec::required(NARRATIVE_TAG),
            TagSpec::optional(HISTORY_TAG),
            TagSpec::optional(DIRECTIVE_TAG),
        ])
    }
}
