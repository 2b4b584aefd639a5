//! Parsed directive output types.

use std::fmt;

use storylint_foundation::Value;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The mutation a directive asks the variable store to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    /// Overwrite the value at the path.
    Set,
    /// Numeric increment (or list push, store-defined).
    Add,
    /// Numeric decrement.
    Subtract,
    /// Append to a list.
    Append,
    /// Remove the path, or a key/index under it.
    Remove,
    /// A verb the parser recognized structurally but cannot map; the
    /// command still carries the best-effort path and value.
    Unknown,
}

impl Operation {
    /// Maps a legacy call-style verb (`SET`, `SUB`, `CLEAR`, …) to an
    /// operation. Returns `None` for verbs outside the legacy set.
    #[must_use]
    pub fn from_legacy(name: &str) -> Option<Self> {
        let op = match name.to_ascii_uppercase().as_str() {
            "SET" | "INIT" => Self::Set,
            "ADD" => Self::Add,
            "SUB" => Self::Subtract,
            "APPEND" => Self::Append,
            "REMOVE" | "CLEAR" => Self::Remove,
            // No enum counterpart; kept as a best-effort command.
            "TOGGLE" => Self::Unknown,
            _ => return None,
        };
        Some(op)
    }

    /// Maps an operation name from a JSON descriptor (`"add"`, `"sub"`, …).
    /// Unrecognized names come back as [`Operation::Unknown`].
    #[must_use]
    pub fn from_descriptor(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "set" => Self::Set,
            "add" => Self::Add,
            "subtract" | "sub" => Self::Subtract,
            "append" => Self::Append,
            "remove" => Self::Remove,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Set => "set",
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Append => "append",
            Self::Remove => "remove",
            Self::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

/// One structured state-mutation directive.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedCommand {
    /// Dotted/bracketed address into the variable tree. Never empty.
    pub path: String,
    /// What to do at the path.
    pub operation: Operation,
    /// Typed-but-unvalidated payload.
    pub value: Value,
    /// Trailing `//` comment of the source statement, if any.
    pub comment: Option<String>,
    /// Original textual span, for audit and debugging.
    pub raw_source: String,
}

/// Everything [`crate::parse`] produces: the directives in source order
/// plus accumulated warnings for the fragments that did not parse.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParseOutcome {
    /// Directives in the order their source statements appeared. A
    /// consumer must apply them sequentially so a later directive for the
    /// same path wins.
    pub commands: Vec<ParsedCommand>,
    /// One entry per unit of work that failed (statement, decode attempt).
    pub warnings: Vec<String>,
}
