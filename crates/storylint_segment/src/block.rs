//! Block kinds, spans, and the marker family table.

/// How a run of narrative text should be rendered.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BlockKind {
    /// Plain narration outside any marker pair.
    Text,
    /// Spoken dialogue, `「…」`.
    Dialogue,
    /// Interior thought, `*…*`.
    Thought,
    /// Scenery or environment description, `【…】`.
    Scenery,
    /// System or out-of-world emphasis, `【【…】】`.
    System,
}

impl BlockKind {
    /// Lowercase name, matching the serialized form.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Dialogue => "dialogue",
            Self::Thought => "thought",
            Self::Scenery => "scenery",
            Self::System => "system",
        }
    }
}

/// One typed run of the segmented text.
///
/// `start..end` is a half-open byte span into the original string, and
/// `raw_content` is exactly that slice, delimiters included.
/// `display_content` is what a renderer should show: the inner text for
/// marker blocks, the run itself for text blocks, and empty for gaps
/// that hold nothing but whitespace.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentBlock {
    /// Render kind.
    pub kind: BlockKind,
    /// The original slice, delimiters included.
    pub raw_content: String,
    /// Delimiter-stripped text for rendering.
    pub display_content: String,
    /// Byte offset of the block's first byte.
    pub start: usize,
    /// Byte offset one past the block's last byte.
    pub end: usize,
}

/// One marker family: a delimiter pair, the kind it produces, and a
/// priority used to resolve cross-family overlap (higher wins).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerFamily {
    /// Kind of block a match produces.
    pub kind: BlockKind,
    /// Opening delimiter.
    pub open: String,
    /// Closing delimiter.
    pub close: String,
    /// Overlap-resolution priority, higher wins.
    pub priority: u8,
}

impl MarkerFamily {
    /// Creates a family from static delimiters.
    #[must_use]
    pub fn new(kind: BlockKind, open: &str, close: &str, priority: u8) -> Self {
        Self {
            kind,
            open: open.to_string(),
            close: close.to_string(),
            priority,
        }
    }
}

/// The active set of marker families.
///
/// Immutable once built; a single table may serve concurrent callers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerTable {
    families: Vec<MarkerFamily>,
}

impl MarkerTable {
    /// Builds a table from an explicit family list.
    #[must_use]
    pub fn new(families: Vec<MarkerFamily>) -> Self {
        Self { families }
    }

    /// The configured families.
    #[must_use]
    pub fn families(&self) -> &[MarkerFamily] {
        &self.families
    }
}

impl Default for MarkerTable {
    fn default() -> Self {
        Self::new(vec![
            MarkerFamily::new(BlockKind::System, "【【", "】】", 100),
            MarkerFamily::new(BlockKind::Scenery, "【", "】", 80),
            MarkerFamily::new(BlockKind::Dialogue, "「", "」", 60),
            MarkerFamily::new(BlockKind::Thought, "*", "*", 40),
        ])
    }
}
