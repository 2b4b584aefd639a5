//! The bracket/quote state machine and its helpers.

/// Scanner state advanced character-by-character over untrusted text.
///
/// Tracks whether the cursor is inside a single- or double-quoted string
/// and the current nesting depth of `{}` and `[]`. A character is
/// "structural" (comma, colon, parenthesis, comment slash) only when the
/// scanner is outside any string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanState {
    in_string: Option<char>,
    escaped: bool,
    brace_depth: u32,
    bracket_depth: u32,
}

impl ScanState {
    /// Creates a fresh state: outside strings, both depths zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one character through the machine.
    ///
    /// An unescaped quote matching the opening quote leaves the string;
    /// a backslash inside a string suppresses toggling on the next
    /// character. Depth counters only move outside strings and never go
    /// below zero, so stray closers in malformed input cannot poison
    /// later statements.
    pub fn advance(&mut self, ch: char) {
        if self.escaped {
            self.escaped = false;
            return;
        }
        if let Some(quote) = self.in_string {
            match ch {
                '\\' => self.escaped = true,
                c if c == quote => self.in_string = None,
                _ => {}
            }
            return;
        }
        match ch {
            '\'' | '"' => self.in_string = Some(ch),
            '{' => self.brace_depth += 1,
            '}' => self.brace_depth = self.brace_depth.saturating_sub(1),
            '[' => self.bracket_depth += 1,
            ']' => self.bracket_depth = self.bracket_depth.saturating_sub(1),
            _ => {}
        }
    }

    /// Feeds every character of `s` through the machine.
    pub fn advance_str(&mut self, s: &str) {
        for ch in s.chars() {
            self.advance(ch);
        }
    }

    /// The quote character of the string the cursor is inside, if any.
    #[must_use]
    pub const fn in_string(&self) -> Option<char> {
        self.in_string
    }

    /// Current `{}` nesting depth.
    #[must_use]
    pub const fn brace_depth(&self) -> u32 {
        self.brace_depth
    }

    /// Current `[]` nesting depth.
    #[must_use]
    pub const fn bracket_depth(&self) -> u32 {
        self.bracket_depth
    }

    /// True when the cursor is outside any string and both depths are zero.
    #[must_use]
    pub const fn at_top_level(&self) -> bool {
        self.in_string.is_none() && self.brace_depth == 0 && self.bracket_depth == 0
    }
}

/// Splits `s` on occurrences of `sep` that sit at top level.
///
/// Separators inside strings or nested `{}`/`[]` values are ignored, so
/// `_.set('a', {"x": [1, 2]})` splits its arguments into exactly two
/// pieces. Pieces are not trimmed; empty pieces are kept so callers can
/// diagnose `f(,)`-shaped input.
#[must_use]
pub fn split_top_level(s: &str, sep: char) -> Vec<&str> {
    let mut state = ScanState::new();
    let mut pieces = Vec::new();
    let mut piece_start = 0;
    for (idx, ch) in s.char_indices() {
        if ch == sep && state.at_top_level() {
            pieces.push(&s[piece_start..idx]);
            piece_start = idx + ch.len_utf8();
        } else {
            state.advance(ch);
        }
    }
    pieces.push(&s[piece_start..]);
    pieces
}

/// Returns the byte offset of the first `//` that is not inside a string.
#[must_use]
pub fn find_comment(s: &str) -> Option<usize> {
    find_comment_from(&ScanState::new(), s)
}

/// Like [`find_comment`], but scanning resumes from an existing state —
/// needed when `s` is one line of a statement whose earlier lines left
/// the scanner inside a string.
#[must_use]
pub fn find_comment_from(state: &ScanState, s: &str) -> Option<usize> {
    let mut state = state.clone();
    let mut prev_slash_at: Option<usize> = None;
    for (idx, ch) in s.char_indices() {
        if state.in_string.is_none() && ch == '/' {
            if let Some(start) = prev_slash_at {
                // Two adjacent slashes outside any string.
                if start + 1 == idx {
                    return Some(start);
                }
            }
            prev_slash_at = Some(idx);
        } else {
            prev_slash_at = None;
        }
        state.advance(ch);
    }
    None
}

/// Splits `s` into (code, trailing comment text) at the first `//` outside
/// a string. The comment text excludes the slashes and is trimmed; `None`
/// when there is no comment.
#[must_use]
pub fn strip_comment(s: &str) -> (&str, Option<&str>) {
    match find_comment(s) {
        Some(idx) => (&s[..idx], Some(s[idx + 2..].trim())),
        None => (s, None),
    }
}

/// Whether an accumulated statement buffer is complete.
///
/// A statement ends only when the scanner is back at top level and the
/// trimmed buffer ends with `)` or `);`. This lets a single call span
/// multiple lines when it carries JSON-like arguments.
#[must_use]
pub fn is_statement_end(state: &ScanState, buffer: &str) -> bool {
    if !state.at_top_level() {
        return false;
    }
    let trimmed = buffer.trim_end();
    trimmed.ends_with(')') || trimmed.ends_with(");")
}
