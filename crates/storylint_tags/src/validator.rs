//! Tag scanning.
//!
//! Linear, case-insensitive literal scans; no regex engine touches the
//! untrusted input. Offsets are byte offsets, valid because tag names are
//! ASCII.

use crate::config::TagConfig;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of checking one tag against the response text.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TagCheckResult {
    /// The tag name as configured.
    pub tag_name: String,
    /// At least one opening tag was found.
    pub exists: bool,
    /// Every opening tag has a closing tag: `open_count == close_count`
    /// and `open_count > 0`.
    pub is_closed: bool,
    /// Number of `<name>` occurrences.
    pub open_count: usize,
    /// Number of `</name>` occurrences.
    pub close_count: usize,
    /// Content between the LAST opening tag and the next following
    /// closing tag, when such a pair exists.
    pub content: Option<String>,
    /// Set when more than one opening tag was found.
    pub warning: Option<String>,
}

/// Checks every configured tag against `text`.
#[must_use]
pub fn check_all(text: &str, config: &TagConfig) -> Vec<TagCheckResult> {
    config
        .specs()
        .iter()
        .map(|spec| check_one(text, &spec.name))
        .collect()
}

/// Names of required tags that are absent or unclosed.
#[must_use]
pub fn missing_required(text: &str, config: &TagConfig) -> Vec<String> {
    config
        .specs()
        .iter()
        .filter(|spec| spec.required)
        .filter_map(|spec| {
            let result = check_one(text, &spec.name);
            if result.exists && result.is_closed {
                None
            } else {
                Some(spec.name.clone())
            }
        })
        .collect()
}

/// Checks a single tag name against `text`.
#[must_use]
pub fn check_one(text: &str, name: &str) -> TagCheckResult {
    let open = format!("<{name}>");
    let close = format!("</{name}>");
    let opens = find_all_ci(text, &open);
    let closes = find_all_ci(text, &close);

    let exists = !opens.is_empty();
    let is_closed = exists && opens.len() == closes.len();

    // Last-occurrence-wins: content between the final opening tag and the
    // next closing tag after it.
    let content = opens.last().and_then(|&last_open| {
        let inner_start = last_open + open.len();
        closes
            .iter()
            .find(|&&close_at| close_at >= inner_start)
            .map(|&close_at| text[inner_start..close_at].to_string())
    });

    let warning = (opens.len() > 1).then(|| {
        format!(
            "found {} occurrences of <{name}>; keeping the last one",
            opens.len()
        )
    });

    TagCheckResult {
        tag_name: name.to_string(),
        exists,
        is_closed,
        open_count: opens.len(),
        close_count: closes.len(),
        content,
        warning,
    }
}

/// Byte offsets of every case-insensitive occurrence of `needle`.
///
/// `needle` is ASCII (a literal tag form), so comparing byte-by-byte with
/// ASCII case folding is exact and every hit starts on a char boundary.
fn find_all_ci(haystack: &str, needle: &str) -> Vec<usize> {
    let hay = haystack.as_bytes();
    let pat: Vec<u8> = needle.bytes().map(|b| b.to_ascii_lowercase()).collect();
    let mut hits = Vec::new();
    if pat.is_empty() || hay.len() < pat.len() {
        return hits;
    }
    for start in 0..=hay.len() - pat.len() {
        if hay[start..start + pat.len()]
            .iter()
            .zip(&pat)
            .all(|(a, b)| a.to_ascii_lowercase() == *b)
        {
            hits.push(start);
        }
    }
    hits
}
