//! Candidate scanning and overlap resolution.
//!
//! Each marker family is scanned independently with a single linear
//! pass, producing candidate spans. Candidates are then resolved
//! greedily by priority descending (start ascending as the tiebreak):
//! a candidate is accepted only if it intersects no accepted span, so a
//! system run swallows any dialogue-shaped substring it contains.
//! Finally the text is walked once, filling every gap between accepted
//! spans with a plain text block, which makes the result a total
//! partition of the input.
//!
//! An unterminated marker never becomes a candidate; its characters
//! fall into the surrounding text block.

use crate::block::{BlockKind, ContentBlock, MarkerFamily, MarkerTable};

/// A family match before overlap resolution. Byte span, half-open.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    start: usize,
    end: usize,
    open_len: usize,
    close_len: usize,
    kind: BlockKind,
    priority: u8,
}

/// Segments `text` using the default marker table.
#[must_use]
pub fn segment(text: &str) -> Vec<ContentBlock> {
    segment_with(text, &MarkerTable::default())
}

/// Segments `text` using a caller-supplied marker table.
#[must_use]
pub fn segment_with(text: &str, table: &MarkerTable) -> Vec<ContentBlock> {
    let mut candidates = Vec::new();
    for family in table.families() {
        scan_family(text, family, &mut candidates);
    }

    let accepted = resolve_overlaps(candidates);

    let mut blocks = Vec::new();
    let mut cursor = 0;
    for candidate in &accepted {
        if candidate.start > cursor {
            blocks.push(text_block(text, cursor, candidate.start));
        }
        blocks.push(marker_block(text, candidate));
        cursor = candidate.end;
    }
    if cursor < text.len() {
        blocks.push(text_block(text, cursor, text.len()));
    }
    blocks
}

/// Collects all non-overlapping matches of one family.
fn scan_family(text: &str, family: &MarkerFamily, out: &mut Vec<Candidate>) {
    if family.open == family.close {
        scan_symmetric(text, family, out);
        return;
    }
    let mut at = 0;
    while let Some(rel) = text[at..].find(&family.open) {
        let start = at + rel;
        let body = start + family.open.len();
        let Some(rel_close) = text[body..].find(&family.close) else {
            break;
        };
        let end = body + rel_close + family.close.len();
        out.push(Candidate {
            start,
            end,
            open_len: family.open.len(),
            close_len: family.close.len(),
            kind: family.kind,
            priority: family.priority,
        });
        at = end;
    }
}

/// Symmetric delimiters (`*…*`) pair consecutive occurrences. A
/// delimiter touching another copy of itself (`**`) is treated as
/// literal text so Markdown-style emphasis does not produce phantom
/// thought blocks.
fn scan_symmetric(text: &str, family: &MarkerFamily, out: &mut Vec<Candidate>) {
    let len = family.open.len();
    let mut marks = Vec::new();
    let mut at = 0;
    while let Some(rel) = text[at..].find(&family.open) {
        let pos = at + rel;
        let doubled_after = text[pos + len..].starts_with(&*family.open);
        let doubled_before = pos >= len && text[..pos].ends_with(&*family.open);
        if doubled_after {
            // Skip the whole doubled run.
            at = pos + 2 * len;
            continue;
        }
        if doubled_before {
            at = pos + len;
            continue;
        }
        marks.push(pos);
        at = pos + len;
    }
    for pair in marks.chunks_exact(2) {
        out.push(Candidate {
            start: pair[0],
            end: pair[1] + len,
            open_len: len,
            close_len: len,
            kind: family.kind,
            priority: family.priority,
        });
    }
}

/// Greedy priority resolution: accept highest priority first; among
/// equals, leftmost first. Returns accepted candidates ordered by start.
fn resolve_overlaps(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| a.start.cmp(&b.start))
    });
    let mut accepted: Vec<Candidate> = Vec::new();
    for candidate in candidates {
        let clashes = accepted
            .iter()
            .any(|kept| candidate.start < kept.end && kept.start < candidate.end);
        if !clashes {
            accepted.push(candidate);
        }
    }
    accepted.sort_by_key(|candidate| candidate.start);
    accepted
}

fn marker_block(text: &str, candidate: &Candidate) -> ContentBlock {
    let raw = &text[candidate.start..candidate.end];
    let inner = &raw[candidate.open_len..raw.len() - candidate.close_len];
    ContentBlock {
        kind: candidate.kind,
        raw_content: raw.to_string(),
        display_content: inner.to_string(),
        start: candidate.start,
        end: candidate.end,
    }
}

fn text_block(text: &str, start: usize, end: usize) -> ContentBlock {
    let raw = &text[start..end];
    let display = if raw.trim().is_empty() {
        String::new()
    } else {
        raw.to_string()
    };
    ContentBlock {
        kind: BlockKind::Text,
        raw_content: raw.to_string(),
        display_content: display,
        start,
        end,
    }
}
