//! Integration tests for the segmenter
//!
//! Exercises segmentation through the public facade on realistic
//! narrative passages.

use storylint::{BlockKind, MarkerFamily, MarkerTable, segment};
use storylint_segment::segment_with;

fn kinds(text: &str) -> Vec<BlockKind> {
    segment(text).into_iter().map(|b| b.kind).collect()
}

fn rejoin(text: &str) -> String {
    segment(text)
        .into_iter()
        .map(|b| b.raw_content)
        .collect()
}

// =============================================================================
// Marker Families
// =============================================================================

#[test]
fn a_full_passage_segments_into_typed_runs() {
    let passage = "【酒馆の夜】彼は席に着いた。「一杯くれ」*嫌な予感がする*【【チュートリアル終了】】";
    let got = kinds(passage);
    assert_eq!(
        got,
        vec![
            BlockKind::Scenery,
            BlockKind::Text,
            BlockKind::Dialogue,
            BlockKind::Thought,
            BlockKind::System,
        ]
    );
    assert_eq!(rejoin(passage), passage);
}

#[test]
fn display_content_strips_the_delimiters() {
    let blocks = segment("「let's go」");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].raw_content, "「let's go」");
    assert_eq!(blocks[0].display_content, "let's go");
}

#[test]
fn thought_runs_use_single_asterisks() {
    let got = kinds("she nodded *he's lying* and smiled");
    assert_eq!(
        got,
        vec![BlockKind::Text, BlockKind::Thought, BlockKind::Text]
    );
}

#[test]
fn markdown_bold_is_not_a_thought() {
    let got = kinds("a **really** bad idea");
    assert_eq!(got, vec![BlockKind::Text]);
}

// =============================================================================
// Priority Resolution
// =============================================================================

#[test]
fn system_swallows_a_nested_dialogue() {
    let blocks = segment("【【A「B」】】");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].kind, BlockKind::System);
    assert_eq!(blocks[0].raw_content, "【【A「B」】】");
}

#[test]
fn scenery_swallows_a_nested_thought() {
    let blocks = segment("【wind *howling* outside】");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].kind, BlockKind::Scenery);
}

#[test]
fn disjoint_families_all_surface() {
    let got = kinds("【a】「b」*c*");
    assert_eq!(
        got,
        vec![BlockKind::Scenery, BlockKind::Dialogue, BlockKind::Thought]
    );
}

// =============================================================================
// Coverage and Failure Semantics
// =============================================================================

#[test]
fn unterminated_marker_is_plain_text() {
    let blocks = segment("「unterminated");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].kind, BlockKind::Text);
    assert_eq!(blocks[0].raw_content, "「unterminated");
}

#[test]
fn coverage_is_total_and_contiguous() {
    let passage = "text 【scenery】 more 「speech」 tail";
    let blocks = segment(passage);
    assert_eq!(blocks.first().unwrap().start, 0);
    assert_eq!(blocks.last().unwrap().end, passage.len());
    for pair in blocks.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
    assert_eq!(rejoin(passage), passage);
}

#[test]
fn whitespace_only_gaps_have_empty_display() {
    let blocks = segment("「a」 「b」");
    assert_eq!(blocks[1].kind, BlockKind::Text);
    assert_eq!(blocks[1].display_content, "");
    assert_eq!(blocks[1].raw_content, " ");
}

// =============================================================================
// Custom Tables
// =============================================================================

mod proptests {
    use super::segment;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn concatenated_raw_content_reproduces_the_input(s in ".{0,300}") {
            let rebuilt: String = segment(&s)
                .into_iter()
                .map(|b| b.raw_content)
                .collect();
            prop_assert_eq!(rebuilt, s);
        }

        #[test]
        fn marker_heavy_input_stays_covered(s in "[【】「」*。a-z ]{0,150}") {
            let blocks = segment(&s);
            let mut cursor = 0;
            for block in &blocks {
                prop_assert_eq!(block.start, cursor);
                cursor = block.end;
            }
            prop_assert_eq!(cursor, s.len());
        }
    }
}

#[test]
fn a_trimmed_table_only_matches_its_families() {
    let table = MarkerTable::new(vec![MarkerFamily::new(BlockKind::System, "【【", "】】", 100)]);
    let blocks = segment_with("「ignored」【【kept】】", &table);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].kind, BlockKind::Text);
    assert_eq!(blocks[1].kind, BlockKind::System);
}
