//! Incremental reparse: subtrees from the previous parse are spliced into the
//! new tree wherever the edits left them untouched.

use laurel::{ParseTransition, SourceEdit, TextRange, TextSize};

#[test]
fn test_tokens_left_of_the_edit_are_reused() {
    // "let x = 1" with the "1" (offset 8) replaced by "42".
    let first = laurel::parse("let x = 1", None, None, None).unwrap();
    let transition = ParseTransition::new(first.green().clone(), vec![SourceEdit::new(8, 1, 2)]);

    let second = laurel::parse("let x = 42", Some(&transition), None, None).unwrap();
    assert_eq!(second.text(), "let x = 42");

    // Everything to the left of the edit comes from the previous tree.
    let reused = second.reused_ranges();
    assert!(!reused.is_empty());
    let mut covered: Vec<_> = reused.to_vec();
    covered.sort_by_key(|r| r.start());
    assert_eq!(covered.first().unwrap().start(), TextSize::new(0));
    assert_eq!(covered.last().unwrap().end(), TextSize::new(8));
    for pair in covered.windows(2) {
        assert_eq!(pair[0].end(), pair[1].start());
    }

    // Nothing overlapping the new "42" may be reused.
    let edited = TextRange::new(TextSize::new(8), TextSize::new(10));
    assert!(reused.iter().all(|r| r.intersect(edited).is_none()));
}

#[test]
fn test_untouched_statement_is_reused_whole() {
    let old = "let a = 1;\nlet b = 2;\n";
    let first = laurel::parse(old, None, None, None).unwrap();

    // Replace the "2" (offset 19) with "99".
    let transition = ParseTransition::new(first.green().clone(), vec![SourceEdit::new(19, 1, 2)]);
    let new = "let a = 1;\nlet b = 99;\n";
    let second = laurel::parse(new, Some(&transition), None, None).unwrap();
    assert_eq!(second.text(), new);

    // The first statement splices in as one subtree, not token by token.
    let stmt_range = TextRange::new(TextSize::new(0), TextSize::new(10));
    assert!(second.reused_ranges().contains(&stmt_range));
}

#[test]
fn test_statement_right_of_the_edit_is_reused_shifted() {
    let old = "let a = 1;\nlet b = 2;\n";
    let first = laurel::parse(old, None, None, None).unwrap();

    // Grow the first binding: "1" (offset 8) becomes "100".
    let transition = ParseTransition::new(first.green().clone(), vec![SourceEdit::new(8, 1, 3)]);
    let new = "let a = 100;\nlet b = 2;\n";
    let second = laurel::parse(new, Some(&transition), None, None).unwrap();
    assert_eq!(second.text(), new);

    // The second statement now starts at 13 (shifted by +2).
    let stmt_range = TextRange::new(TextSize::new(13), TextSize::new(23));
    assert!(second.reused_ranges().contains(&stmt_range));
}

#[test]
fn test_non_incremental_parse_reuses_nothing() {
    let parse = laurel::parse("let x = 1", None, None, None).unwrap();
    assert!(parse.reused_ranges().is_empty());
}

#[test]
fn test_edit_touching_a_token_boundary_keeps_the_neighbor() {
    // Insert at the very end: every old token ends at or before the insertion
    // point, so the whole previous statement is still reusable.
    let first = laurel::parse("let x = 1", None, None, None).unwrap();
    let transition = ParseTransition::new(first.green().clone(), vec![SourceEdit::new(9, 0, 6)]);

    let second = laurel::parse("let x = 1 + two", Some(&transition), None, None).unwrap();
    assert_eq!(second.text(), "let x = 1 + two");

    // The "1" token (offset 8) survives the insertion at offset 9.
    assert!(
        second
            .reused_ranges()
            .iter()
            .any(|r| r.start() == TextSize::new(8) && r.len() == TextSize::new(1))
    );
}

#[test]
fn test_reuse_after_merge_destroying_edit_is_still_lossless() {
    // Appending digits to "1" merges it into a longer token; the previous
    // statement must not be spliced over the merged token.
    let first = laurel::parse("let x = 1", None, None, None).unwrap();
    let transition = ParseTransition::new(first.green().clone(), vec![SourceEdit::new(9, 0, 1)]);

    let second = laurel::parse("let x = 12", Some(&transition), None, None).unwrap();
    assert_eq!(second.text(), "let x = 12");
    let merged = TextRange::new(TextSize::new(8), TextSize::new(10));
    assert!(
        second
            .reused_ranges()
            .iter()
            .all(|r| !r.contains_range(merged))
    );
}

#[test]
fn test_incremental_and_fresh_parse_agree() {
    let old = "let a = 1;\nlet b = 2;\nlet c = a + b;\n";
    let first = laurel::parse(old, None, None, None).unwrap();

    let transition = ParseTransition::new(first.green().clone(), vec![SourceEdit::new(19, 1, 1)]);
    let new = "let a = 1;\nlet b = 3;\nlet c = a + b;\n";

    let incremental = laurel::parse(new, Some(&transition), None, None).unwrap();
    let fresh = laurel::parse(new, None, None, None).unwrap();

    assert_eq!(incremental.text(), fresh.text());
    assert_eq!(
        format!("{:#?}", incremental.syntax()),
        format!("{:#?}", fresh.syntax())
    );
}
