use super::*;

#[test]
fn test_records_submitted_lines_in_order() {
    let mut history = History::new();
    history.record("first");
    history.record("second");
    assert_eq!(history.entries(), ["first", "second"]);
}

#[test]
fn test_skips_blank_lines_but_keeps_duplicates() {
    let mut history = History::new();
    history.record("");
    history.record("   ");
    history.record("status");
    history.record("status");
    assert_eq!(history.entries(), ["status", "status"]);
}

#[test]
fn test_returns_the_newest_entry_first() {
    let mut history = History::new();
    history.record("a");
    history.record("b");
    assert_eq!(history.recall_previous(), Some("b".to_string()));
    assert_eq!(history.recall_previous(), Some("a".to_string()));
}

#[test]
fn test_clamps_at_the_oldest_entry_without_wrapping() {
    let mut history = History::new();
    history.record("a");
    history.record("b");
    for _ in 0..10 {
        history.recall_previous();
    }
    assert_eq!(history.recall_previous(), Some("a".to_string()));
}

#[test]
fn test_recalls_nothing_from_an_empty_history() {
    let mut history = History::new();
    assert_eq!(history.recall_previous(), None);
    assert_eq!(history.recall_next(), RecallNext::NoOp);
}

#[test]
fn test_walks_forward_back_to_the_empty_line() {
    let mut history = History::new();
    history.record("a");
    history.record("b");
    history.recall_previous();
    history.recall_previous();
    assert_eq!(history.recall_next(), RecallNext::Entry("b".to_string()));
    assert_eq!(history.recall_next(), RecallNext::EmptyLine);
    assert_eq!(history.recall_next(), RecallNext::NoOp);
}

#[test]
fn test_always_terminates_at_the_empty_line_from_any_position() {
    let mut history = History::new();
    for entry in ["a", "b", "c", "d"] {
        history.record(entry);
    }
    history.recall_previous();
    history.recall_previous();
    history.recall_previous();

    let mut steps = 0;
    loop {
        match history.recall_next() {
            RecallNext::Entry(_) => steps += 1,
            RecallNext::EmptyLine => break,
            RecallNext::NoOp => panic!("hit NoOp before reaching the empty line"),
        }
        assert!(steps < 10, "recall_next failed to terminate");
    }
    assert_eq!(history.recall_next(), RecallNext::NoOp);
}

#[test]
fn test_resets_the_cursor_on_record() {
    let mut history = History::new();
    history.record("a");
    history.record("b");
    history.recall_previous();
    history.recall_previous();
    history.record("c");
    assert_eq!(history.recall_previous(), Some("c".to_string()));
}

#[test]
fn test_resets_the_cursor_even_when_nothing_is_appended() {
    let mut history = History::new();
    history.record("a");
    history.recall_previous();
    history.record("   ");
    assert_eq!(history.entries(), ["a"]);
    assert_eq!(history.recall_previous(), Some("a".to_string()));
}
