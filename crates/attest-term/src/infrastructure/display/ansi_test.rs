use super::*;

#[test]
fn test_expands_bare_line_feeds() {
    assert_eq!(normalize_newlines("a\nb\n"), "a\r\nb\r\n");
}

#[test]
fn test_leaves_paired_sequences_alone() {
    assert_eq!(normalize_newlines("a\r\nb\r\n"), "a\r\nb\r\n");
}

#[test]
fn test_handles_mixed_conventions() {
    assert_eq!(normalize_newlines("a\r\nb\nc"), "a\r\nb\r\nc");
}

#[test]
fn test_passes_plain_text_through() {
    assert_eq!(normalize_newlines("no newlines"), "no newlines");
}
