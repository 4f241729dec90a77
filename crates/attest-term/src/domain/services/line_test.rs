use super::*;

#[test]
fn test_appends_and_reads_back() {
    let mut line = LineBuffer::new();
    line.append('h');
    line.append('i');
    assert_eq!(line.as_str(), "hi");
    assert_eq!(line.len(), 2);
}

#[test]
fn test_deletes_the_last_character() {
    let mut line = LineBuffer::new();
    line.append('h');
    line.append('i');
    assert!(line.delete_last());
    assert_eq!(line.as_str(), "h");
}

#[test]
fn test_ignores_delete_on_an_empty_buffer() {
    let mut line = LineBuffer::new();
    assert!(!line.delete_last());
    assert_eq!(line.as_str(), "");
}

#[test]
fn test_applies_the_net_effect_of_interleaved_edits() {
    let mut line = LineBuffer::new();
    line.delete_last();
    line.append('a');
    line.append('b');
    line.delete_last();
    line.append('c');
    line.delete_last();
    line.delete_last();
    line.delete_last();
    line.append('x');
    assert_eq!(line.as_str(), "x");
}

#[test]
fn test_reports_the_previous_length_on_replace() {
    let mut line = LineBuffer::new();
    line.replace("a longer draft");
    let previous_len = line.replace("ls");
    assert_eq!(previous_len, 14);
    assert_eq!(line.as_str(), "ls");
}

#[test]
fn test_counts_characters_not_bytes() {
    let mut line = LineBuffer::new();
    line.append('é');
    line.append('ß');
    assert_eq!(line.len(), 2);
    assert!(line.delete_last());
    assert_eq!(line.as_str(), "é");
}

#[test]
fn test_takes_the_buffer_and_leaves_it_empty() {
    let mut line = LineBuffer::new();
    line.append('g');
    line.append('o');
    assert_eq!(line.take(), "go");
    assert!(line.is_empty());
}
