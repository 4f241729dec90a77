mod ansi;

pub use ansi::AnsiDisplay;
