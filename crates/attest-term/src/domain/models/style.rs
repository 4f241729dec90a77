/// The fixed palette of semantic styles the console writes with. The display
/// surface owns the actual rendering; the console never emits raw escape
/// sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Default,
    Error,
    Dim,
    Accent,
}
