use anyhow::Result;

use super::TextStyle;

/// The display surface the console writes to. Rendering, fonts, and color
/// themes belong to the implementation; the console only issues semantic
/// writes with the fixed [`TextStyle`] palette.
pub trait DisplaySurface: Send {
    fn write(&mut self, style: TextStyle, text: &str) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
    fn focus(&mut self) -> Result<()>;
}
