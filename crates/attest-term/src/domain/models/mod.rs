pub mod action;
pub mod display;
pub mod effect;
pub mod event;
pub mod executor;
pub mod style;

pub use action::Action;
pub use display::DisplaySurface;
pub use effect::Effect;
pub use event::CommandOutcome;
pub use event::Event;
pub use executor::ExecutorBox;
pub use executor::ExecutorName;
pub use executor::ShellExecutor;
pub use style::TextStyle;
