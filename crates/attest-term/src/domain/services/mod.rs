pub mod console;
pub mod events;
pub mod formatter;
pub mod history;
pub mod line;
pub mod runner;

pub use console::Console;
pub use events::EventsService;
pub use history::History;
pub use history::RecallNext;
pub use line::LineBuffer;
pub use runner::RunnerService;
