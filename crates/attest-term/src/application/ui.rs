use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::DisplaySurface;
use crate::domain::models::Effect;
use crate::domain::models::Event;
use crate::domain::models::TextStyle;
use crate::domain::services::Console;
use crate::domain::services::EventsService;

pub fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    return Ok(());
}

pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(io::stdout(), cursor::Show)?;
    return Ok(());
}

/// Best-effort terminal restoration for the panic path, where nothing can be
/// propagated anymore.
pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
    println!();
}

/// The session loop: banner once, then events in, effects out, until the
/// session is torn down with CTRL+D. Executor requests leave through the
/// action channel; their settlements come back through the event channel
/// and re-arm the console.
pub async fn start_loop(
    display: &mut dyn DisplaySurface,
    startup_notice: Option<String>,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut console = Console::new();
    let mut events = EventsService::new(rx);

    display.focus()?;
    apply_effects(
        display,
        &tx,
        Console::startup_effects(startup_notice.as_deref()),
    )?;

    loop {
        let event = events.next().await?;

        // Teardown is an application concern; the state machine never sees
        // it. Ignored while a command is outstanding, like any other chord.
        if event == Event::KeyboardCTRLD && !console.in_flight() {
            display.write(TextStyle::Default, "\r\n")?;
            return Ok(());
        }

        let effects = console.handle(event);
        apply_effects(display, &tx, effects)?;
    }
}

fn apply_effects(
    display: &mut dyn DisplaySurface,
    tx: &mpsc::UnboundedSender<Action>,
    effects: Vec<Effect>,
) -> Result<()> {
    for effect in effects {
        match effect {
            Effect::Write(style, text) => display.write(style, &text)?,
            Effect::ClearScreen => display.clear()?,
            Effect::Execute(request) => tx.send(Action::RunCommand(request))?,
        }
    }

    return Ok(());
}
