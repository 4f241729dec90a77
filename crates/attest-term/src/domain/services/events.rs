#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use futures::StreamExt;
use tokio::sync::mpsc;

use crate::domain::models::Event;

/// Multiplexes raw terminal input with internal events (command settlements)
/// into the single ordered stream the console consumes.
pub struct EventsService {
    crossterm_events: EventStream,
    events: mpsc::UnboundedReceiver<Event>,
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            crossterm_events: EventStream::new(),
            events,
        };
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.events.recv() => event,
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => handle_crossterm(input),
                    Some(Err(_)) => None,
                    None => None,
                },
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}

/// Maps a raw key event to a logical console event. Everything outside the
/// dispatch table, including any alt/meta chord, is dropped here so the state
/// machine only ever sees events it has a transition for.
fn handle_crossterm(event: CrosstermEvent) -> Option<Event> {
    let keyevent = match event {
        CrosstermEvent::Key(keyevent) => keyevent,
        _ => return None,
    };

    if keyevent.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = keyevent.modifiers.contains(KeyModifiers::CONTROL);
    let alt = keyevent.modifiers.contains(KeyModifiers::ALT);
    let meta = keyevent.modifiers.contains(KeyModifiers::META)
        || keyevent.modifiers.contains(KeyModifiers::SUPER);

    match keyevent.code {
        KeyCode::Enter => return Some(Event::KeyboardEnter),
        KeyCode::Backspace => return Some(Event::KeyboardBackspace),
        KeyCode::Up => return Some(Event::KeyboardArrowUp),
        KeyCode::Down => return Some(Event::KeyboardArrowDown),
        KeyCode::Char(ch) => {
            if ctrl {
                return match ch {
                    'c' => Some(Event::KeyboardCTRLC),
                    'l' => Some(Event::KeyboardCTRLL),
                    'd' => Some(Event::KeyboardCTRLD),
                    _ => None,
                };
            }
            if alt || meta {
                return None;
            }
            return Some(Event::KeyboardCharInput(ch));
        }
        _ => return None,
    }
}
