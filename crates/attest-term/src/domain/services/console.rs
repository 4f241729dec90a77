#[cfg(test)]
#[path = "console_test.rs"]
mod tests;

use attest_shell_types::ShellRequest;

use super::formatter;
use super::History;
use super::LineBuffer;
use super::RecallNext;
use crate::domain::models::CommandOutcome;
use crate::domain::models::Effect;
use crate::domain::models::Event;
use crate::domain::models::TextStyle;

const BANNER: &str = "\
╔══════════════════════════════════════════════════════════╗\r\n\
║                   Attest Command Console                  ║\r\n\
╚══════════════════════════════════════════════════════════╝\r\n";

const BANNER_HINT: &str = "\r\nType commands to interact with the workspace.\r\n\
Quick commands: attest status, git status\r\n\r\n";

const PROMPT_NAME: &str = "attest";
const PROMPT_SUFFIX: &str = ":~$ ";

/// The console state machine: line buffer, history, and the execution gate,
/// advanced one [`Event`] at a time. Transitions mutate the state and return
/// the display writes and executor requests to apply, so the whole dispatcher
/// runs without a real terminal.
#[derive(Debug, Default)]
pub struct Console {
    line: LineBuffer,
    history: History,
    in_flight: bool,
}

impl Console {
    pub fn new() -> Console {
        return Console::default();
    }

    /// True while a submitted command has not settled yet. Edits are barred
    /// in that window; only the interrupt gesture is honored.
    pub fn in_flight(&self) -> bool {
        return self.in_flight;
    }

    pub fn history_entries(&self) -> &[String] {
        return self.history.entries();
    }

    /// The uncommitted line as typed so far. Read-only; all mutation goes
    /// through [`Console::handle`].
    pub fn line(&self) -> &str {
        return self.line.as_str();
    }

    /// The banner block written once per session, an optional error notice,
    /// then the first prompt.
    pub fn startup_effects(notice: Option<&str>) -> Vec<Effect> {
        let mut effects = vec![
            Effect::Write(TextStyle::Accent, BANNER.to_string()),
            Effect::Write(TextStyle::Dim, BANNER_HINT.to_string()),
        ];
        if let Some(notice) = notice {
            effects.push(Effect::Write(TextStyle::Error, format!("{notice}\r\n\r\n")));
        }
        push_prompt(&mut effects);
        return effects;
    }

    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        if self.in_flight {
            return match event {
                Event::CommandSettled(outcome) => self.settle(&outcome),
                // The interrupt stays live while a command runs; it clears
                // local input but does not cancel the outstanding call.
                Event::KeyboardCTRLC => self.interrupt(),
                _ => vec![],
            };
        }

        match event {
            Event::CommandSettled(outcome) => {
                return self.settle(&outcome);
            }
            Event::KeyboardCharInput(ch) => {
                self.line.append(ch);
                return vec![Effect::Write(TextStyle::Default, ch.to_string())];
            }
            Event::KeyboardBackspace => {
                if self.line.delete_last() {
                    return vec![Effect::Write(TextStyle::Default, "\x08 \x08".to_string())];
                }
                return vec![];
            }
            Event::KeyboardEnter => {
                return self.submit();
            }
            Event::KeyboardArrowUp => {
                match self.history.recall_previous() {
                    Some(entry) => return self.redraw_line(&entry),
                    None => return vec![],
                };
            }
            Event::KeyboardArrowDown => {
                match self.history.recall_next() {
                    RecallNext::Entry(entry) => return self.redraw_line(&entry),
                    RecallNext::EmptyLine => return self.redraw_line(""),
                    RecallNext::NoOp => return vec![],
                };
            }
            Event::KeyboardCTRLC => {
                return self.interrupt();
            }
            Event::KeyboardCTRLL => {
                let mut effects = vec![Effect::ClearScreen];
                push_prompt(&mut effects);
                return effects;
            }
            // CTRL+D tears the session down at the application layer and
            // never reaches the state machine.
            Event::KeyboardCTRLD => {
                return vec![];
            }
        }
    }

    fn submit(&mut self) -> Vec<Effect> {
        let mut effects = vec![Effect::Write(TextStyle::Default, "\r\n".to_string())];

        let line = self.line.take();
        if line.trim().is_empty() {
            push_prompt(&mut effects);
            return effects;
        }

        self.history.record(&line);
        self.in_flight = true;
        effects.push(Effect::Execute(ShellRequest::new(&line)));
        return effects;
    }

    fn settle(&mut self, outcome: &CommandOutcome) -> Vec<Effect> {
        self.in_flight = false;
        let mut effects = formatter::render_outcome(outcome);
        push_prompt(&mut effects);
        return effects;
    }

    fn interrupt(&mut self) -> Vec<Effect> {
        self.line.clear();
        let mut effects = vec![Effect::Write(TextStyle::Default, "^C\r\n".to_string())];
        push_prompt(&mut effects);
        return effects;
    }

    /// Replaces the buffer and redraws the prompt line in place. The erase
    /// pass pads out to the previous buffer length so a shorter replacement
    /// cannot leave stale characters behind.
    fn redraw_line(&mut self, content: &str) -> Vec<Effect> {
        let previous_len = self.line.replace(content);

        let mut effects = vec![Effect::Write(TextStyle::Default, "\r".to_string())];
        push_prompt(&mut effects);
        effects.push(Effect::Write(TextStyle::Default, " ".repeat(previous_len)));
        effects.push(Effect::Write(TextStyle::Default, "\r".to_string()));
        push_prompt(&mut effects);
        effects.push(Effect::Write(TextStyle::Default, content.to_string()));
        return effects;
    }
}

fn push_prompt(effects: &mut Vec<Effect>) {
    effects.push(Effect::Write(TextStyle::Accent, PROMPT_NAME.to_string()));
    effects.push(Effect::Write(TextStyle::Default, PROMPT_SUFFIX.to_string()));
}
