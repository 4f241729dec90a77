#[cfg(test)]
#[path = "formatter_test.rs"]
mod tests;

use crate::domain::models::CommandOutcome;
use crate::domain::models::Effect;
use crate::domain::models::TextStyle;

/// Renders a settled command into display writes: stdout verbatim, stderr in
/// the error style, a dim exit-code annotation when the command failed. Both
/// streams get a trailing newline if they did not bring their own. The prompt
/// is not part of the rendering; the console appends it after.
pub fn render_outcome(outcome: &CommandOutcome) -> Vec<Effect> {
    let mut effects = vec![];

    match outcome {
        CommandOutcome::Completed(output) => {
            if !output.stdout.is_empty() {
                effects.push(Effect::Write(TextStyle::Default, output.stdout.clone()));
                if !output.stdout.ends_with('\n') {
                    effects.push(Effect::Write(TextStyle::Default, "\r\n".to_string()));
                }
            }

            if !output.stderr.is_empty() {
                effects.push(Effect::Write(TextStyle::Error, output.stderr.clone()));
                if !output.stderr.ends_with('\n') {
                    effects.push(Effect::Write(TextStyle::Default, "\r\n".to_string()));
                }
            }

            if !output.success {
                effects.push(Effect::Write(
                    TextStyle::Dim,
                    format!("Exit code: {}\r\n", output.exit_code),
                ));
            }
        }
        CommandOutcome::TransportFailed(message) => {
            effects.push(Effect::Write(
                TextStyle::Error,
                format!("Error: {message}\r\n"),
            ));
        }
    }

    return effects;
}
