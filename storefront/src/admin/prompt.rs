// vitrine/src/admin/prompt.rs

//! Where the admin flow gets its answers from.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use tracing::warn;

/// A source of free-text answers and yes/no confirmations.
///
/// `prompt` returns `None` when the user cancels; the caller then abandons the
/// whole operation, not just the field being asked for.
pub trait Prompter {
  fn prompt(&mut self, message: &str, default: &str) -> Option<String>;

  fn confirm(&mut self, message: &str) -> bool;
}

/// Replays queued answers. An exhausted queue behaves like a cancelled prompt
/// (or a declined confirmation).
#[derive(Debug)]
enum ScriptedAnswer {
  Text(String),
  AcceptDefault,
  Cancel,
}

#[derive(Debug, Default)]
pub struct ScriptedPrompter {
  answers: VecDeque<ScriptedAnswer>,
  confirmations: VecDeque<bool>,
  asked: Vec<String>,
  offered_defaults: Vec<String>,
}

impl ScriptedPrompter {
  pub fn new() -> Self {
    Self::default()
  }

  /// Queues a typed answer.
  pub fn answer(mut self, text: impl Into<String>) -> Self {
    self.answers.push_back(ScriptedAnswer::Text(text.into()));
    self
  }

  /// Queues an answer that takes whatever default the prompt offers.
  pub fn accept_default(mut self) -> Self {
    self.answers.push_back(ScriptedAnswer::AcceptDefault);
    self
  }

  /// Queues a cancelled prompt.
  pub fn cancel(mut self) -> Self {
    self.answers.push_back(ScriptedAnswer::Cancel);
    self
  }

  pub fn confirmation(mut self, accepted: bool) -> Self {
    self.confirmations.push_back(accepted);
    self
  }

  /// Messages shown so far, prompts and confirmations alike, in order.
  pub fn asked(&self) -> &[String] {
    &self.asked
  }

  /// Defaults offered by each free-text prompt, in order.
  pub fn offered_defaults(&self) -> &[String] {
    &self.offered_defaults
  }
}

impl Prompter for ScriptedPrompter {
  fn prompt(&mut self, message: &str, default: &str) -> Option<String> {
    self.asked.push(message.to_string());
    self.offered_defaults.push(default.to_string());
    match self.answers.pop_front()? {
      ScriptedAnswer::Text(text) => Some(text),
      ScriptedAnswer::AcceptDefault => Some(default.to_string()),
      ScriptedAnswer::Cancel => None,
    }
  }

  fn confirm(&mut self, message: &str) -> bool {
    self.asked.push(message.to_string());
    self.confirmations.pop_front().unwrap_or(false)
  }
}

/// Line-oriented prompter for terminals.
///
/// End of input cancels, an empty line accepts the shown default, and a
/// confirmation needs `y` or `yes`.
pub struct TerminalPrompter<R, W> {
  input: R,
  output: W,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
  pub fn new(input: R, output: W) -> Self {
    Self { input, output }
  }

  pub fn into_inner(self) -> (R, W) {
    (self.input, self.output)
  }

  fn read_line(&mut self) -> Option<String> {
    let mut line = String::new();
    match self.input.read_line(&mut line) {
      Ok(0) => None,
      Ok(_) => Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()),
      Err(e) => {
        warn!(error = %e, "Failed to read prompt answer; treating it as cancelled.");
        None
      }
    }
  }

  fn show(&mut self, text: &str) {
    if let Err(e) = write!(self.output, "{}", text).and_then(|_| self.output.flush()) {
      warn!(error = %e, "Failed to write prompt.");
    }
  }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
  fn prompt(&mut self, message: &str, default: &str) -> Option<String> {
    if default.is_empty() {
      self.show(&format!("{} ", message));
    } else {
      self.show(&format!("{} [{}] ", message, default));
    }
    let line = self.read_line()?;
    if line.is_empty() {
      Some(default.to_string())
    } else {
      Some(line)
    }
  }

  fn confirm(&mut self, message: &str) -> bool {
    self.show(&format!("{} [y/N] ", message));
    matches!(
      self.read_line().map(|l| l.trim().to_ascii_lowercase()).as_deref(),
      Some("y") | Some("yes")
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Cursor;

  fn terminal(input: &str) -> TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>> {
    TerminalPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
  }

  #[test]
  fn terminal_prompt_reads_answer_and_default() {
    let mut prompter = terminal("Shirt\r\n\n");
    assert_eq!(prompter.prompt("Product name:", "Old"), Some("Shirt".to_string()));
    assert_eq!(prompter.prompt("Price (number):", "799"), Some("799".to_string()));
    assert_eq!(prompter.prompt("Image URL:", ""), None);

    let (_, output) = prompter.into_inner();
    let shown = String::from_utf8(output).unwrap();
    assert_eq!(shown, "Product name: [Old] Price (number): [799] Image URL: ");
  }

  #[test]
  fn terminal_confirm_needs_yes() {
    let mut prompter = terminal("YES\nn\n\n");
    assert!(prompter.confirm("Delete this product?"));
    assert!(!prompter.confirm("Delete this product?"));
    assert!(!prompter.confirm("Delete this product?"));
    assert!(!prompter.confirm("Delete this product?"));
  }

  #[test]
  fn scripted_prompter_runs_dry_as_cancel() {
    let mut prompter = ScriptedPrompter::new().answer("add").confirmation(true);
    assert_eq!(prompter.prompt("first", ""), Some("add".to_string()));
    assert_eq!(prompter.prompt("second", ""), None);
    assert!(prompter.confirm("sure?"));
    assert!(!prompter.confirm("again?"));
    assert_eq!(prompter.asked(), ["first", "second", "sure?", "again?"].as_slice());
  }
}
