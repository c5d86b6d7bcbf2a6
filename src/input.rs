//! Keyboard input for the controller.
//!
//! The controller speaks in logical key symbols (`"Return"`, `"Left"`, `"h"`,
//! ...). This module turns terminal key events into those symbols and feeds
//! them to a [`Controller`].

use std::time::Duration;

pub use crossterm::event::KeyCode;
pub use crossterm::event::KeyEvent;
pub use crossterm::event::KeyModifiers;

use crate::config::Config;
use crate::controller::Controller;
use crate::error::Error;
use crate::error::Result;
use crate::model::MazeModel;
use crate::view::MazeView;

/// Returns the logical symbol for `code`, or `None` if the controller has no
/// name for it.
///
/// Characters keep their case: `h` and `H` are different keys.
pub fn key_symbol(code: KeyCode) -> Option<String> {
  let symbol = match code {
    KeyCode::Enter => "Return",
    KeyCode::Esc => "Escape",
    KeyCode::Left => "Left",
    KeyCode::Right => "Right",
    KeyCode::Up => "Up",
    KeyCode::Down => "Down",
    KeyCode::Backspace => "BackSpace",
    KeyCode::Tab => "Tab",
    KeyCode::Char(c) => return Some(c.to_string()),
    KeyCode::F(n) => return Some(format!("F{}", n)),
    _ => return None,
  };
  Some(symbol.to_string())
}

/// Returns the logical symbol for `event`.
///
/// Chords with Control or Alt held are not part of the game's keyboard and
/// map to `None`.
pub fn event_symbol(event: KeyEvent) -> Option<String> {
  if event
    .modifiers
    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
  {
    return None;
  }
  key_symbol(event.code)
}

/// A tracker for a frame's key presses.
///
/// Keys are kept in the order they were pressed, since each one may switch
/// the controller into a context that reads the next one differently.
pub struct UserInput {
  keys: Vec<String>,
  poll_interval: Duration,
}

impl UserInput {
  /// Creates a new `UserInput`.
  pub fn new(config: &Config) -> Self {
    Self {
      keys: Vec::new(),
      poll_interval: config.poll_interval,
    }
  }

  /// Returns the symbols collected this frame, oldest first.
  pub fn keys(&self) -> &[String] {
    &self.keys
  }

  /// Records `event` as pressed this frame, if it names a key.
  pub fn push(&mut self, event: KeyEvent) {
    if let Some(symbol) = event_symbol(event) {
      self.keys.push(symbol);
    }
  }

  /// Clears internal buffers and collects new inputs from `stdin`.
  ///
  /// Waits up to the configured poll interval for the first event, then
  /// drains whatever else is already buffered without blocking.
  pub fn start_frame(&mut self) -> Result<()> {
    use crossterm::event;

    self.keys.clear();
    let mut timeout = self.poll_interval;
    while event::poll(timeout).map_err(terminal)? {
      if let event::Event::Key(e) = event::read().map_err(terminal)? {
        self.push(e);
      }
      timeout = Duration::default();
    }
    Ok(())
  }

  /// Forwards this frame's keys to `controller`, in order, and clears them.
  pub fn dispatch<M: MazeModel, V: MazeView>(
    &mut self,
    controller: &mut Controller<M, V>,
  ) {
    for key in self.keys.drain(..) {
      controller.process_keystroke(&key);
    }
  }
}

fn terminal(e: crossterm::ErrorKind) -> Error {
  Error::Terminal(e.to_string())
}

/// Pumps terminal input into `controller` until `keep_going` returns false.
///
/// Model changes that arrive between key presses are picked up once per
/// frame.
pub fn run<M: MazeModel, V: MazeView>(
  controller: &mut Controller<M, V>,
  input: &mut UserInput,
  mut keep_going: impl FnMut(&Controller<M, V>) -> bool,
) -> Result<()> {
  controller.start();
  while keep_going(controller) {
    input.start_frame()?;
    input.dispatch(controller);
    controller.poll_model();
  }
  Ok(())
}
