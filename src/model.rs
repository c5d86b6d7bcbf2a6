//! The maze model contract.
//!
//! The maze simulation itself lives elsewhere; this module describes the
//! operations the controller drives it through, plus the small value types
//! those operations speak in.

use std::fmt;
use std::sync::mpsc;

use crate::qa::Question;

/// A cardinal direction the adventurer can move in.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
  North,
  South,
  East,
  West,
}

impl Direction {
  /// Returns all four directions.
  pub fn all() -> [Self; 4] {
    [Self::North, Self::South, Self::East, Self::West]
  }

  /// Returns the lowercase name of this direction, e.g. `"west"`.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::North => "north",
      Self::South => "south",
      Self::East => "east",
      Self::West => "west",
    }
  }
}

impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// An item the adventurer can carry and use.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Item {
  HealingPotion,
  VisionPotion,
  SuggestionPotion,
  MagicKey,
}

impl Item {
  /// Returns the item's display name, e.g. `"healing potion"`.
  pub fn name(self) -> &'static str {
    match self {
      Self::HealingPotion => "healing potion",
      Self::VisionPotion => "vision potion",
      Self::SuggestionPotion => "suggestion potion",
      Self::MagicKey => "magic key",
    }
  }
}

impl fmt::Display for Item {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Whether the game is still being played, and if not, how it ended.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum GameStatus {
  InProgress,
  Won,
  Lost,
}

bitflags::bitflags! {
  /// A set of doors in the walls of a room.
  pub struct Doors: u8 {
    const NORTH = 0b0001;
    const SOUTH = 0b0010;
    const EAST = 0b0100;
    const WEST = 0b1000;
  }
}

/// What a view needs to know about a room to draw it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
  /// The `(row, column)` of the room in the maze grid.
  pub coords: (usize, usize),
  /// Doors present in the room's walls.
  pub doors: Doors,
  /// The subset of `doors` that are still locked behind a question.
  pub locked: Doors,
  /// Whether the adventurer has seen this room.
  pub visited: bool,
}

/// A handle a model uses to tell its observer that something changed.
///
/// Notifications are queued, not delivered inline; the observer picks them up
/// once the call that triggered them has returned.
#[derive(Clone, Debug)]
pub struct Notifier(mpsc::Sender<()>);

impl Notifier {
  /// Creates a connected notifier and receiving end.
  pub fn channel() -> (Self, mpsc::Receiver<()>) {
    let (tx, rx) = mpsc::channel();
    (Self(tx), rx)
  }

  /// Queues a notification. A dropped observer is not an error.
  pub fn notify(&self) {
    let _ = self.0.send(());
  }
}

/// Something that reacts to changes in a [`MazeModel`].
pub trait ModelObserver {
  /// Called after the model's externally visible state has changed.
  fn update(&mut self);
}

/// The operations the controller needs from the maze simulation.
///
/// Implementations must call [`Notifier::notify()`] on every registered
/// notifier whenever anything observable changes, `reset()` included.
pub trait MazeModel {
  /// Attempts to move the adventurer one room in `direction`.
  ///
  /// Walking into a locked door makes [`pending_question()`] return the
  /// question guarding it.
  ///
  /// [`pending_question()`]: Self::pending_question
  fn move_adventurer(&mut self, direction: Direction);

  /// Uses one of the adventurer's items, if they have one.
  fn use_item(&mut self, item: Item);

  /// Throws away the current game and builds a fresh one.
  fn reset(&mut self);

  /// The adventurer's hit points.
  fn adventurer_hp(&self) -> u32;

  /// The adventurer's `(row, column)` in the maze grid.
  fn adventurer_coords(&self) -> (usize, usize);

  /// Every room in the maze.
  fn rooms(&self) -> Vec<Room>;

  /// Registers `notifier` to be told about changes.
  fn register_observer(&mut self, notifier: Notifier);

  /// How the game currently stands.
  fn game_status(&self) -> GameStatus;

  /// The question the adventurer must answer before going on, if any.
  fn pending_question(&self) -> Option<&Question>;

  /// Judges `answer` against the pending question and applies the outcome.
  /// Returns whether the answer was correct.
  fn submit_answer(&mut self, answer: &str) -> bool;

  /// Drains the event-log lines the model has produced since the last call.
  fn take_messages(&mut self) -> Vec<String>;
}
