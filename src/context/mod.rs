//! Command contexts.
//!
//! A command context is one screen's interpretation of the keyboard. The
//! controller holds exactly one active context and forwards every key to it;
//! the context looks the key up in its command table and, on a match, drives
//! the model and view and may ask for a different context to become active.
//! Keys with no entry in the table are dropped without any effect.
//!
//! Contexts carry no state of their own. Everything that changes lives in
//! the model, the view, or the controller's choice of active context.

use std::fmt;
use std::str::FromStr;

use crate::command::CommandSet;
use crate::command::DismissCommand;
use crate::command::MenuCommand;
use crate::command::PrimaryCommand;
use crate::command::QuestionCommand;
use crate::error::Error;
use crate::model::MazeModel;
use crate::view::MazeView;

mod menu;
mod popup;
mod primary;
mod question;

pub use menu::InGameMenuContext;
pub use menu::InGameMenuOption;
pub use menu::MainMenuContext;
pub use menu::MainMenuOption;
pub use popup::CommandLegendMenuContext;
pub use popup::GameLostMenuContext;
pub use popup::GameWonMenuContext;
pub use popup::MainHelpMenuContext;
pub use popup::MapLegendMenuContext;
pub use primary::PrimaryInterfaceContext;
pub use question::QuestionAndAnswerContext;

const _: () = {
  assert!(!MenuCommand::TABLE.is_empty());
  assert!(!DismissCommand::TABLE.is_empty());
  assert!(!PrimaryCommand::TABLE.is_empty());
  assert!(!QuestionCommand::TABLE.is_empty());
};

/// The closed set of contexts.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ContextName {
  MainMenu,
  MainHelpMenu,
  PrimaryInterface,
  InGameMenu,
  MapLegendMenu,
  CommandLegendMenu,
  GameWonMenu,
  GameLostMenu,
  QuestionAndAnswer,
}

impl ContextName {
  /// Every context name.
  pub const ALL: [Self; 9] = [
    Self::MainMenu,
    Self::MainHelpMenu,
    Self::PrimaryInterface,
    Self::InGameMenu,
    Self::MapLegendMenu,
    Self::CommandLegendMenu,
    Self::GameWonMenu,
    Self::GameLostMenu,
    Self::QuestionAndAnswer,
  ];

  /// Returns the snake-case name of this context, e.g. `"main_menu"`.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::MainMenu => "main_menu",
      Self::MainHelpMenu => "main_help_menu",
      Self::PrimaryInterface => "primary_interface",
      Self::InGameMenu => "in_game_menu",
      Self::MapLegendMenu => "map_legend_menu",
      Self::CommandLegendMenu => "command_legend_menu",
      Self::GameWonMenu => "game_won_menu",
      Self::GameLostMenu => "game_lost_menu",
      Self::QuestionAndAnswer => "question_and_answer",
    }
  }
}

impl fmt::Display for ContextName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for ContextName {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Error> {
    Self::ALL
      .iter()
      .copied()
      .find(|name| name.as_str() == s)
      .ok_or_else(|| Error::UnknownContext(s.to_string()))
  }
}

/// One screen's reading of the keyboard.
pub trait CommandContext {
  /// The commands this context understands.
  type Command: CommandSet;

  /// Which context this is.
  const NAME: ContextName;

  /// Carries out `command`, returning the context to switch to, if any.
  fn execute(
    &self,
    command: Self::Command,
    model: &mut dyn MazeModel,
    view: &mut dyn MazeView,
  ) -> Option<ContextName>;

  /// Interprets `key`. Keys outside this context's command table do nothing.
  fn process(
    &self,
    key: &str,
    model: &mut dyn MazeModel,
    view: &mut dyn MazeView,
  ) -> Option<ContextName> {
    match Self::Command::from_key(key) {
      Some(command) => self.execute(command, model, view),
      None => {
        log::trace!("{}: ignoring key {:?}", Self::NAME, key);
        None
      }
    }
  }
}

/// One instance of every context.
#[derive(Default, Debug)]
pub struct Contexts {
  pub main_menu: MainMenuContext,
  pub main_help_menu: MainHelpMenuContext,
  pub primary_interface: PrimaryInterfaceContext,
  pub in_game_menu: InGameMenuContext,
  pub map_legend_menu: MapLegendMenuContext,
  pub command_legend_menu: CommandLegendMenuContext,
  pub game_won_menu: GameWonMenuContext,
  pub game_lost_menu: GameLostMenuContext,
  pub question_and_answer: QuestionAndAnswerContext,
}

impl Contexts {
  /// Forwards `key` to the context called `active`.
  pub fn process(
    &self,
    active: ContextName,
    key: &str,
    model: &mut dyn MazeModel,
    view: &mut dyn MazeView,
  ) -> Option<ContextName> {
    use ContextName::*;
    match active {
      MainMenu => self.main_menu.process(key, model, view),
      MainHelpMenu => self.main_help_menu.process(key, model, view),
      PrimaryInterface => self.primary_interface.process(key, model, view),
      InGameMenu => self.in_game_menu.process(key, model, view),
      MapLegendMenu => self.map_legend_menu.process(key, model, view),
      CommandLegendMenu => self.command_legend_menu.process(key, model, view),
      GameWonMenu => self.game_won_menu.process(key, model, view),
      GameLostMenu => self.game_lost_menu.process(key, model, view),
      QuestionAndAnswer => self.question_and_answer.process(key, model, view),
    }
  }
}
