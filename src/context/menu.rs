//! The two navigable menus.
//!
//! Moving the highlight around a menu is the view's business; these contexts
//! only react to the player selecting the highlighted entry.

use crate::command::CommandSet as _;
use crate::command::MenuCommand;
use crate::command::PrimaryCommand;
use crate::context::CommandContext;
use crate::context::ContextName;
use crate::model::MazeModel;
use crate::view::MazeView;

/// An entry of the main menu.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum MainMenuOption {
  StartGame,
  Help,
  QuitGame,
}

impl MainMenuOption {
  /// Every entry, in the order the menu lists them.
  pub const ALL: [Self; 3] = [Self::StartGame, Self::Help, Self::QuitGame];

  /// The entry's label.
  pub fn label(self) -> &'static str {
    match self {
      Self::StartGame => "Start game",
      Self::Help => "Help",
      Self::QuitGame => "Quit game",
    }
  }

  /// Finds the entry whose label is exactly `label`.
  pub fn parse(label: &str) -> Option<Self> {
    Self::ALL.iter().copied().find(|o| o.label() == label)
  }
}

/// An entry of the in-game menu.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum InGameMenuOption {
  BackToGame,
  DisplayMapLegend,
  DisplayCommands,
  ReturnToMainMenu,
  QuitGame,
}

impl InGameMenuOption {
  /// Every entry, in the order the menu lists them.
  pub const ALL: [Self; 5] = [
    Self::BackToGame,
    Self::DisplayMapLegend,
    Self::DisplayCommands,
    Self::ReturnToMainMenu,
    Self::QuitGame,
  ];

  /// The entry's label.
  pub fn label(self) -> &'static str {
    match self {
      Self::BackToGame => "Back to Game",
      Self::DisplayMapLegend => "Display Map Legend",
      Self::DisplayCommands => "Display Commands",
      Self::ReturnToMainMenu => "Return to Main Menu",
      Self::QuitGame => "Quit Game",
    }
  }

  /// Finds the entry whose label matches `label`, ignoring case.
  pub fn parse(label: &str) -> Option<Self> {
    let label = label.to_lowercase();
    Self::ALL
      .iter()
      .copied()
      .find(|o| o.label().to_lowercase() == label)
  }
}

/// Context: the title screen's menu.
#[derive(Default, Debug)]
pub struct MainMenuContext;

impl CommandContext for MainMenuContext {
  type Command = MenuCommand;
  const NAME: ContextName = ContextName::MainMenu;

  fn execute(
    &self,
    MenuCommand::Select: MenuCommand,
    _: &mut dyn MazeModel,
    view: &mut dyn MazeView,
  ) -> Option<ContextName> {
    let selection = view.main_menu_current_selection();
    match MainMenuOption::parse(&selection) {
      Some(MainMenuOption::StartGame) => {
        view.hide_main_menu();
        Some(ContextName::PrimaryInterface)
      }
      Some(MainMenuOption::Help) => {
        view.show_main_help_menu();
        Some(ContextName::MainHelpMenu)
      }
      Some(MainMenuOption::QuitGame) => {
        log::info!("quitting from the main menu");
        view.quit_entire_game();
        None
      }
      None => {
        log::warn!("unrecognized main menu entry {:?}", selection);
        None
      }
    }
  }
}

/// Context: the menu brought up with Escape during play.
#[derive(Default, Debug)]
pub struct InGameMenuContext;

impl CommandContext for InGameMenuContext {
  type Command = MenuCommand;
  const NAME: ContextName = ContextName::InGameMenu;

  fn execute(
    &self,
    MenuCommand::Select: MenuCommand,
    model: &mut dyn MazeModel,
    view: &mut dyn MazeView,
  ) -> Option<ContextName> {
    let selection = view.in_game_menu_current_selection();
    match InGameMenuOption::parse(&selection) {
      Some(InGameMenuOption::BackToGame) => {
        view.hide_in_game_menu();
        Some(ContextName::PrimaryInterface)
      }
      Some(InGameMenuOption::DisplayMapLegend) => {
        view.show_map_legend_menu();
        Some(ContextName::MapLegendMenu)
      }
      Some(InGameMenuOption::DisplayCommands) => {
        let (symbols, descriptions): (Vec<_>, Vec<_>) =
          PrimaryCommand::legend().into_iter().unzip();
        view.show_command_legend_menu(&symbols, &descriptions, 2);
        Some(ContextName::CommandLegendMenu)
      }
      Some(InGameMenuOption::ReturnToMainMenu) => {
        // The maze is rebuilt underneath the main menu, so "Start game"
        // begins a new run.
        model.reset();
        view.hide_in_game_menu();
        view.show_main_menu();
        Some(ContextName::MainMenu)
      }
      Some(InGameMenuOption::QuitGame) => {
        log::info!("quitting from the in-game menu");
        view.quit_entire_game();
        None
      }
      None => {
        log::warn!("unrecognized in-game menu entry {:?}", selection);
        None
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn main_menu_labels_are_exact() {
    assert_eq!(
      MainMenuOption::parse("Start game"),
      Some(MainMenuOption::StartGame)
    );
    assert_eq!(MainMenuOption::parse("start game"), None);
    for &o in &MainMenuOption::ALL {
      assert_eq!(MainMenuOption::parse(o.label()), Some(o));
    }
  }

  #[test]
  fn in_game_labels_ignore_case() {
    assert_eq!(
      InGameMenuOption::parse("back to game"),
      Some(InGameMenuOption::BackToGame)
    );
    assert_eq!(
      InGameMenuOption::parse("QUIT GAME"),
      Some(InGameMenuOption::QuitGame)
    );
    assert_eq!(InGameMenuOption::parse("Save Game"), None);
  }
}
