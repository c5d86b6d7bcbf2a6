//! Pop-ups that only wait to be dismissed.

use crate::command::DismissCommand;
use crate::context::CommandContext;
use crate::context::ContextName;
use crate::model::MazeModel;
use crate::view::MazeView;

/// Context: the help screen reached from the main menu.
#[derive(Default, Debug)]
pub struct MainHelpMenuContext;

impl CommandContext for MainHelpMenuContext {
  type Command = DismissCommand;
  const NAME: ContextName = ContextName::MainHelpMenu;

  fn execute(
    &self,
    DismissCommand::Dismiss: DismissCommand,
    _: &mut dyn MazeModel,
    view: &mut dyn MazeView,
  ) -> Option<ContextName> {
    view.hide_main_help_menu();
    Some(ContextName::MainMenu)
  }
}

/// Context: the map legend, reached from the in-game menu.
#[derive(Default, Debug)]
pub struct MapLegendMenuContext;

impl CommandContext for MapLegendMenuContext {
  type Command = DismissCommand;
  const NAME: ContextName = ContextName::MapLegendMenu;

  fn execute(
    &self,
    DismissCommand::Dismiss: DismissCommand,
    _: &mut dyn MazeModel,
    view: &mut dyn MazeView,
  ) -> Option<ContextName> {
    view.hide_map_legend_menu();
    Some(ContextName::InGameMenu)
  }
}

/// Context: the command legend, reached from the in-game menu.
#[derive(Default, Debug)]
pub struct CommandLegendMenuContext;

impl CommandContext for CommandLegendMenuContext {
  type Command = DismissCommand;
  const NAME: ContextName = ContextName::CommandLegendMenu;

  fn execute(
    &self,
    DismissCommand::Dismiss: DismissCommand,
    _: &mut dyn MazeModel,
    view: &mut dyn MazeView,
  ) -> Option<ContextName> {
    view.hide_command_legend_menu();
    Some(ContextName::InGameMenu)
  }
}

/// Context: the victory screen.
///
/// Dismissing it starts over from a fresh maze at the main menu: besides
/// hiding the pop-up it calls `reset()` on the model and `show_main_menu()` on
/// the view.
#[derive(Default, Debug)]
pub struct GameWonMenuContext;

impl CommandContext for GameWonMenuContext {
  type Command = DismissCommand;
  const NAME: ContextName = ContextName::GameWonMenu;

  fn execute(
    &self,
    DismissCommand::Dismiss: DismissCommand,
    model: &mut dyn MazeModel,
    view: &mut dyn MazeView,
  ) -> Option<ContextName> {
    view.hide_game_won_menu();
    model.reset();
    view.show_main_menu();
    Some(ContextName::MainMenu)
  }
}

/// Context: the defeat screen.
///
/// Dismissing it starts over from a fresh maze at the main menu: besides
/// hiding the pop-up it calls `reset()` on the model and `show_main_menu()` on
/// the view.
#[derive(Default, Debug)]
pub struct GameLostMenuContext;

impl CommandContext for GameLostMenuContext {
  type Command = DismissCommand;
  const NAME: ContextName = ContextName::GameLostMenu;

  fn execute(
    &self,
    DismissCommand::Dismiss: DismissCommand,
    model: &mut dyn MazeModel,
    view: &mut dyn MazeView,
  ) -> Option<ContextName> {
    view.hide_game_lost_menu();
    model.reset();
    view.show_main_menu();
    Some(ContextName::MainMenu)
  }
}
