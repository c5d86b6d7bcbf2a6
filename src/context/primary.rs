use crate::command::PrimaryCommand;
use crate::context::CommandContext;
use crate::context::ContextName;
use crate::model::Direction;
use crate::model::Item;
use crate::model::MazeModel;
use crate::view::MazeView;

/// Context: exploring the maze.
#[derive(Default, Debug)]
pub struct PrimaryInterfaceContext;

impl CommandContext for PrimaryInterfaceContext {
  type Command = PrimaryCommand;
  const NAME: ContextName = ContextName::PrimaryInterface;

  fn execute(
    &self,
    command: PrimaryCommand,
    model: &mut dyn MazeModel,
    view: &mut dyn MazeView,
  ) -> Option<ContextName> {
    match command {
      PrimaryCommand::MoveEast => model.move_adventurer(Direction::East),
      PrimaryCommand::MoveNorth => model.move_adventurer(Direction::North),
      PrimaryCommand::MoveWest => model.move_adventurer(Direction::West),
      PrimaryCommand::MoveSouth => model.move_adventurer(Direction::South),
      PrimaryCommand::UseHealingPotion => model.use_item(Item::HealingPotion),
      PrimaryCommand::UseVisionPotion => model.use_item(Item::VisionPotion),
      PrimaryCommand::ShowInGameMenu => {
        view.show_in_game_menu();
        return Some(ContextName::InGameMenu);
      }
    }
    None
  }
}
