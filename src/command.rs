//! Command tables.
//!
//! Each command context understands a small, closed set of commands. A
//! command set is an `enum` implementing [`CommandSet`], whose [`TABLE`]
//! assigns every command a trigger key, a kind, and a description. Tables are
//! `const` data; nothing is built at runtime.
//!
//! [`TABLE`]: CommandSet::TABLE

/// What sort of action a command performs.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum CommandKind {
  Movement,
  Item,
  Other,
}

/// A command's entry in its table.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CommandSpec {
  pub kind: CommandKind,
  pub description: &'static str,
  /// The logical key symbol that triggers the command, e.g. `"Return"`.
  pub key: &'static str,
}

/// A closed set of commands with a static table.
pub trait CommandSet: Copy + Eq + Sized + 'static {
  /// Every command in the set, paired with its spec, in display order.
  const TABLE: &'static [(Self, CommandSpec)];

  /// Fails to evaluate when [`TABLE`] is empty. Referenced from
  /// [`from_key()`], so an empty table is rejected when the set is first used
  /// rather than at run time.
  ///
  /// [`TABLE`]: Self::TABLE
  /// [`from_key()`]: Self::from_key
  const NON_EMPTY: () = assert!(!Self::TABLE.is_empty(), "empty command table");

  /// Returns the spec for `self`.
  fn spec(self) -> &'static CommandSpec {
    match Self::TABLE.iter().find(|(cmd, _)| *cmd == self) {
      Some((_, spec)) => spec,
      None => panic!("command missing from its own table"),
    }
  }

  /// Looks up the command triggered by `key`, if any.
  fn from_key(key: &str) -> Option<Self> {
    #[allow(clippy::let_unit_value)]
    let () = Self::NON_EMPTY;
    Self::TABLE
      .iter()
      .find(|(_, spec)| spec.key == key)
      .map(|&(cmd, _)| cmd)
  }

  /// Returns the `(key, description)` pairs of the table, in order.
  fn legend() -> Vec<(&'static str, &'static str)> {
    Self::TABLE
      .iter()
      .map(|(_, spec)| (spec.key, spec.description))
      .collect()
  }
}

/// Commands shared by menus the player navigates and then picks from.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum MenuCommand {
  Select,
}

impl CommandSet for MenuCommand {
  const TABLE: &'static [(Self, CommandSpec)] = &[(
    Self::Select,
    CommandSpec {
      kind: CommandKind::Other,
      description: "Select",
      key: "Return",
    },
  )];
}

/// Commands shared by pop-ups that only need to be closed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum DismissCommand {
  Dismiss,
}

impl CommandSet for DismissCommand {
  const TABLE: &'static [(Self, CommandSpec)] = &[(
    Self::Dismiss,
    CommandSpec {
      kind: CommandKind::Other,
      description: "Dismiss",
      key: "Return",
    },
  )];
}

/// Commands available while exploring the maze.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PrimaryCommand {
  MoveEast,
  MoveNorth,
  MoveWest,
  MoveSouth,
  UseHealingPotion,
  UseVisionPotion,
  ShowInGameMenu,
}

impl CommandSet for PrimaryCommand {
  const TABLE: &'static [(Self, CommandSpec)] = &[
    (
      Self::MoveEast,
      CommandSpec {
        kind: CommandKind::Movement,
        description: "Move east",
        key: "Right",
      },
    ),
    (
      Self::MoveNorth,
      CommandSpec {
        kind: CommandKind::Movement,
        description: "Move north",
        key: "Up",
      },
    ),
    (
      Self::MoveWest,
      CommandSpec {
        kind: CommandKind::Movement,
        description: "Move west",
        key: "Left",
      },
    ),
    (
      Self::MoveSouth,
      CommandSpec {
        kind: CommandKind::Movement,
        description: "Move south",
        key: "Down",
      },
    ),
    (
      Self::UseHealingPotion,
      CommandSpec {
        kind: CommandKind::Item,
        description: "Use healing potion",
        key: "h",
      },
    ),
    (
      Self::UseVisionPotion,
      CommandSpec {
        kind: CommandKind::Item,
        description: "Use vision potion",
        key: "v",
      },
    ),
    (
      Self::ShowInGameMenu,
      CommandSpec {
        kind: CommandKind::Other,
        description: "Show in-game help menu",
        key: "Escape",
      },
    ),
  ];
}

/// Commands available while a question is being posed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum QuestionCommand {
  UseSuggestionPotion,
  UseMagicKey,
  SubmitAnswer,
}

impl CommandSet for QuestionCommand {
  const TABLE: &'static [(Self, CommandSpec)] = &[
    (
      Self::UseSuggestionPotion,
      CommandSpec {
        kind: CommandKind::Item,
        description: "Use suggestion potion",
        key: "s",
      },
    ),
    (
      Self::UseMagicKey,
      CommandSpec {
        kind: CommandKind::Item,
        description: "Use magic key",
        key: "k",
      },
    ),
    (
      Self::SubmitAnswer,
      CommandSpec {
        kind: CommandKind::Other,
        description: "Submit answer",
        key: "Return",
      },
    ),
  ];
}
