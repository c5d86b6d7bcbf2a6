//! The keystroke controller.

use std::sync::mpsc;

use crate::context::ContextName;
use crate::context::Contexts;
use crate::model::GameStatus;
use crate::model::MazeModel;
use crate::model::ModelObserver;
use crate::model::Notifier;
use crate::view::MazeView;

/// Routes keystrokes to the active command context and reacts to model
/// changes.
///
/// The controller owns the model, the view, and one instance of every
/// context. Exactly one context is active at a time, starting with the main
/// menu. Contexts request switches by returning the next [`ContextName`];
/// model notifications are drained after each keystroke and handled by
/// [`ModelObserver::update()`].
pub struct Controller<M, V> {
  model: M,
  view: V,
  contexts: Contexts,
  active: ContextName,
  notifications: mpsc::Receiver<()>,
  last_status: GameStatus,
}

impl<M: MazeModel, V: MazeView> Controller<M, V> {
  /// Creates a new `Controller`, registering it as an observer of `model`.
  pub fn new(mut model: M, view: V) -> Self {
    let (notifier, notifications) = Notifier::channel();
    model.register_observer(notifier);
    let last_status = model.game_status();
    Self {
      model,
      view,
      contexts: Contexts::default(),
      active: ContextName::MainMenu,
      notifications,
      last_status,
    }
  }

  /// Puts the main menu on screen. Call once before feeding keystrokes.
  pub fn start(&mut self) {
    log::info!("starting at the main menu");
    self.view.show_main_menu();
  }

  /// Returns the active context.
  pub fn active_context(&self) -> ContextName {
    self.active
  }

  /// Makes `name` the active context.
  pub fn set_active_context(&mut self, name: ContextName) {
    if name != self.active {
      log::debug!("context: {} -> {}", self.active, name);
    }
    self.active = name;
  }

  /// Makes the context called `name` active.
  ///
  /// # Panics
  ///
  /// Panics if `name` is not one of the [`ContextName`]s; the set of contexts
  /// is fixed, so an unknown name is a bug in the caller.
  pub fn set_active_context_by_name(&mut self, name: &str) {
    match name.parse() {
      Ok(name) => self.set_active_context(name),
      Err(e) => panic!("{}", e),
    }
  }

  /// Hands `key` to the active context, then handles any model changes it
  /// caused.
  pub fn process_keystroke(&mut self, key: &str) {
    log::trace!("key {:?} in {}", key, self.active);
    let next =
      self
        .contexts
        .process(self.active, key, &mut self.model, &mut self.view);
    if let Some(next) = next {
      self.set_active_context(next);
      if next == ContextName::PrimaryInterface {
        self.sync_question();
      }
    }
    self.poll_model();
  }

  /// Opens the question pop-up if play is active and the model is waiting on
  /// an answer, or closes it if the question it shows has gone away.
  fn sync_question(&mut self) {
    let next = match (self.active, self.model.pending_question()) {
      (ContextName::PrimaryInterface, Some(qa)) => {
        self.view.show_question_and_answer_menu(qa);
        Some(ContextName::QuestionAndAnswer)
      }
      (ContextName::QuestionAndAnswer, None) => {
        self.view.hide_question_and_answer_menu();
        Some(ContextName::PrimaryInterface)
      }
      _ => None,
    };
    if let Some(next) = next {
      self.set_active_context(next);
    }
  }

  /// Hides whatever the active context has on screen, so a result pop-up is
  /// not drawn over it.
  fn hide_active_popups(&mut self) {
    match self.active {
      ContextName::QuestionAndAnswer => {
        self.view.hide_question_and_answer_menu()
      }
      ContextName::InGameMenu => self.view.hide_in_game_menu(),
      ContextName::MapLegendMenu => {
        self.view.hide_map_legend_menu();
        self.view.hide_in_game_menu();
      }
      ContextName::CommandLegendMenu => {
        self.view.hide_command_legend_menu();
        self.view.hide_in_game_menu();
      }
      ContextName::MainHelpMenu => self.view.hide_main_help_menu(),
      ContextName::MainMenu
      | ContextName::PrimaryInterface
      | ContextName::GameWonMenu
      | ContextName::GameLostMenu => {}
    }
  }

  /// Runs [`ModelObserver::update()`] if the model has signalled a change
  /// since the last poll. Several queued signals are handled as one.
  pub fn poll_model(&mut self) {
    if self.notifications.try_iter().count() > 0 {
      self.update();
    }
  }

  /// Returns a reference to the model.
  pub fn model(&self) -> &M {
    &self.model
  }

  /// Returns a mutable reference to the model.
  pub fn model_mut(&mut self) -> &mut M {
    &mut self.model
  }

  /// Returns a reference to the view.
  pub fn view(&self) -> &V {
    &self.view
  }

  /// Returns a mutable reference to the view.
  pub fn view_mut(&mut self) -> &mut V {
    &mut self.view
  }
}

impl<M: MazeModel, V: MazeView> ModelObserver for Controller<M, V> {
  /// Brings the view up to date and follows the game into the screen it now
  /// calls for.
  ///
  /// A game that has just been won or lost takes over with its pop-up. Failing
  /// that, a question posed during exploration opens the question pop-up, and
  /// a question that went away while on screen (answered, or opened with a
  /// magic key) closes it again.
  fn update(&mut self) {
    for message in self.model.take_messages() {
      self.view.write_to_event_log(&message);
    }
    self.view.update_map();
    self.view.update_hp_gauge();

    let status = self.model.game_status();
    if status != self.last_status {
      self.last_status = status;
      let next = match status {
        GameStatus::Won => {
          log::info!("game won");
          Some(ContextName::GameWonMenu)
        }
        GameStatus::Lost => {
          log::info!("game lost");
          Some(ContextName::GameLostMenu)
        }
        GameStatus::InProgress => None,
      };
      if let Some(next) = next {
        self.hide_active_popups();
        match next {
          ContextName::GameWonMenu => self.view.show_game_won_menu(),
          _ => self.view.show_game_lost_menu(),
        }
        self.set_active_context(next);
        return;
      }
    }

    self.sync_question();
  }
}
