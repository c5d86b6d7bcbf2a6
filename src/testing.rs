//! Recording fakes of the model and view.

use std::cell::RefCell;
use std::rc::Rc;

use crate::model::Direction;
use crate::model::Doors;
use crate::model::GameStatus;
use crate::model::Item;
use crate::model::MazeModel;
use crate::model::Notifier;
use crate::model::Room;
use crate::qa::Question;
use crate::qa::QuestionAndAnswer as _;
use crate::view::MazeView;

/// One call made on a fake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
  Move(Direction),
  UseItem(Item),
  Reset,
  SubmitAnswer(String),
  /// A read-only model query, by method name.
  Query(&'static str),
  /// A view method without interesting arguments, by name.
  View(&'static str),
  CommandLegend(Vec<String>, Vec<String>, usize),
  ShowQuestion(String),
  Pose(String),
  EventLog(String),
}

/// The shared, ordered record of calls on both fakes.
pub type Journal = Rc<RefCell<Vec<Call>>>;

pub fn init_logging() {
  let _ = pretty_env_logger::try_init();
}

pub struct FakeModel {
  journal: Journal,
  notifiers: Vec<Notifier>,
  pub status: GameStatus,
  pub question: Option<Question>,
  pub messages: Vec<String>,
}

impl FakeModel {
  pub fn new(journal: &Journal) -> Self {
    Self {
      journal: journal.clone(),
      notifiers: Vec::new(),
      status: GameStatus::InProgress,
      question: None,
      messages: Vec::new(),
    }
  }

  /// Simulates the model changing on its own and telling its observers.
  pub fn changed(&self) {
    for n in &self.notifiers {
      n.notify();
    }
  }

  fn log(&self, call: Call) {
    self.journal.borrow_mut().push(call);
  }
}

impl MazeModel for FakeModel {
  fn move_adventurer(&mut self, direction: Direction) {
    self.log(Call::Move(direction));
  }

  fn use_item(&mut self, item: Item) {
    self.log(Call::UseItem(item));
  }

  fn reset(&mut self) {
    self.log(Call::Reset);
    self.status = GameStatus::InProgress;
    self.question = None;
    self.changed();
  }

  fn adventurer_hp(&self) -> u32 {
    self.log(Call::Query("adventurer_hp"));
    100
  }

  fn adventurer_coords(&self) -> (usize, usize) {
    self.log(Call::Query("adventurer_coords"));
    (0, 0)
  }

  fn rooms(&self) -> Vec<Room> {
    self.log(Call::Query("rooms"));
    vec![Room {
      coords: (0, 0),
      doors: Doors::EAST | Doors::SOUTH,
      locked: Doors::EAST,
      visited: true,
    }]
  }

  fn register_observer(&mut self, notifier: Notifier) {
    self.notifiers.push(notifier);
  }

  fn game_status(&self) -> GameStatus {
    self.log(Call::Query("game_status"));
    self.status
  }

  fn pending_question(&self) -> Option<&Question> {
    self.log(Call::Query("pending_question"));
    self.question.as_ref()
  }

  fn submit_answer(&mut self, answer: &str) -> bool {
    self.log(Call::SubmitAnswer(answer.to_string()));
    let correct = self
      .question
      .take()
      .map(|qa| qa.answer_is_correct(answer))
      .unwrap_or(false);
    self.changed();
    correct
  }

  fn take_messages(&mut self) -> Vec<String> {
    self.log(Call::Query("take_messages"));
    std::mem::take(&mut self.messages)
  }
}

pub struct FakeView {
  journal: Journal,
  pub main_selection: String,
  pub in_game_selection: String,
  pub answer: String,
}

impl FakeView {
  pub fn new(journal: &Journal) -> Self {
    Self {
      journal: journal.clone(),
      main_selection: "Start game".into(),
      in_game_selection: "Back to Game".into(),
      answer: String::new(),
    }
  }

  fn log(&self, call: Call) {
    self.journal.borrow_mut().push(call);
  }
}

impl MazeView for FakeView {
  fn show_main_menu(&mut self) {
    self.log(Call::View("show_main_menu"));
  }

  fn hide_main_menu(&mut self) {
    self.log(Call::View("hide_main_menu"));
  }

  fn main_menu_current_selection(&self) -> String {
    self.log(Call::View("main_menu_current_selection"));
    self.main_selection.clone()
  }

  fn show_in_game_menu(&mut self) {
    self.log(Call::View("show_in_game_menu"));
  }

  fn hide_in_game_menu(&mut self) {
    self.log(Call::View("hide_in_game_menu"));
  }

  fn in_game_menu_current_selection(&self) -> String {
    self.log(Call::View("in_game_menu_current_selection"));
    self.in_game_selection.clone()
  }

  fn show_map_legend_menu(&mut self) {
    self.log(Call::View("show_map_legend_menu"));
  }

  fn hide_map_legend_menu(&mut self) {
    self.log(Call::View("hide_map_legend_menu"));
  }

  fn show_command_legend_menu(
    &mut self,
    symbols: &[&str],
    descriptions: &[&str],
    num_cols: usize,
  ) {
    self.log(Call::CommandLegend(
      symbols.iter().map(|s| s.to_string()).collect(),
      descriptions.iter().map(|s| s.to_string()).collect(),
      num_cols,
    ));
  }

  fn hide_command_legend_menu(&mut self) {
    self.log(Call::View("hide_command_legend_menu"));
  }

  fn show_main_help_menu(&mut self) {
    self.log(Call::View("show_main_help_menu"));
  }

  fn hide_main_help_menu(&mut self) {
    self.log(Call::View("hide_main_help_menu"));
  }

  fn show_game_won_menu(&mut self) {
    self.log(Call::View("show_game_won_menu"));
  }

  fn hide_game_won_menu(&mut self) {
    self.log(Call::View("hide_game_won_menu"));
  }

  fn show_game_lost_menu(&mut self) {
    self.log(Call::View("show_game_lost_menu"));
  }

  fn hide_game_lost_menu(&mut self) {
    self.log(Call::View("hide_game_lost_menu"));
  }

  fn show_question_and_answer_menu(&mut self, qa: &Question) {
    self.log(Call::ShowQuestion(qa.question().to_string()));
  }

  fn hide_question_and_answer_menu(&mut self) {
    self.log(Call::View("hide_question_and_answer_menu"));
  }

  fn pose_question_and_get_answer(&mut self, qa: &Question) -> String {
    self.log(Call::Pose(qa.question().to_string()));
    self.answer.clone()
  }

  fn update_map(&mut self) {
    self.log(Call::View("update_map"));
  }

  fn update_hp_gauge(&mut self) {
    self.log(Call::View("update_hp_gauge"));
  }

  fn write_to_event_log(&mut self, message: &str) {
    self.log(Call::EventLog(message.to_string()));
  }

  fn quit_entire_game(&mut self) {
    self.log(Call::View("quit_entire_game"));
  }
}
