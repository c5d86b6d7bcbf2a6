//! The view contract.
//!
//! Drawing, layout and widget state all belong to the view; the controller
//! only ever shows and hides pop-ups, reads menu selections and asks for
//! refreshes.

use crate::qa::Question;

/// The operations the controller needs from the user interface.
pub trait MazeView {
  fn show_main_menu(&mut self);
  fn hide_main_menu(&mut self);
  /// The label of the highlighted main-menu entry, e.g. `"Start game"`.
  fn main_menu_current_selection(&self) -> String;

  fn show_in_game_menu(&mut self);
  fn hide_in_game_menu(&mut self);
  /// The label of the highlighted in-game-menu entry, e.g. `"Back to Game"`.
  fn in_game_menu_current_selection(&self) -> String;

  fn show_map_legend_menu(&mut self);
  fn hide_map_legend_menu(&mut self);

  /// Shows a legend of `symbols` and their `descriptions`, laid out in
  /// `num_cols` columns. The two slices have equal length.
  fn show_command_legend_menu(
    &mut self,
    symbols: &[&str],
    descriptions: &[&str],
    num_cols: usize,
  );
  fn hide_command_legend_menu(&mut self);

  fn show_main_help_menu(&mut self);
  fn hide_main_help_menu(&mut self);

  fn show_game_won_menu(&mut self);
  fn hide_game_won_menu(&mut self);

  fn show_game_lost_menu(&mut self);
  fn hide_game_lost_menu(&mut self);

  fn show_question_and_answer_menu(&mut self, qa: &Question);
  fn hide_question_and_answer_menu(&mut self);
  /// Returns what the player has entered as the answer to `qa`.
  fn pose_question_and_get_answer(&mut self, qa: &Question) -> String;

  /// Redraws the map from the model.
  fn update_map(&mut self);
  /// Redraws the HP gauge from the model.
  fn update_hp_gauge(&mut self);
  fn write_to_event_log(&mut self, message: &str);

  /// Closes the window and ends the program.
  fn quit_entire_game(&mut self);
}
