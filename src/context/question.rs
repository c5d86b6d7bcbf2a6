use crate::command::QuestionCommand;
use crate::context::CommandContext;
use crate::context::ContextName;
use crate::model::Item;
use crate::model::MazeModel;
use crate::view::MazeView;

/// Context: a question guarding a door is on screen.
///
/// The player types into the view's answer field; `Return` hands whatever is
/// there to the model for judging and goes back to the maze. Items may be
/// spent first: a suggestion potion makes the model log a hint, and a magic
/// key opens the door outright.
#[derive(Default, Debug)]
pub struct QuestionAndAnswerContext;

impl CommandContext for QuestionAndAnswerContext {
  type Command = QuestionCommand;
  const NAME: ContextName = ContextName::QuestionAndAnswer;

  fn execute(
    &self,
    command: QuestionCommand,
    model: &mut dyn MazeModel,
    view: &mut dyn MazeView,
  ) -> Option<ContextName> {
    match command {
      QuestionCommand::UseMagicKey => {
        model.use_item(Item::MagicKey);
        None
      }
      QuestionCommand::UseSuggestionPotion => {
        model.use_item(Item::SuggestionPotion);
        None
      }
      QuestionCommand::SubmitAnswer => {
        let answer = match model.pending_question() {
          Some(qa) => view.pose_question_and_get_answer(qa),
          None => {
            log::warn!("answer submitted with no question pending");
            view.hide_question_and_answer_menu();
            return Some(ContextName::PrimaryInterface);
          }
        };

        if model.submit_answer(&answer) {
          log::info!("answer {:?} judged correct", answer);
          view.write_to_event_log(&format!("\"{}\" is correct!", answer));
        } else {
          log::info!("answer {:?} judged incorrect", answer);
          view.write_to_event_log(&format!("\"{}\" is incorrect.", answer));
        }
        view.hide_question_and_answer_menu();
        Some(ContextName::PrimaryInterface)
      }
    }
  }
}
