//! The controller core of a text trivia maze.
//!
//! The player explores a maze whose doors are guarded by quiz questions. This
//! crate holds the parts of the game with actual logic in them:
//! - [`qa`], the quiz items and their hints.
//! - [`command`] and [`context`], the per-screen keyboard tables and the state
//!   machine that interprets keys.
//! - [`controller`], which owns the active context and reacts to the model.
//!
//! The maze simulation and the user interface are supplied by the embedding
//! program through the [`model::MazeModel`] and [`view::MazeView`] traits.
//! [`input`] bridges terminal key events to the controller.

#![deny(unused)]
#![deny(warnings)]

pub mod command;
pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod input;
pub mod model;
pub mod qa;
pub mod view;

#[cfg(test)]
mod testing;

pub use controller::Controller;
pub use error::Error;
pub use error::Result;
