//! Terminal UI: the board view, keyboard and mouse input, and the frame loop
//! that drives the automated opponent.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
