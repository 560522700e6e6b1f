//! Console front ends: a full-screen terminal UI and a plain line console,
//! both driven by the same input session.

mod app;
pub mod board_widget;
pub mod console;
mod game_view;
pub mod session;
pub mod text;

pub use app::App;
pub use session::{Feedback, Session, Stage};
