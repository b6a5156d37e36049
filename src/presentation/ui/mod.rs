//! UI screens.

mod app;
mod dialog_popup;
mod home_screen;

pub use app::App;
pub use dialog_popup::{DialogPopup, handle_dialog_key};
pub use home_screen::{HomeFocus, HomeKeyResult, HomeScreen, HomeScreenState};
