mod display_state;
mod notifications;
mod ui_state;

pub use display_state::{DisplayState, ratio_along, ratio_within};
pub use notifications::NotificationStack;
pub use ui_state::UiState;
