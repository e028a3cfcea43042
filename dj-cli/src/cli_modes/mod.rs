mod info_mode;
mod open_mode;
mod settings_mode;

pub use info_mode::info_mode;
pub use open_mode::open_mode;
pub use settings_mode::{load_settings, settings_mode};
