mod cli_mode;
mod editor_utils;

pub use cli_mode::CliModeResult;
pub use editor_utils::{open_file_in_editor, resolve_editor};
