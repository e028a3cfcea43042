use super::theme::OneDark;
use dj_core::{JournalDay, Notifier, Settings, schema::SettingField};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: OneDark::default_onedark_skin(),
            opts: config.unwrap_or(RenderOptions { use_color: true }),
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            println!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    /// `2024-02-29 - day 1698`
    pub fn print_day(&self, day: &JournalDay) {
        let mut date = day.file_date();
        let mut number = format!("day {}", day.number);
        if self.opts.use_color {
            date = date.with(Color::Cyan).to_string();
            number = number.with(Color::Yellow).to_string();
        }
        println!("{date} - {number}");
    }

    /// The settings panel: one block per field with its current value.
    pub fn print_settings(&self, fields: &[SettingField], settings: &Settings) {
        let mut md = String::from("# Settings\n");
        for field in fields {
            let value = (field.get)(settings);
            md.push_str(&format!(
                "\n## {} (`{}`)\n*{}*\nCurrent: `{}` (placeholder: {})\n",
                field.name,
                field.key,
                field.description,
                show_value(&value),
                field.placeholder,
            ));
        }
        self.print_md(&md);
    }
}

impl Notifier for Renderer {
    fn notify(&self, message: &str) {
        self.print_info(message);
    }
}

/// Makes empty and whitespace-padded values visible.
fn show_value(value: &str) -> String {
    if value.is_empty() {
        "(empty)".to_string()
    } else {
        format!("{value:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_shown_with_their_padding() {
        assert_eq!(show_value(""), "(empty)");
        assert_eq!(show_value("Daily Journal "), "\"Daily Journal \"");
    }
}
