use crate::error::TranslatedError;
use colored::Colorize;

mod template;
mod terminal;

#[cfg(test)]
pub(crate) mod recording;

pub use template::render;
pub use terminal::TerminalUi;

/// Named values substituted into `{{Key}}` placeholders.
pub type TemplateValues<'a> = &'a [(&'a str, String)];

/// Output sink handed to commands and to the dispatcher.
///
/// The dispatcher only selects templates and values; rendering and the
/// choice of stream belong to the implementation.
pub trait Ui {
    fn display_error(&self, err: &TranslatedError);

    fn display_warning(&self, template: &str, values: TemplateValues<'_>);

    fn display_text(&self, template: &str, values: TemplateValues<'_>);

    fn display_newline(&self);

    /// Queue text that is only written by [`Ui::flush_deferred`].
    fn defer_text(&self, template: &str, values: TemplateValues<'_>);

    fn flush_deferred(&self);
}

/// Apply the configured color preference. `None` keeps terminal detection.
pub fn init_colors(enabled: Option<bool>) {
    if let Some(enabled) = enabled {
        colored::control::set_override(enabled);
    }
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}
