use shipsync::config::{ConfigSource, ConfigWarning};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    if ui.json {
        return;
    }

    let icon = Icon::Warning.colored(ui.color, ui.unicode);
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        let message = ColoredText::warning(format!(
            "Unknown config key '{}' in {}",
            w.key, location
        ))
        .render(ui.color);
        eprintln!("{icon} {message}");

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
}

/// With -v, say which config file was used
pub fn print_config_source(source: &ConfigSource, ui: &UiContext) {
    if ui.json || ui.verbose == 0 {
        return;
    }

    let text = match source.path() {
        Some(path) => format!("Using config {}", path.display()),
        None => "Using built-in defaults".to_string(),
    };
    eprintln!("{}", ColoredText::dim(text).render(ui.color));
}
