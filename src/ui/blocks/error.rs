use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed failure report with optional tool output and remediation hints
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    title: String,
    message: String,
    detail: Option<String>,
    hints: Vec<String>,
    warning: Option<String>,
}

impl ErrorBlock {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            detail: None,
            hints: Vec::new(),
            warning: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(self.title.as_str())
                .bold()
                .render(supports_color)
        );

        let mut b = Box::with_title(title).style(BoxStyle::Error);
        b.add_empty();
        b.add_line(self.message.clone());

        if let Some(detail) = &self.detail {
            b.add_empty();
            b.add_line(ColoredText::dim(detail.as_str()).render(supports_color));
        }

        if let Some(warning) = &self.warning {
            b.add_empty();
            b.add_line(format!(
                "{} {}",
                Icon::Warning.colored(supports_color, supports_unicode),
                warning
            ));
        }

        if !self.hints.is_empty() {
            b.add_empty();
            b.add_line("FIX:");
            for hint in &self.hints {
                b.add_line(format!(
                    "  {} {}",
                    Icon::Arrow.colored(supports_color, supports_unicode),
                    hint
                ));
            }
        }

        b.render(supports_color, supports_unicode)
    }
}
