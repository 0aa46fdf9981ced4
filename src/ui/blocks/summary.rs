use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed completion report
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    success: bool,
    fields: Vec<(String, String)>,
    warnings: Vec<String>,
    next_step: Option<String>,
}

impl ResultSummary {
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title, true)
    }

    /// A run that finished but did not do everything (e.g. a dry run)
    pub fn partial(title: impl Into<String>) -> Self {
        Self::new(title, false)
    }

    fn new(title: impl Into<String>, success: bool) -> Self {
        Self {
            title: title.into(),
            success,
            fields: Vec::new(),
            warnings: Vec::new(),
            next_step: None,
        }
    }

    pub fn add_field(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.fields.push((label.into(), value.into()));
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (style, icon, title) = if self.success {
            (
                BoxStyle::Success,
                Icon::Success,
                ColoredText::success(self.title.as_str()),
            )
        } else {
            (
                BoxStyle::Warning,
                Icon::Warning,
                ColoredText::warning(self.title.as_str()),
            )
        };

        let header = format!(
            "{} {}",
            icon.colored(supports_color, supports_unicode),
            title.bold().render(supports_color)
        );

        let mut b = Box::with_title(header).style(style);
        b.add_empty();

        for (label, value) in &self.fields {
            b.add_line(format!("{label}: {value}"));
        }

        if !self.warnings.is_empty() {
            b.add_empty();
            for warning in &self.warnings {
                b.add_line(format!(
                    "{} {}",
                    Icon::Warning.colored(supports_color, supports_unicode),
                    warning
                ));
            }
        }

        if let Some(next_step) = &self.next_step {
            b.add_empty();
            b.add_line(format!(
                "{} {} {}",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim("Next:").render(supports_color),
                next_step
            ));
        }

        b.render(supports_color, supports_unicode)
    }
}
