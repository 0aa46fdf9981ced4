use shipsync::config::{ColorMode, DeployConfig};
use shipsync::presentation::ColorWhen;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Rendering decisions for one run, resolved from CLI flags, config and terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &DeployConfig,
    ) -> Self {
        Self::from_caps(json, verbose, cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &DeployConfig,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            verbose,
            color: color && !json,
            unicode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ci_caps() -> TerminalCapabilities {
        TerminalCapabilities {
            supports_color: true,
            supports_unicode: true,
            is_ci: true,
        }
    }

    #[test]
    fn ci_defaults_to_no_color_when_auto() {
        let config = DeployConfig::default();
        let ui = UiContext::from_caps(false, 0, None, &config, ci_caps());
        assert!(!ui.color);
    }

    #[test]
    fn ci_allows_explicit_color_always_flag() {
        let config = DeployConfig::default();
        let ui = UiContext::from_caps(false, 0, Some(ColorWhen::Always), &config, ci_caps());
        assert!(ui.color);
    }

    #[test]
    fn config_can_turn_off_unicode() {
        let mut config = DeployConfig::default();
        config.output.unicode = false;
        let ui = UiContext::from_caps(false, 0, None, &config, ci_caps());
        assert!(!ui.unicode);
    }

    #[test]
    fn json_mode_never_colors() {
        let mut config = DeployConfig::default();
        config.output.color = ColorMode::Always;
        let ui = UiContext::from_caps(true, 0, None, &config, ci_caps());
        assert!(!ui.color);
    }
}
