//! Human-readable rendering of deploy events

use std::io::{self, Write};
use std::sync::Mutex;

use shipsync::application::DeployReport;
use shipsync::domain::ports::{DeployEvent, DeployEventSink};
use shipsync::domain::value_objects::Stage;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_deploy_header(
    alias: &str,
    host: &str,
    destination: &str,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Deploy, format!("Deploying to {alias}"));
    header.add("Host", host);
    header.add("Target", destination);
    if dry_run {
        header.add("Mode", "dry run (no files written, remote commands skipped)");
    }

    header.render(supports_color, supports_unicode)
}

pub fn render_stage_line(stage: Stage, supports_color: bool) -> String {
    let label = ColoredText::info(format!("[{}/{}]", stage.number(), Stage::total()))
        .bold()
        .render(supports_color);
    format!("{} {}...\n", label, stage.title())
}

pub fn render_deploy_summary(
    report: &DeployReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if report.dry_run {
        ResultSummary::partial("Dry run complete")
    } else {
        let title = if supports_unicode {
            "🎉 Deploy complete"
        } else {
            "Deploy complete"
        };
        ResultSummary::success(title)
    };

    summary.add_field("Server", report.host.as_str());
    summary.add_field("Path", report.remote_path.as_str());
    summary.add_field("Excluded patterns", report.excluded.to_string());
    if report.dry_run {
        summary.add_field("Remote steps", "skipped");
        summary.add_warning("Nothing was changed on the server");
        summary.with_next_step("Run again without --dry-run to deploy");
    } else {
        summary.add_field("Remote steps", report.steps_run.to_string());
    }
    summary.add_field(
        "Elapsed",
        format!("{:.1}s", report.elapsed.as_secs_f64()),
    );

    summary.render(supports_color, supports_unicode)
}

/// Event sink that prints stage-labelled progress for a person watching the terminal
pub struct ConsoleEventSink {
    ui: UiContext,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout(ui: UiContext) -> Self {
        Self::with_writer(ui, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(ui: UiContext, writer: W) -> Self {
        Self {
            ui,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn render(&self, event: &DeployEvent) -> Option<String> {
        let color = self.ui.color;
        let unicode = self.ui.unicode;

        let line = |icon: Icon, text: &str| format!("{} {}\n", icon.colored(color, unicode), text);

        match event {
            DeployEvent::Started {
                alias,
                host,
                destination,
                dry_run,
            } => Some(format!(
                "{}\n",
                render_deploy_header(alias, host, destination, *dry_run, color, unicode)
            )),

            DeployEvent::StageStarted { stage } => {
                // Blank line between stages, not before the first one
                let lead = if *stage == Stage::Dependencies { "" } else { "\n" };
                Some(format!("{lead}{}", render_stage_line(*stage, color)))
            }

            DeployEvent::CommandIssued { stage, command_line } => {
                // A dry run prints the remote command line it would have run
                if self.ui.verbose == 0 && *stage != Stage::Remote {
                    return None;
                }
                let prompt = Icon::Prompt.colored(color, unicode);
                Some(format!(
                    "  {} {}\n",
                    prompt,
                    ColoredText::dim(command_line.as_str()).render(color)
                ))
            }

            DeployEvent::ToolFound { name, path } => {
                let text = if self.ui.verbose > 0 {
                    format!("{name} ({})", path.display())
                } else {
                    name.clone()
                };
                Some(format!("  {}", line(Icon::Success, &text)))
            }

            DeployEvent::ToolMissing { name } => Some(format!(
                "  {}",
                line(Icon::Error, &format!("{name} not found"))
            )),

            DeployEvent::AboutToDeploy { host } => {
                let text = ColoredText::warning(format!("About to deploy to server: {host}"))
                    .render(color);
                Some(format!("\n{}", line(Icon::Warning, &text)))
            }

            DeployEvent::StageCompleted { message, .. } => Some(line(
                Icon::Success,
                &ColoredText::success(message.as_str()).render(color),
            )),

            DeployEvent::StageSkipped { reason, .. } => Some(line(
                Icon::Arrow,
                &ColoredText::dim(format!("Skipped ({reason})")).render(color),
            )),

            DeployEvent::StageFailed { stage, .. } => Some(line(
                Icon::Error,
                &ColoredText::error(format!("{} failed", stage.title())).render(color),
            )),

            DeployEvent::Completed {
                host,
                remote_path,
                excluded,
                steps,
                elapsed,
                dry_run,
            } => {
                let report = DeployReport {
                    host: host.clone(),
                    remote_path: remote_path.clone(),
                    excluded: *excluded,
                    steps_run: *steps,
                    dry_run: *dry_run,
                    elapsed: *elapsed,
                };
                Some(format!("\n{}", render_deploy_summary(&report, color, unicode)))
            }
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        let Some(text) = self.render(&event) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.write_all(text.as_bytes());
            let _ = writer.flush();
        }
    }
}
