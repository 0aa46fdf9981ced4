use shipsync::DeployError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::context::UiContext;

const PARTIAL_STATE_WARNING: &str =
    "The server may be partially updated. Nothing was rolled back.";

fn format_deploy_error_with(
    err: &DeployError,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let block = match err {
        DeployError::MissingTools { missing } => {
            ErrorBlock::new("Missing dependencies", err.to_string())
                .with_hint(format!("Install {} and make sure it is on PATH", missing.join(" and ")))
                .with_hint("e.g. `brew install rsync` or `apt install rsync openssh-client`")
        }
        DeployError::Unreachable { alias, detail } => {
            let block = ErrorBlock::new("SSH connection failed", err.to_string())
                .with_hint(format!("Check that '{alias}' is defined in ~/.ssh/config"))
                .with_hint("Check that the server is running and reachable")
                .with_hint("Check that key-based authentication is set up");
            match detail {
                Some(detail) => block.with_detail(detail.as_str()),
                None => block,
            }
        }
        DeployError::SyncFailed { detail, .. } => {
            let block = ErrorBlock::new("File sync failed", err.to_string())
                .with_hint("Check permissions on the remote path and free disk space");
            match detail {
                Some(detail) => block.with_detail(detail.as_str()),
                None => block,
            }
        }
        DeployError::RemoteCommandFailed { steps, detail, .. } => {
            let chain = format!("Command chain:\n{}", numbered(steps));
            let detail = match detail {
                Some(stderr) => format!("{stderr}\n{chain}"),
                None => chain,
            };
            ErrorBlock::new("Remote commands failed", err.to_string())
                .with_detail(detail)
                .with_hint("Steps stop at the first failure; see the output above for which one")
        }
        DeployError::Interrupted { stage } => ErrorBlock::new("Interrupted", err.to_string())
            .with_detail(format!("Stopped at the {stage} stage"))
            .with_hint("Run shipsync again to finish the deployment"),
        DeployError::ConfigRead { .. }
        | DeployError::ConfigParse { .. }
        | DeployError::InvalidConfig { .. } => {
            ErrorBlock::new("Configuration error", err.to_string())
                .with_hint("Fix shipsync.toml or the SHIPSYNC_* environment variables")
        }
        DeployError::Spawn { .. } => ErrorBlock::new("Command failed to start", err.to_string()),
    };

    let block = if err.remote_state_indeterminate() {
        block.with_warning(PARTIAL_STATE_WARNING)
    } else {
        block
    };

    block.render(supports_color, supports_unicode)
}

fn numbered(steps: &[String]) -> String {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("  {}. {}", i + 1, step))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    if let Some(deploy) = err.downcast_ref::<DeployError>() {
        return format_deploy_error_with(deploy, supports_color, supports_unicode);
    }

    format!("[ERROR] {:#}\n", err)
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let mut output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        if let Some(deploy) = err.downcast_ref::<DeployError>() {
            output["remote_state_indeterminate"] =
                serde_json::Value::Bool(deploy.remote_state_indeterminate());
            if let DeployError::Interrupted { stage } = deploy {
                output["stage"] = serde_json::Value::from(stage.as_str());
            }
        }
        println!("{}", output);
        return;
    }

    eprint!("\n{}", format_error(err, ui.color, ui.unicode));
}
