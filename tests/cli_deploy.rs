#![cfg(unix)]

mod common;

use common::TestEnv;

const PROBE: &str = "ssh -o ConnectTimeout=10 -o BatchMode=yes aliyun echo ok";
const SYNC: &str = "rsync -avz --delete \
    --exclude .next --exclude node_modules --exclude .git --exclude __pycache__ \
    --exclude *.pyc --exclude .env.local --exclude .DS_Store ./ aliyun:/data/xiuxian_admin";
const REMOTE: &str = "ssh aliyun cd /data/xiuxian_admin && pnpm i && npx prisma db push \
    && pnpm build && pm2 restart xiuxian_admin";

#[test]
fn test_full_deploy_runs_every_stage_in_order() {
    let env = TestEnv::with_working_tools();

    let result = env.run(&[]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(result.exit_code, 0);
    assert_eq!(env.calls(), vec![PROBE, SYNC, REMOTE]);

    assert!(result.stdout.contains("[1/4] Checking dependencies..."));
    assert!(result.stdout.contains("[2/4] Checking SSH connection..."));
    assert!(result.stdout.contains("[3/4] Syncing files to server..."));
    assert!(result.stdout.contains("[4/4] Running deploy commands on server..."));
    assert!(result
        .stdout
        .contains("About to deploy to server: 47.120.42.42"));
    assert!(result.stdout.contains("Deploy complete"));
    assert!(result.stdout.contains("Path: /data/xiuxian_admin"));
}

#[test]
fn test_missing_tools_are_all_named() {
    let env = TestEnv::new();

    let result = env.run(&[]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("missing dependencies: rsync, ssh"),
        "stderr should name both tools; got:\n{}",
        result.stderr
    );
    assert!(result.stdout.contains("rsync not found"));
    assert!(result.stdout.contains("ssh not found"));
    assert!(env.calls().is_empty());
}

#[test]
fn test_missing_ssh_only_is_reported_alone() {
    let env = TestEnv::new();
    env.install_tool("rsync", "exit 0");

    let result = env.run(&[]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("missing dependencies: ssh"));
    assert!(result.stdout.contains("[OK] rsync"));
    assert!(env.calls().is_empty());
}

#[test]
fn test_unreachable_server_stops_before_sync() {
    let env = TestEnv::new();
    env.install_tool("rsync", "exit 0");
    env.install_tool(
        "ssh",
        "echo 'ssh: connect to host aliyun port 22: Connection timed out' >&2\nexit 255",
    );

    let result = env.run(&[]);

    assert_eq!(result.exit_code, 1);
    assert_eq!(env.calls(), vec![PROBE]);
    assert!(result.stderr.contains("cannot reach 'aliyun' over ssh"));
    assert!(result.stderr.contains("~/.ssh/config"));
    assert!(result.stderr.contains("Connection timed out"));
    assert!(!result.stdout.contains("About to deploy"));
}

#[test]
fn test_sync_failure_skips_remote_commands() {
    let env = TestEnv::new();
    env.install_tool("rsync", "exit 23");
    env.install_tool("ssh", "exit 0");

    let result = env.run(&[]);

    assert_eq!(result.exit_code, 1);
    assert_eq!(env.calls(), vec![PROBE, SYNC]);
    assert!(result.stderr.contains("file sync failed (exit code 23)"));
    assert!(!result.stdout.contains("[4/4]"));
}

#[test]
fn test_remote_failure_exits_non_zero() {
    let env = TestEnv::new();
    env.install_tool("rsync", "exit 0");
    env.install_tool(
        "ssh",
        "case \"$*\" in *'echo ok'*) exit 0 ;; esac\nexit 1",
    );

    let result = env.run(&[]);

    assert_eq!(result.exit_code, 1);
    assert_eq!(env.calls(), vec![PROBE, SYNC, REMOTE]);
    assert!(result.stderr.contains("remote commands failed (exit code 1)"));
    assert!(result.stderr.contains("pm2 restart xiuxian_admin"));
    assert!(!result.stdout.contains("Deploy complete"));
}

#[test]
fn test_interrupt_during_sync_stops_the_run() {
    let env = TestEnv::new();
    env.install_tool("ssh", "exit 0");
    // Deliver Ctrl+C to shipsync itself, then die the way rsync does on SIGINT
    env.install_tool("rsync", "kill -INT $PPID\n/bin/sleep 1\nexit 20");

    let result = env.run(&[]);

    assert_eq!(result.exit_code, 1);
    assert_eq!(env.calls(), vec![PROBE, SYNC]);
    assert!(
        result.stderr.contains("deployment interrupted by user"),
        "stderr should report the interruption; got:\n{}",
        result.stderr
    );
    assert!(
        result.stderr.contains("The server may be partially updated"),
        "an interrupted sync leaves the server half-mirrored; got:\n{}",
        result.stderr
    );
}

#[test]
fn test_dry_run_previews_sync_and_skips_remote() {
    let env = TestEnv::with_working_tools();

    let result = env.run(&["--dry-run"]);

    assert!(result.success, "{}", result.combined_output());
    let calls = env.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], PROBE);
    assert!(calls[1].starts_with("rsync -avz --delete --dry-run --exclude .next"));
    assert!(result.stdout.contains("Skipped (dry run)"));
    assert!(result.stdout.contains("pm2 restart xiuxian_admin"));
    assert!(result.stdout.contains("Dry run complete"));
}

#[test]
fn test_verbose_echoes_commands() {
    let env = TestEnv::with_working_tools();

    let result = env.run(&["-v"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result
        .stdout
        .contains("$ ssh -o ConnectTimeout=10 -o BatchMode=yes aliyun 'echo ok'"));
}
