//! Shell runner
//!
//! Runs a job command through the system shell the way cron would, capturing
//! stdout. Every run is bounded: it is killed when it exceeds the configured
//! timeout or produces more output than the capture limit, and it is killed
//! when the awaiting future is dropped (e.g. the HTTP client went away).
//!
//! Each job runs in its own process group and kills target the whole group,
//! so commands the shell forks (`cd /srv && ./run.sh`) die with it.

use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use nix::sys::signal::{Signal, killpg};
use nix::unistd::Pid;
use thiserror::Error;
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::config::Config;

/// Failure to run a job command
#[derive(Debug, Error)]
pub enum ExecError {
    /// The shell could not be started
    #[error("failed to start {shell}: {source}")]
    Spawn {
        shell: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading output or waiting on the child failed
    #[error("failed to collect command output: {0}")]
    Io(#[from] std::io::Error),

    /// The command ran and exited unsuccessfully
    #[error("{0}")]
    ExitStatus(ExitStatus),

    #[error("command timed out after {}s", .0.as_secs_f64())]
    TimedOut(Duration),

    #[error("command output exceeded {0} bytes")]
    OutputLimit(usize),
}

/// Runs commands as `<shell> -c <command>`
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
    timeout: Duration,
    max_output_bytes: usize,
}

impl ShellRunner {
    pub fn new(shell: impl Into<String>, timeout: Duration, max_output_bytes: usize) -> Self {
        Self {
            shell: shell.into(),
            timeout,
            max_output_bytes,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.shell.clone(),
            config.job_timeout,
            config.max_output_bytes,
        )
    }

    /// Run `command` to completion and return everything it wrote to stdout
    ///
    /// Stdin is closed and stderr is discarded; failure is reported through
    /// the exit status only.
    pub async fn run(&self, command: &str) -> Result<Vec<u8>, ExecError> {
        debug!("Spawning {} -c {:?}", self.shell, command);

        let mut child = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .process_group(0)
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ExecError::Spawn {
                shell: self.shell.clone(),
                source,
            })?;

        let mut group = ProcessGroupGuard::new(child.id());

        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| std::io::Error::other("child stdout was not captured"))?;

        let limit = self.max_output_bytes;
        let capture = async {
            let mut output = Vec::new();
            (&mut stdout)
                .take(limit as u64 + 1)
                .read_to_end(&mut output)
                .await?;
            if output.len() > limit {
                return Err(ExecError::OutputLimit(limit));
            }

            let status = child.wait().await?;
            if !status.success() {
                return Err(ExecError::ExitStatus(status));
            }

            Ok(output)
        };

        let result = match tokio::time::timeout(self.timeout, capture).await {
            Ok(result) => result,
            Err(_) => Err(ExecError::TimedOut(self.timeout)),
        };

        match result {
            Err(ExecError::TimedOut(_) | ExecError::OutputLimit(_)) => {
                group.kill();
                if let Err(e) = child.wait().await {
                    warn!("Failed to reap killed command: {}", e);
                }
            }
            // The shell has exited; whatever it left in the background is
            // not ours to stop, same as under cron.
            _ => group.disarm(),
        }

        result
    }
}

/// Kills a job's process group when dropped, unless disarmed
///
/// Covers the case where the future awaiting the job is dropped mid-run.
struct ProcessGroupGuard {
    pgid: Option<Pid>,
}

impl ProcessGroupGuard {
    /// `pid` is the group leader spawned with `process_group(0)`
    fn new(pid: Option<u32>) -> Self {
        Self {
            pgid: pid.map(|pid| Pid::from_raw(pid as i32)),
        }
    }

    fn kill(&mut self) {
        if let Some(pgid) = self.pgid.take() {
            match killpg(pgid, Signal::SIGKILL) {
                Ok(()) | Err(nix::errno::Errno::ESRCH) => {
                    debug!("Killed process group {}", pgid);
                }
                Err(e) => warn!("Failed to kill process group {}: {}", pgid, e),
            }
        }
    }

    fn disarm(&mut self) {
        self.pgid = None;
    }
}

impl Drop for ProcessGroupGuard {
    fn drop(&mut self) {
        self.kill();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner() -> ShellRunner {
        ShellRunner::new("sh", Duration::from_secs(10), 1024)
    }

    #[tokio::test]
    async fn test_run_captures_stdout() {
        let output = runner().run("echo hello").await.unwrap();
        assert_eq!(output, b"hello\n");
    }

    #[tokio::test]
    async fn test_run_interprets_shell_syntax() {
        let output = runner()
            .run("printf 'b\\na\\n' | sort && echo done")
            .await
            .unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "a\nb\ndone\n");
    }

    #[tokio::test]
    async fn test_run_ignores_stderr() {
        let output = runner().run("echo out; echo err >&2").await.unwrap();
        assert_eq!(output, b"out\n");
    }

    #[tokio::test]
    async fn test_run_nonzero_exit_fails() {
        let err = runner().run("echo partial; exit 3").await.unwrap_err();

        match err {
            ExecError::ExitStatus(status) => assert_eq!(status.code(), Some(3)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_run_missing_shell_fails_to_spawn() {
        let runner = ShellRunner::new("/nonexistent/shell", Duration::from_secs(1), 16);
        let err = runner.run("echo hello").await.unwrap_err();
        assert!(matches!(err, ExecError::Spawn { .. }));
    }

    #[tokio::test]
    async fn test_run_times_out() {
        let runner = ShellRunner::new("sh", Duration::from_millis(200), 1024);
        let started = std::time::Instant::now();

        let err = runner.run("sleep 5").await.unwrap_err();

        assert!(matches!(err, ExecError::TimedOut(_)));
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[tokio::test]
    async fn test_run_output_limit() {
        let runner = ShellRunner::new("sh", Duration::from_secs(10), 8);

        let err = runner.run("echo 0123456789").await.unwrap_err();
        assert!(matches!(err, ExecError::OutputLimit(8)));

        let output = runner.run("printf 01234567").await.unwrap();
        assert_eq!(output, b"01234567");
    }

    /// Read a pid written by the job, waiting briefly for the shell to write it
    async fn read_pid(path: &std::path::Path) -> i32 {
        for _ in 0..50 {
            if let Ok(text) = std::fs::read_to_string(path) {
                if let Ok(pid) = text.trim().parse() {
                    return pid;
                }
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("job never wrote its pid to {}", path.display());
    }

    /// A process counts as gone once it has exited, even if not yet reaped
    fn process_alive(pid: i32) -> bool {
        match std::fs::read_to_string(format!("/proc/{pid}/stat")) {
            Ok(stat) => stat
                .rsplit_once(')')
                .and_then(|(_, rest)| rest.split_whitespace().next())
                .is_some_and(|state| state != "Z" && state != "X"),
            Err(_) => false,
        }
    }

    async fn wait_until_gone(pid: i32) -> bool {
        for _ in 0..100 {
            if !process_alive(pid) {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        false
    }

    /// Backgrounds a long sleep under the shell and records its pid
    fn forking_command(pid_file: &std::path::Path) -> String {
        format!("cd / && sleep 30 & echo $! > '{}'; wait", pid_file.display())
    }

    #[tokio::test]
    async fn test_timeout_kills_forked_commands() {
        let dir = tempfile::tempdir().unwrap();
        let pid_file = dir.path().join("job.pid");
        let runner = ShellRunner::new("sh", Duration::from_millis(300), 1024);

        let err = runner.run(&forking_command(&pid_file)).await.unwrap_err();
        assert!(matches!(err, ExecError::TimedOut(_)));

        let pid = read_pid(&pid_file).await;
        assert!(wait_until_gone(pid).await, "forked job {pid} outlived the timeout");
    }

    #[tokio::test]
    async fn test_output_limit_kills_forked_commands() {
        let dir = tempfile::tempdir().unwrap();
        let pid_file = dir.path().join("job.pid");
        let runner = ShellRunner::new("sh", Duration::from_secs(10), 4);
        let command = format!(
            "{}; echo too much output",
            forking_command(&pid_file).trim_end_matches("; wait")
        );

        let err = runner.run(&command).await.unwrap_err();
        assert!(matches!(err, ExecError::OutputLimit(4)));

        let pid = read_pid(&pid_file).await;
        assert!(wait_until_gone(pid).await, "forked job {pid} outlived the output limit");
    }

    #[tokio::test]
    async fn test_dropping_run_kills_forked_commands() {
        let dir = tempfile::tempdir().unwrap();
        let pid_file = dir.path().join("job.pid");
        let runner = ShellRunner::new("sh", Duration::from_secs(60), 1024);
        let command = forking_command(&pid_file);

        let abandoned =
            tokio::time::timeout(Duration::from_millis(300), runner.run(&command)).await;
        assert!(abandoned.is_err());

        let pid = read_pid(&pid_file).await;
        assert!(wait_until_gone(pid).await, "forked job {pid} outlived its request");
    }
}
