//! Server configuration
//!
//! Defines the configurable parameters of the server: where it listens, how
//! the crontab is read, and the limits applied when a job is run on demand.

use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to
    pub bind_addr: String,

    /// Program and arguments printing the raw crontab to stdout
    pub table_command: Vec<String>,

    /// Shell used to interpret job commands (invoked as `<shell> -c <command>`)
    pub shell: String,

    /// Maximum time a triggered job may run before it is killed
    pub job_timeout: Duration,

    /// Maximum number of stdout bytes captured from a triggered job
    pub max_output_bytes: usize,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            table_command: vec!["crontab".to_string(), "-l".to_string()],
            shell: "sh".to_string(),
            job_timeout: Duration::from_secs(300), // 5 minutes
            max_output_bytes: 1024 * 1024,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables (all optional):
    /// - CRONHOOK_BIND_ADDR (default: 0.0.0.0:8080)
    /// - CRONHOOK_TABLE_COMMAND (default: "crontab -l")
    /// - CRONHOOK_SHELL (default: sh)
    /// - CRONHOOK_JOB_TIMEOUT (seconds, default: 300)
    /// - CRONHOOK_MAX_OUTPUT_BYTES (default: 1048576)
    ///
    /// A numeric variable that is set but does not parse is an error.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::new();

        let bind_addr = lookup("CRONHOOK_BIND_ADDR").unwrap_or(defaults.bind_addr);

        let table_command = lookup("CRONHOOK_TABLE_COMMAND")
            .map(|s| s.split_whitespace().map(str::to_string).collect())
            .unwrap_or(defaults.table_command);

        let shell = lookup("CRONHOOK_SHELL").unwrap_or(defaults.shell);

        let job_timeout: Option<u64> = parse_var(&lookup, "CRONHOOK_JOB_TIMEOUT")?;
        let job_timeout = job_timeout
            .map(Duration::from_secs)
            .unwrap_or(defaults.job_timeout);

        let max_output_bytes: Option<usize> = parse_var(&lookup, "CRONHOOK_MAX_OUTPUT_BYTES")?;
        let max_output_bytes = max_output_bytes.unwrap_or(defaults.max_output_bytes);

        let config = Self {
            bind_addr,
            table_command,
            shell,
            job_timeout,
            max_output_bytes,
        };
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bind_addr.trim().is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        if self.table_command.is_empty() {
            anyhow::bail!("table_command cannot be empty");
        }

        if self.shell.trim().is_empty() {
            anyhow::bail!("shell cannot be empty");
        }

        if self.job_timeout.is_zero() {
            anyhow::bail!("job_timeout must be greater than 0");
        }

        if self.max_output_bytes == 0 {
            anyhow::bail!("max_output_bytes must be greater than 0");
        }

        Ok(())
    }
}

/// Parse an optional numeric variable; a present but malformed value is an error
fn parse_var<T, F>(lookup: &F, key: &str) -> anyhow::Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(e) => anyhow::bail!("{} has invalid value {:?}: {}", key, raw, e),
        },
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
