//! Crontab line parser
//!
//! Turns raw `crontab -l` output into [`CronJob`] records. Lines that are not
//! job entries (blank lines, comments, truncated entries) are dropped without
//! error: a real crontab is full of them.

use crate::domain::job::CronJob;

/// Number of leading whitespace-separated fields forming the schedule
pub const SCHEDULE_FIELDS: usize = 5;

/// Parse a single crontab line
///
/// Returns `None` for blank lines, `#` comments, and lines with fewer than
/// six fields (five schedule fields plus at least one command token).
///
/// # Example
/// ```
/// use cronhook_core::parser::parse_line;
///
/// let job = parse_line("0 * * * *   echo   hello").unwrap();
/// assert_eq!(job.schedule, "0 * * * *");
/// assert_eq!(job.command, "echo hello");
/// assert!(parse_line("# 0 * * * * echo hello").is_none());
/// ```
pub fn parse_line(raw: &str) -> Option<CronJob> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() <= SCHEDULE_FIELDS {
        return None;
    }

    let schedule = fields[..SCHEDULE_FIELDS].join(" ");
    let command = fields[SCHEDULE_FIELDS..].join(" ");

    Some(CronJob::new(schedule, command))
}

/// Parse a whole crontab, keeping table order
///
/// Every line yielding a job contributes one entry, so identical commands on
/// several lines appear several times.
pub fn parse_table(raw: &str) -> Vec<CronJob> {
    raw.lines().filter_map(parse_line).collect()
}
