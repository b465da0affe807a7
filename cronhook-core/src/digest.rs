//! Job identifiers
//!
//! A job is addressed by a digest of its command text alone, so the same
//! command always maps to the same identifier regardless of its schedule.

use sha2::{Digest, Sha256};

/// Length in characters of a rendered identifier
pub const IDENTIFIER_LEN: usize = 64;

/// Compute the identifier for a command: lowercase hex SHA-256 of its bytes
pub fn job_identifier(command: &str) -> String {
    hex::encode(Sha256::digest(command.as_bytes()))
}

/// Whether `value` has the shape of an identifier produced by [`job_identifier`]
pub fn is_identifier(value: &str) -> bool {
    value.len() == IDENTIFIER_LEN
        && value
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_is_deterministic() {
        assert_eq!(job_identifier("echo hello"), job_identifier("echo hello"));
    }

    #[test]
    fn test_identifier_known_values() {
        assert_eq!(
            job_identifier("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            job_identifier(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_identifier_shape() {
        let id = job_identifier("/usr/bin/backup.sh --full");
        assert_eq!(id.len(), IDENTIFIER_LEN);
        assert!(is_identifier(&id));
    }

    #[test]
    fn test_distinct_commands_have_distinct_identifiers() {
        assert_ne!(job_identifier("echo a"), job_identifier("echo b"));
        assert_ne!(job_identifier("echo a"), job_identifier("echo  a"));
    }

    #[test]
    fn test_is_identifier_rejects_malformed() {
        assert!(!is_identifier(""));
        assert!(!is_identifier("abc"));
        assert!(!is_identifier(&"G".repeat(IDENTIFIER_LEN)));
        assert!(!is_identifier(&"A".repeat(IDENTIFIER_LEN)));
    }
}
