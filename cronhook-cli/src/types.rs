//! Common types used across CLI modules

use cronhook_core::digest;

/// Job hash as typed by the user: either complete or an unambiguous prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashOrPrefix {
    /// Full-length hash
    Full(String),
    /// Prefix that should uniquely identify a job
    Prefix(String),
}

impl HashOrPrefix {
    /// Parse user input, normalising to lowercase
    pub fn parse(input: &str) -> Self {
        let normalized = input.trim().to_lowercase();
        if digest::is_identifier(&normalized) {
            HashOrPrefix::Full(normalized)
        } else {
            HashOrPrefix::Prefix(normalized)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            HashOrPrefix::Full(hash) => hash,
            HashOrPrefix::Prefix(prefix) => prefix,
        }
    }
}

impl std::fmt::Display for HashOrPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
