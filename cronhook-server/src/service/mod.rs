//! Service Module
//!
//! Business logic layer for the server.
//! Services orchestrate between repositories and contain domain logic.

pub mod job;
pub mod shell;

// Re-export for convenience
pub use job as job_service;
pub use shell::ShellRunner;
