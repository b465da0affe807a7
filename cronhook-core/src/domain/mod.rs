//! Core domain types
//!
//! Structures shared between the server (which builds them from the live
//! crontab) and the client/CLI (which receive them over HTTP).

pub mod job;
