//! Data Transfer Objects
//!
//! Payloads exchanged between the Cronhook server and its clients that are
//! not domain entities themselves.

pub mod health;
