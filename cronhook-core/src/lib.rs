//! Cronhook Core
//!
//! Core types and pure logic shared by the Cronhook server, client and CLI.
//!
//! This crate contains:
//! - Domain types: the structured cron job record
//! - Parser: raw crontab lines to jobs
//! - Digest: content-derived job identifiers
//! - DTOs: payloads exchanged between server and client

pub mod digest;
pub mod domain;
pub mod dto;
pub mod parser;
