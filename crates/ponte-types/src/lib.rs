//! Shared domain types for Ponte.
//!
//! This crate holds the data shapes used across the workspace: LLM
//! conversation and completion types, the configuration surface, and the
//! error enums that cross crate boundaries. It deliberately contains no
//! I/O and no business logic.

pub mod config;
pub mod error;
pub mod llm;
