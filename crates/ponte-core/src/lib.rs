//! Business logic for the Ponte relay bot.
//!
//! The centerpiece is [`gateway::ChatGateway`], which gates every outbound
//! completion behind a budget check and a rate limiter, accounts token
//! usage and cost in a process-lifetime ledger, and replays the running
//! conversation on each request. Provider implementations live in
//! `ponte-infra` behind the [`llm::LlmProvider`] trait.

pub mod auth;
pub mod gateway;
pub mod i18n;
pub mod llm;
