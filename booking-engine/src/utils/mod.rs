//! Utility module - common helpers for the engine
//!
//! # Contents
//!
//! - [`time`] - business-timezone conversion (the only place timezone
//!   arithmetic happens)
//! - [`validation`] - fail-fast boundary checks
//! - [`logger`] - tracing setup

pub mod logger;
pub mod time;
pub mod validation;
