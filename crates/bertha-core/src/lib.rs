//! Bertha Core Library
//!
//! Rubric model and marking session engine for the Bertha marking assistant.

pub mod config;
pub mod error;
pub mod logging;
pub mod rubric;
pub mod session;
