//! CLI commands for bertha

pub mod dispatch;
pub mod mark;
pub mod rubric;
pub mod status;
