//! CLI commands for markrank

pub mod dispatch;
pub mod prompt;
pub mod rank;
