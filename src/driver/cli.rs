//! CLI Argument Parsing
//!
//! CLIの引数解析

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

/// 予約を管理するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "appointly")]
#[command(about = "Book appointments without overlapping time slots", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, default_value = "./.appointly/config.json")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create an appointment if the time slot is free
    Create {
        /// Customer identifier
        #[arg(long)]
        customer: String,

        /// Start time (RFC 3339, e.g. 2024-12-25T10:00:00Z)
        #[arg(long)]
        starts_at: DateTime<Utc>,

        /// End time (RFC 3339)
        #[arg(long)]
        ends_at: DateTime<Utc>,
    },

    /// List stored appointments ordered by start time
    List,
}
