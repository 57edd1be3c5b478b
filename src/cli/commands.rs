//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dayjot")]
#[command(about = "Terminal day journal: one entry per day, with tags and exports", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show debug logging on stderr (DAYJOT_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Write or update today's entry
    Write {
        /// Entry text (opens the editor when omitted)
        #[arg(short, long)]
        text: Option<String>,

        /// Comma-separated tags to add (e.g., "work, health")
        #[arg(long)]
        tags: Option<String>,
    },

    /// Show the full text of an entry
    Show {
        /// Date as YYYY-MM-DD (default: today)
        #[arg(value_name = "DATE")]
        date: Option<String>,
    },

    /// List past entries, newest first
    List {
        /// Only the entry for this date (YYYY-MM-DD)
        #[arg(long, conflicts_with = "tag")]
        date: Option<String>,

        /// Only entries carrying this tag
        #[arg(long)]
        tag: Option<String>,
    },

    /// Show all tags with entry counts, most used first
    Tags,

    /// Add or remove tags on today's entry
    Tag {
        #[command(subcommand)]
        action: TagAction,
    },

    /// Export entries to a file
    Export {
        /// Output format: json, csv, txt (default: configured format)
        #[arg(short, long)]
        format: Option<String>,

        /// Start date (YYYY-MM-DD). Given alone, selects only that date
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD). Given alone, selects only that date
        #[arg(long)]
        to: Option<String>,

        /// Output directory (default: configured export_dir or journal root)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Back up all entries as JSON
    Backup {
        /// Output directory (default: configured export_dir or journal root)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum TagAction {
    /// Add comma-separated tags to today's entry
    Add {
        /// Tags, e.g. "work, reading"
        tags: String,
    },

    /// Remove a tag from today's entry
    Remove {
        tag: String,
    },
}
