//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// FileMyRTI state catalog and template resolver CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root; config and export paths are relative to it
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: rti.toml, optional unless given here)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List state identifiers in catalog order
    States,

    /// Show the full record of a state
    Show {
        /// State identifier, any letter case
        state: String,
    },

    /// List a state's departments with their template documents
    Departments {
        /// State identifier, any letter case
        state: String,
    },

    /// Resolve a department name to its template document and state
    Resolve {
        /// Full department display name, matched exactly
        name: String,

        /// Fallback state when the name carries no state token
        #[arg(long = "default-state")]
        default_state: Option<String>,
    },

    /// Print a state's testimonials
    Testimonials {
        /// State identifier, any letter case
        state: String,

        /// Render as an HTML fragment
        #[arg(long)]
        html: bool,
    },

    /// Report departments that have no registered template document
    Check {
        /// Exit with an error when any department is missing a document
        #[arg(long)]
        strict: bool,
    },

    /// Write JSON data files for the page renderer
    Export {
        /// Output directory path (relative to project root)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        pretty: Option<bool>,

        /// Override the documents base URL used for links.
        ///
        /// Example: exporting for a CDN-hosted build:
        ///   filemyrti export --base-url "https://cdn.example.com/rti"
        #[arg(long = "base-url")]
        base_url: Option<String>,
    },
}
