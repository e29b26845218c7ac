use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sticky-notes")]
#[command(version, about = "A tiny board of sticky notes")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Data directory (defaults to $STICKY_NOTES_DIR or the nearest .sticky-notes/)
    #[arg(long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new board in the current directory
    Init,

    /// Show every note, newest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add an empty note to the front of the board
    Add {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace the text of a note
    Edit {
        /// Note id
        id: String,

        /// New content
        #[arg(required_unless_present = "stdin")]
        content: Option<String>,

        /// Read content from stdin
        #[arg(long, conflicts_with = "content")]
        stdin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note
    Delete {
        /// Note id
        id: String,

        /// Skip confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the data directory in use
    Path,
}
