use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "snip")]
#[command(about = "A terminal snippet list with one-keystroke clipboard copy", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Path to the snippet list file (or set SNIP_FILE env var)
    #[arg(value_name = "FILE", env = "SNIP_FILE")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add an item to the end of the list
    Add {
        /// Item text
        text: String,
    },
    /// List all items
    List,
    /// Replace the item at an index
    Edit {
        #[arg(long)]
        index: usize,
        #[arg(long)]
        text: String,
    },
    /// Remove the item at an index
    Remove {
        #[arg(long)]
        index: usize,
    },
    /// Remove every item (and the list file)
    Clear,
    /// Copy the item at an index to the system clipboard
    Copy {
        #[arg(long)]
        index: usize,
    },
    /// Show item and copy counts
    Status,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
