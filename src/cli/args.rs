// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Directory holding folders.json and notes.json (optional)
    #[arg(short, long, value_name = "DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (folder or note)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Create, list, edit and delete folders
    #[command(subcommand)]
    Folder(FolderCommand),

    /// Create, list, edit, delete and export notes
    #[command(subcommand)]
    Note(NoteCommand),
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum FolderCommand {
    /// Create a folder (an empty name creates nothing)
    Create {
        /// Folder name
        #[arg(value_name = "NAME")]
        name: String,

        /// Optional description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// List folders in creation order
    List,

    /// Change a folder's name or description
    Edit {
        /// Folder ID to edit
        #[arg(value_name = "FOLDER_ID")]
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a folder after confirmation; its notes are kept
    Delete {
        /// Folder ID to delete
        #[arg(value_name = "FOLDER_ID")]
        id: i64,

        /// Confirm without prompting
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum NoteCommand {
    /// Create a note (title and content are both required)
    Create {
        #[arg(short, long)]
        title: String,

        #[arg(long)]
        content: String,

        /// File the note under this folder
        #[arg(short, long, value_name = "FOLDER_ID")]
        folder: Option<i64>,
    },

    /// List notes, most recent first
    List {
        /// Optional search term matched against title and content
        #[arg(value_name = "SEARCH")]
        search: Option<String>,

        /// Only notes filed under this folder
        #[arg(short, long, value_name = "FOLDER_ID")]
        folder: Option<i64>,
    },

    /// Show one note
    Show {
        /// Note ID to show
        #[arg(value_name = "NOTE_ID")]
        id: i64,

        /// Output note as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change a note's title, content or folder
    Edit {
        /// Note ID to edit
        #[arg(value_name = "NOTE_ID")]
        id: i64,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,

        /// Move the note to this folder
        #[arg(short, long, value_name = "FOLDER_ID", conflicts_with = "no_folder")]
        folder: Option<i64>,

        /// Take the note out of its folder
        #[arg(long)]
        no_folder: bool,
    },

    /// Delete a note, asking for confirmation unless --yes or --force
    Delete {
        /// Note ID to delete
        #[arg(value_name = "NOTE_ID")]
        id: i64,

        /// Confirm without prompting
        #[arg(short, long, conflicts_with = "force")]
        yes: bool,

        /// Delete without any confirmation step
        #[arg(long)]
        force: bool,
    },

    /// Export a note as PDF
    Export {
        /// Note ID to export
        #[arg(value_name = "NOTE_ID")]
        id: i64,

        /// Output file (default: <title>.pdf in the export directory)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}
