//! Atelier — personal project directory tracker CLI.
//!
//! # Usage
//!
//! ```text
//! atelier add <path> [--name <n>] [--category <c>] [--description <d>]
//! atelier list [--state active|paused|completed|archived] [--all] [--json]
//! atelier complete|pause|archive|reactivate <name>
//! atelier update <name> <field> <value>
//! atelier remove <name>
//! atelier scan <dir> [--dry-run]
//! atelier new [template] [--name <n>] [--path <p>] [--docs <d>] [--git|--no-git]
//! atelier template list|init
//! atelier export [--output <file>]
//! atelier mcp
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    add::AddArgs, export::ExportArgs, list::ListArgs, new::NewArgs, remove::RemoveArgs,
    scan::ScanArgs, state::StateArgs, template::TemplateCommand, update::UpdateArgs,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "atelier",
    version,
    about = "Track project directories and scaffold new ones from templates",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Track an existing project directory.
    Add(AddArgs),

    /// List tracked projects (archived hidden unless --all or --state).
    List(ListArgs),

    /// Mark a project completed.
    Complete(StateArgs),

    /// Pause a project (clears its completion date).
    Pause(StateArgs),

    /// Archive a project (preserves its completion date).
    Archive(StateArgs),

    /// Return a project to active (clears its completion date).
    Reactivate(StateArgs),

    /// Set a metadata field on a project.
    Update(UpdateArgs),

    /// Stop tracking a project (the directory is left alone).
    Remove(RemoveArgs),

    /// Discover project directories one level under a path.
    Scan(ScanArgs),

    /// Scaffold a new project from a template.
    New(NewArgs),

    /// Manage scaffolding templates.
    Template {
        #[command(subcommand)]
        command: TemplateCommand,
    },

    /// Export the full store as JSON.
    Export(ExportArgs),

    /// Serve the store over MCP (JSON-RPC on stdin/stdout).
    Mcp,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Add(args) => args.run(),
        Commands::List(args) => args.run(),
        Commands::Complete(args) => args.run(atelier_core::ProjectState::Completed),
        Commands::Pause(args) => args.run(atelier_core::ProjectState::Paused),
        Commands::Archive(args) => args.run(atelier_core::ProjectState::Archived),
        Commands::Reactivate(args) => args.run(atelier_core::ProjectState::Active),
        Commands::Update(args) => args.run(),
        Commands::Remove(args) => args.run(),
        Commands::Scan(args) => args.run(),
        Commands::New(args) => args.run(),
        Commands::Template { command } => commands::template::run(command),
        Commands::Export(args) => args.run(),
        Commands::Mcp => commands::mcp::run(),
    }
}
