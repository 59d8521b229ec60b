//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// dem - Development Environment Manager for containerized tools.
#[derive(Debug, Parser)]
#[command(name = "dem")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// dem home directory (overrides default ~/.dem)
    #[arg(long, global = true, env = "DEM_HOME")]
    pub home: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Never prompt; answer confirmations with their default
    #[arg(long, global = true)]
    pub non_interactive: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List Development Environments (local by default)
    List(ListArgs),

    /// Show one Development Environment's tools and status
    Info(InfoArgs),

    /// Install a Development Environment's tool images
    Install(InstallArgs),

    /// Uninstall a Development Environment, removing unshared images
    Uninstall(UninstallArgs),

    /// Update an installed Development Environment's images
    Update(UpdateArgs),

    /// Run a command in one of a Development Environment's tool containers
    Run(RunArgs),

    /// Export a Development Environment descriptor to a file
    Export(ExportArgs),

    /// Import a Development Environment descriptor file
    Import(ImportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ListArgs {
    /// List catalog environments instead of local ones; restrict to the
    /// given catalogs when names are passed
    #[arg(long, num_args = 0.., value_delimiter = ',')]
    pub cat: Option<Vec<String>>,
}

/// Arguments for the `info` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InfoArgs {
    /// Development Environment name
    pub name: String,

    /// Look the environment up in catalogs instead of the local store;
    /// restrict to the given catalogs when names are passed
    #[arg(long, num_args = 0.., value_delimiter = ',')]
    pub cat: Option<Vec<String>>,
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InstallArgs {
    /// Development Environment name
    pub name: String,
}

/// Arguments for the `uninstall` command.
#[derive(Debug, Clone, clap::Args)]
pub struct UninstallArgs {
    /// Development Environment name
    pub name: String,
}

/// Arguments for the `update` command.
#[derive(Debug, Clone, clap::Args)]
pub struct UpdateArgs {
    /// Development Environment name
    pub name: String,
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RunArgs {
    /// Development Environment name
    pub name: String,

    /// Tool image to run (repository, or repository:tag)
    pub image: String,

    /// Workspace directory mounted read-write at /work
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Run the container privileged
    #[arg(long)]
    pub privileged: bool,

    /// Command to run inside the container
    #[arg(trailing_var_arg = true, required = true)]
    pub command: Vec<String>,
}

/// Arguments for the `export` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExportArgs {
    /// Development Environment name
    pub name: String,

    /// Destination descriptor file
    pub path: PathBuf,
}

/// Arguments for the `import` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ImportArgs {
    /// Descriptor file to import
    pub path: PathBuf,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
