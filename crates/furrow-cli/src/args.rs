use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    LocationCommands, LogCommands, MoveArgs, PlanCommands, PlantCommands, PlantingCommands,
    TimelineArgs,
};

/// Crop plan timelines from the command line
///
/// Furrow keeps crop plans, plantings, plant and location assets, movements
/// and activity logs in a local SQLite database, and derives Gantt-style
/// timelines from them grouped by plant type or by location. It can also run
/// as an MCP (Model Context Protocol) server over stdio.
#[derive(Parser)]
#[command(version, about, name = "furrow")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/furrow/furrow.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Prefix for row links and task edit URLs (site-relative when omitted)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Furrow CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage crop plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage plant assets
    Plant {
        #[command(subcommand)]
        command: PlantCommands,
    },
    /// Manage location assets
    Location {
        #[command(subcommand)]
        command: LocationCommands,
    },
    /// Manage plantings within plans
    Planting {
        #[command(subcommand)]
        command: PlantingCommands,
    },
    /// Record activity logs
    Log {
        #[command(subcommand)]
        command: LogCommands,
    },
    /// Record a plant moving to one or more locations
    Move(MoveArgs),
    /// Show the timeline of a plan
    #[command(alias = "t")]
    Timeline(TimelineArgs),
    /// Start the MCP server
    Serve,
}
