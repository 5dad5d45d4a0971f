//! Furrow CLI Application
//!
//! Command-line and MCP front end for crop plan timelines.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use furrow_core::PlannerBuilder;
use log::info;
use mcp::{run_stdio_server, FurrowMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        base_url,
        command,
    } = Args::parse();

    let mut builder = PlannerBuilder::new().with_database_path(database_file);
    if let Some(base_url) = base_url {
        builder = builder.with_base_url(base_url);
    }
    let planner = builder
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Furrow started");

    match command {
        Some(Plan { command }) => {
            Cli::new(planner, renderer)
                .handle_plan_command(command)
                .await
        }
        Some(Plant { command }) => {
            Cli::new(planner, renderer)
                .handle_plant_command(command)
                .await
        }
        Some(Location { command }) => {
            Cli::new(planner, renderer)
                .handle_location_command(command)
                .await
        }
        Some(Planting { command }) => {
            Cli::new(planner, renderer)
                .handle_planting_command(command)
                .await
        }
        Some(Log { command }) => Cli::new(planner, renderer).handle_log_command(command).await,
        Some(Move(args)) => Cli::new(planner, renderer).record_movement(args).await,
        Some(Timeline(args)) => Cli::new(planner, renderer).show_timeline(args).await,
        Some(Serve) => {
            info!("Starting Furrow MCP server");
            run_stdio_server(FurrowMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(planner, renderer).list_plans().await,
    }
}
