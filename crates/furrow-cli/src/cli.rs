//! Command-line argument wrappers and command handlers.
//!
//! Each clap `Args` struct here converts into a core parameter struct from
//! [`furrow_core::params`] with `From`, so clap attributes stay out of the
//! core crate. [`Cli`] runs the converted parameters through the planner and
//! renders the result.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use furrow_core::{
    display::{OperationStatus, PlantingSummaries, Plans},
    models::{GroupBy, LogStatus},
    params::{
        AddLocation, AddPlant, AddPlanting, CreatePlan, Id, PlanTimeline, RecordLog,
        RecordMovement,
    },
    Planner,
};
use jiff::{civil::Date, tz::TimeZone, Timestamp};
use serde::Serialize;

use crate::renderer::TerminalRenderer;

/// Parses a date given as `YYYY-MM-DD` (midnight UTC), an RFC 3339
/// timestamp, or raw epoch seconds.
pub fn parse_epoch_seconds(value: &str) -> std::result::Result<i64, String> {
    if let Ok(seconds) = value.parse::<i64>() {
        return Ok(seconds);
    }
    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Ok(timestamp.as_second());
    }
    let date = value.parse::<Date>().map_err(|_| {
        format!("invalid date '{value}': expected YYYY-MM-DD, RFC 3339 or epoch seconds")
    })?;
    date.to_zoned(TimeZone::UTC)
        .map(|zoned| zoned.timestamp().as_second())
        .map_err(|e| format!("invalid date '{value}': {e}"))
}

/// Create a new crop plan
#[derive(Args)]
pub struct CreatePlanArgs {
    /// Name of the plan
    pub name: String,
}

impl From<CreatePlanArgs> for CreatePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreatePlan { name: val.name }
    }
}

#[derive(Args)]
pub struct ShowPlanArgs {
    #[arg(help = "Unique identifier of the plan to show")]
    pub id: u64,
}

impl From<ShowPlanArgs> for Id {
    fn from(val: ShowPlanArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// List all plans
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a plan and the summary table of its plantings
    #[command(alias = "s")]
    Show(ShowPlanArgs),
}

/// Add a plant asset
#[derive(Args)]
pub struct AddPlantArgs {
    /// Name of the plant asset
    pub name: String,
    /// Plant type names; repeat the flag or separate with commas
    #[arg(long = "type", value_delimiter = ',')]
    pub plant_types: Vec<String>,
}

impl From<AddPlantArgs> for AddPlant {
    fn from(val: AddPlantArgs) -> Self {
        AddPlant {
            name: val.name,
            plant_types: val.plant_types,
        }
    }
}

#[derive(Subcommand)]
pub enum PlantCommands {
    /// Add a plant asset
    #[command(alias = "a")]
    Add(AddPlantArgs),
}

#[derive(Args)]
pub struct AddLocationArgs {
    /// Name of the location asset
    pub name: String,
}

impl From<AddLocationArgs> for AddLocation {
    fn from(val: AddLocationArgs) -> Self {
        AddLocation { name: val.name }
    }
}

#[derive(Subcommand)]
pub enum LocationCommands {
    /// Add a location asset
    #[command(alias = "a")]
    Add(AddLocationArgs),
}

/// Add a planting to a plan
///
/// Day offsets are counted from the seeding date and must lie in 1..=365.
#[derive(Args)]
pub struct AddPlantingArgs {
    #[arg(help = "Plan to add the planting to")]
    pub plan_id: u64,
    #[arg(help = "Plant asset being planted")]
    pub plant_id: u64,
    /// Seeding date (YYYY-MM-DD, RFC 3339 or epoch seconds)
    #[arg(long, value_parser = parse_epoch_seconds)]
    pub seeded: Option<i64>,
    /// Days from seeding to transplanting
    #[arg(long)]
    pub transplant_days: Option<u32>,
    /// Days from seeding to maturity (start of harvest)
    #[arg(long)]
    pub maturity_days: Option<u32>,
    /// Length of the harvest window in days
    #[arg(long)]
    pub harvest_days: Option<u32>,
}

impl From<AddPlantingArgs> for AddPlanting {
    fn from(val: AddPlantingArgs) -> Self {
        AddPlanting {
            plan_id: val.plan_id,
            plant_id: val.plant_id,
            seeding_date: val.seeded,
            transplant_days: val.transplant_days,
            maturity_days: val.maturity_days,
            harvest_days: val.harvest_days,
        }
    }
}

#[derive(Subcommand)]
pub enum PlantingCommands {
    /// Add a planting to a plan
    #[command(alias = "a")]
    Add(AddPlantingArgs),
}

/// Record an activity log against a plant
#[derive(Args)]
pub struct AddLogArgs {
    #[arg(help = "Plant asset the log refers to")]
    pub plant_id: u64,
    /// Log type, e.g. seeding, transplanting, harvest, activity
    pub log_type: String,
    /// Log name
    pub name: String,
    /// Date of the log (YYYY-MM-DD, RFC 3339 or epoch seconds)
    #[arg(long, value_parser = parse_epoch_seconds)]
    pub date: i64,
    /// Mark the log as done instead of pending
    #[arg(long)]
    pub done: bool,
}

impl From<AddLogArgs> for RecordLog {
    fn from(val: AddLogArgs) -> Self {
        let status = if val.done {
            LogStatus::Done
        } else {
            LogStatus::Pending
        };
        RecordLog {
            plant_id: val.plant_id,
            log_type: val.log_type,
            name: val.name,
            timestamp: val.date,
            status: Some(status.as_str().to_string()),
        }
    }
}

#[derive(Subcommand)]
pub enum LogCommands {
    /// Record an activity log
    #[command(alias = "a")]
    Add(AddLogArgs),
}

#[derive(Args)]
pub struct MoveArgs {
    #[arg(help = "Plant asset being moved")]
    pub plant_id: u64,
    /// Destination location IDs; repeat the flag or separate with commas
    #[arg(long = "location", required = true, value_delimiter = ',')]
    pub locations: Vec<u64>,
    /// Date of the movement (YYYY-MM-DD, RFC 3339 or epoch seconds)
    #[arg(long, value_parser = parse_epoch_seconds)]
    pub date: i64,
}

impl From<MoveArgs> for RecordMovement {
    fn from(val: MoveArgs) -> Self {
        RecordMovement {
            plant_id: val.plant_id,
            timestamp: val.date,
            locations: val.locations,
        }
    }
}

/// Timeline grouping dimension
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Grouping {
    #[default]
    PlantType,
    Location,
}

impl From<Grouping> for GroupBy {
    fn from(val: Grouping) -> Self {
        match val {
            Grouping::PlantType => GroupBy::PlantType,
            Grouping::Location => GroupBy::Location,
        }
    }
}

/// Show the timeline of a plan
#[derive(Args)]
pub struct TimelineArgs {
    #[arg(help = "Plan to show the timeline of")]
    pub plan_id: u64,
    /// Group plantings by plant type or by location
    #[arg(long = "by", value_enum, default_value_t = Grouping::PlantType)]
    pub group_by: Grouping,
    /// Include (or with `--locations=false` exclude) location occupancy tasks.
    /// Included by default only when grouping by location.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub locations: Option<bool>,
    /// Start of the viewing window (YYYY-MM-DD, RFC 3339 or epoch seconds)
    #[arg(long, value_parser = parse_epoch_seconds)]
    pub from: Option<i64>,
    /// End of the viewing window (YYYY-MM-DD, RFC 3339 or epoch seconds)
    #[arg(long, value_parser = parse_epoch_seconds)]
    pub to: Option<i64>,
    /// Print JSON instead of markdown
    #[arg(long)]
    pub json: bool,
    /// With --json, print flat row and task lists with a viewing window
    #[arg(long, requires = "json")]
    pub flat: bool,
}

impl From<&TimelineArgs> for PlanTimeline {
    fn from(val: &TimelineArgs) -> Self {
        PlanTimeline {
            plan_id: val.plan_id,
            include_locations: val.locations,
            start: val.from,
            end: val.to,
            flat: val.flat,
        }
    }
}

/// Runs commands against a planner and renders the results.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    fn print_json<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
        println!("{json}");
        Ok(())
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => {
                let plan = self
                    .planner
                    .create_plan(&args.into())
                    .await
                    .context("Failed to create plan")?;
                self.renderer.render(&plan.to_string())
            }
            PlanCommands::List => self.list_plans().await,
            PlanCommands::Show(args) => self.show_plan(&args.into()).await,
        }
    }

    pub async fn list_plans(&self) -> Result<()> {
        let plans = self
            .planner
            .list_plans()
            .await
            .context("Failed to list plans")?;
        self.renderer.render(&Plans(plans).to_string())
    }

    async fn show_plan(&self, params: &Id) -> Result<()> {
        let Some(plan) = self
            .planner
            .get_plan(params)
            .await
            .context("Failed to get plan")?
        else {
            bail!("Plan with ID {} not found", params.id);
        };
        let summaries = self
            .planner
            .planting_summaries(params)
            .await
            .context("Failed to summarize plantings")?;

        let markdown = format!("{plan}\n## Plantings\n\n{}", PlantingSummaries(summaries));
        self.renderer.render(&markdown)
    }

    pub async fn handle_plant_command(&self, command: PlantCommands) -> Result<()> {
        match command {
            PlantCommands::Add(args) => {
                let plant = self
                    .planner
                    .add_plant(&args.into())
                    .await
                    .context("Failed to add plant")?;
                self.renderer
                    .render(&OperationStatus::success(format!("Added {plant}")).to_string())
            }
        }
    }

    pub async fn handle_location_command(&self, command: LocationCommands) -> Result<()> {
        match command {
            LocationCommands::Add(args) => {
                let location = self
                    .planner
                    .add_location(&args.into())
                    .await
                    .context("Failed to add location")?;
                self.renderer
                    .render(&OperationStatus::success(format!("Added {location}")).to_string())
            }
        }
    }

    pub async fn handle_planting_command(&self, command: PlantingCommands) -> Result<()> {
        match command {
            PlantingCommands::Add(args) => {
                let planting = self
                    .planner
                    .add_planting(&args.into())
                    .await
                    .context("Failed to add planting")?;
                self.renderer
                    .render(&OperationStatus::success(format!("Added {planting}")).to_string())
            }
        }
    }

    pub async fn handle_log_command(&self, command: LogCommands) -> Result<()> {
        match command {
            LogCommands::Add(args) => {
                let log = self
                    .planner
                    .record_log(&args.into())
                    .await
                    .context("Failed to record log")?;
                self.renderer
                    .render(&OperationStatus::success(format!("Recorded {log}")).to_string())
            }
        }
    }

    pub async fn record_movement(&self, args: MoveArgs) -> Result<()> {
        let movement = self
            .planner
            .record_movement(&args.into())
            .await
            .context("Failed to record movement")?;
        self.renderer
            .render(&OperationStatus::success(format!("Recorded {movement}")).to_string())
    }

    pub async fn show_timeline(&self, args: TimelineArgs) -> Result<()> {
        let group_by = GroupBy::from(args.group_by);
        let params = PlanTimeline::from(&args);

        if params.flat {
            let view = self
                .planner
                .timeline_view(group_by, &params)
                .await
                .context("Failed to build timeline")?;
            return Self::print_json(&view);
        }

        let timeline = self
            .planner
            .timeline(group_by, &params)
            .await
            .context("Failed to build timeline")?;
        if args.json {
            Self::print_json(&timeline)
        } else {
            self.renderer.render(&timeline.to_string())
        }
    }
}
