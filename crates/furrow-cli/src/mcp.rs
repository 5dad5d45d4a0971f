//! MCP server implementation for Furrow
//!
//! Exposes read-only timeline tools over the Model Context Protocol so that
//! assistants can inspect crop plans. Timelines are returned as JSON, plan
//! listings and details as markdown.

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use furrow_core::{
    display::{PlantingSummaries, Plans},
    models::GroupBy,
    params::{Id, PlanTimeline},
    Planner,
};
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData, ServerHandler,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

/// Parameters for the timeline tools
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(transparent)]
struct TimelineParams(PlanTimeline);

/// Parameters for showing a plan
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(transparent)]
struct ShowPlanParams(Id);

/// Furrow MCP server
#[derive(Clone)]
pub struct FurrowMcpServer {
    planner: Arc<Mutex<Planner>>,
    tool_router: ToolRouter<Self>,
}

type McpResult = Result<CallToolResult, ErrorData>;

fn json_result<T: Serialize>(value: &T) -> McpResult {
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        ErrorData::internal_error(format!("Failed to serialize result: {e}"), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool_router]
impl FurrowMcpServer {
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(Mutex::new(planner)),
            tool_router: Self::tool_router(),
        }
    }

    async fn timeline(&self, group_by: GroupBy, params: PlanTimeline) -> McpResult {
        let planner = self.planner.lock().await;
        if params.flat {
            let view = planner
                .timeline_view(group_by, &params)
                .await
                .map_err(|e| ErrorData::internal_error(format!("Failed to build timeline: {e}"), None))?;
            return json_result(&view);
        }

        let timeline = planner
            .timeline(group_by, &params)
            .await
            .map_err(|e| ErrorData::internal_error(format!("Failed to build timeline: {e}"), None))?;
        json_result(&timeline)
    }

    #[tool(
        name = "timeline_by_plant_type",
        description = "Timeline of a crop plan grouped by plant type. Each group row holds one row per planting with planned seeding/transplanting/harvest stages and activity logs as tasks (timestamps in epoch seconds; a null end means ongoing). Optional start/end clip the tasks to a window; include_locations adds location occupancy; flat=true returns flat row and task lists with a suggested viewing window."
    )]
    async fn timeline_by_plant_type(
        &self,
        Parameters(TimelineParams(params)): Parameters<TimelineParams>,
    ) -> McpResult {
        debug!("timeline_by_plant_type: {:?}", params);
        self.timeline(GroupBy::PlantType, params).await
    }

    #[tool(
        name = "timeline_by_location",
        description = "Timeline of a crop plan grouped by the locations plants were moved to. A planting appears under every location it occupied. Location occupancy tasks are included unless include_locations=false. Accepts the same start/end/flat options as timeline_by_plant_type."
    )]
    async fn timeline_by_location(
        &self,
        Parameters(TimelineParams(params)): Parameters<TimelineParams>,
    ) -> McpResult {
        debug!("timeline_by_location: {:?}", params);
        self.timeline(GroupBy::Location, params).await
    }

    #[tool(
        name = "list_plans",
        description = "List all crop plans with their IDs and creation dates."
    )]
    async fn list_plans(&self) -> McpResult {
        let planner = self.planner.lock().await;
        let plans = planner
            .list_plans()
            .await
            .map_err(|e| ErrorData::internal_error(format!("Failed to list plans: {e}"), None))?;
        Ok(CallToolResult::success(vec![Content::text(
            Plans(plans).to_string(),
        )]))
    }

    #[tool(
        name = "show_plan",
        description = "Show a crop plan with a table of its plantings: seeding date, day offsets, log and stage counts, and the dates of the first seeding and transplanting logs."
    )]
    async fn show_plan(
        &self,
        Parameters(ShowPlanParams(params)): Parameters<ShowPlanParams>,
    ) -> McpResult {
        debug!("show_plan: {:?}", params);

        let planner = self.planner.lock().await;
        let plan = planner
            .get_plan(&params)
            .await
            .map_err(|e| ErrorData::internal_error(format!("Failed to get plan: {e}"), None))?
            .ok_or_else(|| {
                ErrorData::internal_error(format!("Plan with ID {} not found", params.id), None)
            })?;
        let summaries = planner.planting_summaries(&params).await.map_err(|e| {
            ErrorData::internal_error(format!("Failed to summarize plantings: {e}"), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "{plan}\n## Plantings\n\n{}",
            PlantingSummaries(summaries)
        ))]))
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for FurrowMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "furrow".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Furrow derives crop plan timelines from plantings, plant movements and activity logs.

## Core Concepts
- **Plans**: named crop plans holding plantings
- **Plantings**: a plant asset with a seeding date and day offsets to transplanting, maturity and the end of harvest
- **Stages**: derived seeding, transplanting, harvest and location occupancy intervals

## Workflow
1. Use `list_plans` to find a plan ID
2. Use `show_plan` for the planting table
3. Use `timeline_by_plant_type` or `timeline_by_location` for the row tree; pass `flat=true` for renderer-ready lists"#.to_string()),
        }
    }
}

/// Serves MCP over stdio until the client disconnects or a shutdown signal
/// arrives.
pub async fn run_stdio_server(server: FurrowMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Furrow MCP server on stdio");

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())?;
    let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
