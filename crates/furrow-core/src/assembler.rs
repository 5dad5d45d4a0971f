//! Assembly of the grouped timeline row tree.
//!
//! The assembler reads a plan's plantings through a [`RecordStore`], derives
//! stages for each of them, and arranges the result as
//!
//! ```text
//! group row (plant type or location, expanded)
//! └── plant row (one per planting in the group)
//!     └── tasks: planned stages, location stages, activity logs
//! ```
//!
//! A planting appears once under every group it belongs to: a plant tagged
//! with two plant types, or one that has occupied two locations, is listed
//! twice. Groups are ordered by their record ID and plant rows by plant and
//! planting ID, so repeated calls over unchanged records produce identical
//! output.

use std::collections::BTreeMap;

use log::debug;
use serde_json::json;

use crate::{
    error::{FurrowError, Result},
    links::Links,
    models::{
        GroupBy, LogEntry, Location, MovementEvent, Plant, PlantingRecord, PlantingSummary, Stage,
        StageKind, TaskMeta, Timeline, TimelineRow, TimelineTask,
    },
    stages::{bound, bound_interval, generate_location_stages, generate_stages, SECONDS_PER_DAY},
    store::RecordStore,
};

/// Visual width of an activity log task, regardless of what the log records.
pub const LOG_TASK_SECONDS: i64 = SECONDS_PER_DAY;

/// Options controlling one assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssembleOptions {
    pub group_by: GroupBy,

    /// Whether plant rows include location occupancy tasks
    pub include_location_stages: bool,

    /// Left edge of the viewing window (epoch seconds)
    pub window_start: Option<i64>,

    /// Right edge of the viewing window (epoch seconds)
    pub window_end: Option<i64>,
}

impl AssembleOptions {
    /// Options for `group_by` without a viewing window.
    ///
    /// Location stages are included by default only when grouping by
    /// location.
    pub fn new(group_by: GroupBy) -> Self {
        Self {
            group_by,
            include_location_stages: group_by == GroupBy::Location,
            window_start: None,
            window_end: None,
        }
    }

    pub fn with_location_stages(mut self, include: bool) -> Self {
        self.include_location_stages = include;
        self
    }

    pub fn with_window(mut self, start: Option<i64>, end: Option<i64>) -> Self {
        self.window_start = start;
        self.window_end = end;
        self
    }
}

/// A planting with everything fetched for it.
struct PlantingEntry {
    planting: PlantingRecord,
    plant: Plant,
    movements: Vec<MovementEvent>,
    logs: Vec<LogEntry>,
}

/// One top-level group before it becomes a row.
struct Group<'e> {
    row: TimelineRow,
    members: Vec<&'e PlantingEntry>,
}

/// Builds timeline rows for a plan from a record store.
pub struct TimelineAssembler<'a, S: RecordStore + ?Sized> {
    store: &'a S,
    links: Links,
}

impl<'a, S: RecordStore + ?Sized> TimelineAssembler<'a, S> {
    pub fn new(store: &'a S, links: Links) -> Self {
        Self { store, links }
    }

    /// Assembles the grouped timeline of a plan.
    ///
    /// # Errors
    ///
    /// Returns `FurrowError::PlanNotFound` for an unknown plan and propagates
    /// any record-store failure unchanged.
    pub fn assemble(&self, plan_id: u64, options: &AssembleOptions) -> Result<Timeline> {
        self.require_plan(plan_id)?;
        let entries = self.load_entries(plan_id)?;
        debug!(
            "Assembling {} timeline for plan {plan_id} from {} plantings",
            options.group_by,
            entries.len()
        );

        let locations = self.load_locations(&entries)?;
        let groups = match options.group_by {
            GroupBy::PlantType => self.group_by_plant_type(&entries),
            GroupBy::Location => self.group_by_location(&entries, &locations),
        };

        let rows = groups
            .into_iter()
            .map(|group| {
                let Group { mut row, members } = group;
                row.children = members
                    .into_iter()
                    .map(|entry| self.plant_row(&row.id, entry, plan_id, options, &locations))
                    .collect();
                row
            })
            .collect::<Vec<_>>();

        debug!("Assembled {} group rows for plan {plan_id}", rows.len());

        Ok(Timeline {
            plan_id,
            group_by: options.group_by,
            rows,
        })
    }

    /// Summarizes every planting of a plan: offsets, log counts, stage
    /// counts, and the first seeding/transplanting log dates.
    ///
    /// # Errors
    ///
    /// Returns `FurrowError::PlanNotFound` for an unknown plan and propagates
    /// any record-store failure unchanged.
    pub fn summaries(&self, plan_id: u64) -> Result<Vec<PlantingSummary>> {
        self.require_plan(plan_id)?;
        self.load_entries(plan_id)?
            .into_iter()
            .map(|entry| {
                let plant_id = entry.plant.id;
                let first_seeding = self.store.first_log_of_type(plant_id, "seeding")?;
                let first_transplanting =
                    self.store.first_log_of_type(plant_id, "transplanting")?;
                Ok(PlantingSummary {
                    planting_id: entry.planting.id,
                    plant_id,
                    plant_name: entry.plant.name.clone(),
                    seeding_date: entry.planting.seeding_date,
                    transplant_days: entry.planting.transplant_days,
                    maturity_days: entry.planting.maturity_days,
                    harvest_days: entry.planting.harvest_days,
                    log_count: entry.logs.len(),
                    stage_count: generate_stages(&entry.planting).len(),
                    location_stage_count: generate_location_stages(&entry.movements).len(),
                    first_seeding: first_seeding.map(|log| log.timestamp),
                    first_transplanting: first_transplanting.map(|log| log.timestamp),
                })
            })
            .collect()
    }

    fn require_plan(&self, plan_id: u64) -> Result<()> {
        match self.store.plan(plan_id)? {
            Some(_) => Ok(()),
            None => Err(FurrowError::PlanNotFound { id: plan_id }),
        }
    }

    fn load_entries(&self, plan_id: u64) -> Result<Vec<PlantingEntry>> {
        let mut plantings = self.store.plantings_for_plan(plan_id)?;
        plantings.sort_by_key(|planting| (planting.plant_id, planting.id));

        let mut entries = Vec::with_capacity(plantings.len());
        for planting in plantings {
            let Some(plant) = self.store.plant(planting.plant_id)? else {
                debug!(
                    "Skipping planting {}: plant {} not found",
                    planting.id, planting.plant_id
                );
                continue;
            };
            let movements = self.store.movement_events(plant.id)?;
            let mut logs = self.store.activity_logs(plant.id)?;
            logs.sort_by_key(|log| (log.timestamp, log.id));

            entries.push(PlantingEntry {
                planting,
                plant,
                movements,
                logs,
            });
        }
        Ok(entries)
    }

    fn load_locations(&self, entries: &[PlantingEntry]) -> Result<BTreeMap<u64, Location>> {
        let mut locations = BTreeMap::new();
        let ids = entries
            .iter()
            .flat_map(|entry| entry.movements.iter())
            .flat_map(|movement| movement.locations.iter().copied());
        for id in ids {
            if locations.contains_key(&id) {
                continue;
            }
            match self.store.location(id)? {
                Some(location) => {
                    locations.insert(id, location);
                }
                None => debug!("Location {id} referenced by a movement was not found"),
            }
        }
        Ok(locations)
    }

    fn group_by_plant_type<'e>(&self, entries: &'e [PlantingEntry]) -> Vec<Group<'e>> {
        let mut groups: BTreeMap<u64, Group<'e>> = BTreeMap::new();
        for entry in entries {
            for plant_type in &entry.plant.plant_types {
                let group = groups.entry(plant_type.id).or_insert_with(|| Group {
                    row: TimelineRow::new(
                        format!("term--plant_type--{}", plant_type.id),
                        plant_type.name.clone(),
                    )
                    .with_link(self.links.plant_type(plant_type.id))
                    .with_class("row-plant-type")
                    .expanded(),
                    members: Vec::new(),
                });
                if !group
                    .members
                    .iter()
                    .any(|member| member.planting.id == entry.planting.id)
                {
                    group.members.push(entry);
                }
            }
            if entry.plant.plant_types.is_empty() {
                debug!(
                    "Planting {} has no plant type and is left out",
                    entry.planting.id
                );
            }
        }
        groups.into_values().collect()
    }

    fn group_by_location<'e>(
        &self,
        entries: &'e [PlantingEntry],
        locations: &BTreeMap<u64, Location>,
    ) -> Vec<Group<'e>> {
        let mut groups: BTreeMap<u64, Group<'e>> = BTreeMap::new();
        for entry in entries {
            let mut visited: Vec<u64> = entry
                .movements
                .iter()
                .flat_map(|movement| movement.locations.iter().copied())
                .collect();
            visited.sort_unstable();
            visited.dedup();

            for location_id in visited {
                let Some(location) = locations.get(&location_id) else {
                    continue;
                };
                groups
                    .entry(location_id)
                    .or_insert_with(|| Group {
                        row: TimelineRow::new(
                            format!("asset--location--{location_id}"),
                            location.name.clone(),
                        )
                        .with_link(self.links.asset(location_id))
                        .with_class("row-location")
                        .expanded(),
                        members: Vec::new(),
                    })
                    .members
                    .push(entry);
            }
        }
        groups.into_values().collect()
    }

    fn plant_row(
        &self,
        group_id: &str,
        entry: &PlantingEntry,
        plan_id: u64,
        options: &AssembleOptions,
        locations: &BTreeMap<u64, Location>,
    ) -> TimelineRow {
        let mut row = TimelineRow::new(
            format!("{group_id}--planting--{}", entry.planting.id),
            entry.plant.name.clone(),
        )
        .with_link(self.links.asset(entry.plant.id))
        .with_class("row-asset");

        let (start, end) = (options.window_start, options.window_end);
        let edit_url = self.links.planting_edit(entry.planting.id, plan_id);

        let planned = bound(&generate_stages(&entry.planting), start, end);
        row.tasks
            .extend(planned.iter().map(|stage| stage_task(&row.id, stage, &edit_url)));

        if options.include_location_stages {
            let occupancy = bound(&generate_location_stages(&entry.movements), start, end);
            row.tasks.extend(
                occupancy
                    .iter()
                    .enumerate()
                    .map(|(index, stage)| location_task(&row.id, index, stage, locations)),
            );
        }

        row.tasks.extend(
            entry
                .logs
                .iter()
                .filter(|log| {
                    let log_end = log.timestamp.saturating_add(LOG_TASK_SECONDS);
                    bound_interval(log.timestamp, Some(log_end), start, end).is_some()
                })
                .map(|log| self.log_task(&row.id, log, plan_id)),
        );

        row
    }

    fn log_task(&self, row_id: &str, log: &LogEntry, plan_id: u64) -> TimelineTask {
        let meta = TaskMeta::from([
            ("label".to_string(), json!(log.name)),
            ("entity_id".to_string(), json!(log.id)),
            ("entity_type".to_string(), json!("log")),
            ("entity_bundle".to_string(), json!(log.log_type)),
            ("log_status".to_string(), json!(log.status.as_str())),
        ]);
        TimelineTask {
            id: format!("{row_id}--log--{}", log.id),
            resource_id: Some(row_id.to_string()),
            label: log.name.clone(),
            edit_url: Some(self.links.log_edit(log.id, plan_id)),
            start: log.timestamp,
            end: Some(log.timestamp.saturating_add(LOG_TASK_SECONDS)),
            enable_dragging: false,
            meta,
            classes: vec![
                "log".to_string(),
                format!("log--{}", log.log_type),
                format!("log--status-{}", log.status.as_str()),
            ],
        }
    }
}

fn stage_task(row_id: &str, stage: &Stage, edit_url: &str) -> TimelineTask {
    let kind = stage.kind.as_str();
    TimelineTask {
        id: format!("{row_id}--stage--{kind}"),
        resource_id: Some(row_id.to_string()),
        label: stage.kind.label().to_string(),
        edit_url: Some(edit_url.to_string()),
        start: stage.start,
        end: stage.end,
        enable_dragging: false,
        meta: TaskMeta::from([("stage".to_string(), json!(kind))]),
        classes: vec!["stage".to_string(), format!("stage--{kind}")],
    }
}

fn location_task(
    row_id: &str,
    index: usize,
    stage: &Stage,
    locations: &BTreeMap<u64, Location>,
) -> TimelineTask {
    let names: Vec<&str> = stage
        .locations
        .iter()
        .filter_map(|id| locations.get(id).map(|location| location.name.as_str()))
        .collect();
    let label = if names.is_empty() {
        StageKind::Location.label().to_string()
    } else {
        names.join(", ")
    };

    TimelineTask {
        id: format!("{row_id}--location--{index}"),
        resource_id: Some(row_id.to_string()),
        label,
        edit_url: None,
        start: stage.start,
        end: stage.end,
        enable_dragging: false,
        meta: TaskMeta::from([
            ("stage".to_string(), json!(StageKind::Location.as_str())),
            ("locations".to_string(), json!(stage.locations)),
        ]),
        classes: vec!["stage".to_string(), "stage--location".to_string()],
    }
}
