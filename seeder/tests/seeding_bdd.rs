//! Behaviour tests for the seeding pipeline.
//!
//! These scenarios drive `SeedingService` end to end with the filesystem
//! document sink and an in-memory table sink standing in for PostgreSQL.

use std::cell::RefCell;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use camino::Utf8PathBuf;
use campus_data::{GenerationConfig, TableBatch};
use campus_seeder::domain::ports::{TableSink, TableSinkError};
use campus_seeder::domain::{SeedingError, SeedingOutcome, SeedingService};
use campus_seeder::outbound::json_files::JsonFileSink;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;
use tempfile::TempDir;
use tokio::runtime::{Builder, Runtime};

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

fn fixture_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 2, 1, 10, 0, 0)
        .single()
        .expect("valid time")
}

/// In-memory table sink recording the order tables arrive in.
#[derive(Default)]
struct RecordingTableSink {
    reject: Option<String>,
    inserted: Mutex<Vec<String>>,
}

impl RecordingTableSink {
    fn inserted(&self) -> Vec<String> {
        self.inserted.lock().expect("sink lock").clone()
    }
}

#[async_trait]
impl TableSink for RecordingTableSink {
    async fn insert_batch(&self, batch: &TableBatch) -> Result<usize, TableSinkError> {
        let table = batch.table_name();
        if self.reject.as_deref() == Some(table) {
            return Err(TableSinkError::query(table, "rejected by test sink"));
        }
        self.inserted
            .lock()
            .expect("sink lock")
            .push(table.to_owned());
        Ok(batch.rows().len())
    }
}

struct SeedingWorld {
    runtime: Runtime,
    config: RefCell<Option<GenerationConfig>>,
    output: RefCell<Option<TempDir>>,
    sink: RefCell<Option<Arc<RecordingTableSink>>>,
    user_count: RefCell<usize>,
    outcome: RefCell<Option<Result<SeedingOutcome, SeedingError>>>,
}

impl SeedingWorld {
    fn new() -> Self {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime should initialize");
        Self {
            runtime,
            config: RefCell::new(None),
            output: RefCell::new(None),
            sink: RefCell::new(None),
            user_count: RefCell::new(0),
            outcome: RefCell::new(None),
        }
    }

    fn output_dir(&self) -> Utf8PathBuf {
        let output = self.output.borrow();
        let temp = output.as_ref().expect("output directory should be set");
        Utf8PathBuf::from_path_buf(temp.path().join("data")).expect("utf-8 temp path")
    }

    fn inserted(&self) -> Vec<String> {
        self.sink
            .borrow()
            .as_ref()
            .expect("table sink should be set")
            .inserted()
    }

    fn run(&self, service: &SeedingService) {
        let config = self
            .config
            .borrow()
            .clone()
            .expect("generation config should be set");
        *self.user_count.borrow_mut() =
            config.admin_count() + config.professor_count() + config.student_count();
        let result = self.runtime.block_on(service.seed(&config));
        *self.outcome.borrow_mut() = Some(result);
    }
}

#[fixture]
fn world() -> SeedingWorld {
    SeedingWorld::new()
}

#[given("a small generation config")]
fn a_small_generation_config(world: &SeedingWorld) {
    let config = GenerationConfig::new(21, fixture_time())
        .with_admin_count(3)
        .with_professor_count(4)
        .with_student_count(15)
        .with_subject_count(4)
        .with_building_count(2)
        .with_post_count(6)
        .with_deactivated_announcement_counts(2, 2);
    *world.config.borrow_mut() = Some(config);
}

#[given("a temporary output directory")]
fn a_temporary_output_directory(world: &SeedingWorld) {
    let temp = TempDir::new().expect("temp dir should be created");
    *world.output.borrow_mut() = Some(temp);
}

#[given("a table sink that accepts every row")]
fn a_table_sink_that_accepts_every_row(world: &SeedingWorld) {
    *world.sink.borrow_mut() = Some(Arc::new(RecordingTableSink::default()));
}

#[given("a table sink that rejects the {table} table")]
fn a_table_sink_that_rejects(world: &SeedingWorld, table: String) {
    *world.sink.borrow_mut() = Some(Arc::new(RecordingTableSink {
        reject: Some(table),
        ..RecordingTableSink::default()
    }));
}

#[when("the seeder runs without a database")]
fn the_seeder_runs_without_a_database(world: &SeedingWorld) {
    let service = SeedingService::new(Arc::new(FixtureClock {
        utc_now: fixture_time(),
    }))
    .with_document_sink(Arc::new(JsonFileSink::new(world.output_dir())));
    world.run(&service);
}

#[when("the seeder runs against the table sink")]
fn the_seeder_runs_against_the_table_sink(world: &SeedingWorld) {
    let sink = world
        .sink
        .borrow()
        .clone()
        .expect("table sink should be set");
    let service = SeedingService::new(Arc::new(FixtureClock {
        utc_now: fixture_time(),
    }))
    .with_table_sink(sink);
    world.run(&service);
}

#[then("the output directory holds {count:usize} table documents")]
fn the_output_directory_holds(world: &SeedingWorld, count: usize) {
    let outcome = world.outcome.borrow();
    let outcome = outcome
        .as_ref()
        .expect("run should have happened")
        .as_ref()
        .expect("run should succeed");
    assert_eq!(outcome.documents_written, count);
    assert_eq!(outcome.documents_failed, 0);

    let entries = std::fs::read_dir(world.output_dir())
        .expect("output directory should exist")
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "json"))
        .count();
    assert_eq!(entries, count);
}

#[then("the users document lists every generated user")]
fn the_users_document_lists_every_user(world: &SeedingWorld) {
    let path = world.output_dir().join("users.json");
    let contents = std::fs::read_to_string(&path).expect("users document should exist");
    let document: Value = serde_json::from_str(&contents).expect("users document is JSON");
    let users = document.as_array().expect("users document is an array");
    assert_eq!(users.len(), *world.user_count.borrow());
    assert!(users.iter().all(|user| user.get("user_role").is_some()));
}

#[then("the run succeeds")]
fn the_run_succeeds(world: &SeedingWorld) {
    let outcome = world.outcome.borrow();
    let result = outcome.as_ref().expect("run should have happened");
    assert!(result.is_ok(), "run failed: {result:?}");
}

#[then("{parent} are inserted before {child}")]
fn parent_inserted_before_child(world: &SeedingWorld, parent: String, child: String) {
    let inserted = world.inserted();
    let position = |name: &str| inserted.iter().position(|table| table == name);
    let parent_at = position(&parent).expect("parent table inserted");
    let child_at = position(&child).expect("child table inserted");
    assert!(parent_at < child_at, "{parent} inserted after {child}");
}

#[then("the run fails naming the {table} table")]
fn the_run_fails_naming(world: &SeedingWorld, table: String) {
    let outcome = world.outcome.borrow();
    match outcome.as_ref().expect("run should have happened") {
        Err(SeedingError::Persistence(TableSinkError::Query { table: failed, .. })) => {
            assert_eq!(failed, &table);
        }
        other => panic!("expected an insert failure, got {other:?}"),
    }
}

#[then("no table after {table} is inserted")]
fn no_table_after_is_inserted(world: &SeedingWorld, table: String) {
    let inserted = world.inserted();
    assert!(!inserted.contains(&table));
    assert_eq!(inserted.last().map(String::as_str), Some("professors"));
}

#[scenario(
    path = "tests/features/seeding.feature",
    name = "Every table is written as a JSON document"
)]
fn every_table_is_written_as_a_json_document(world: SeedingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/seeding.feature",
    name = "Tables are inserted parents first"
)]
fn tables_are_inserted_parents_first(world: SeedingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/seeding.feature",
    name = "A rejected table stops the remaining inserts"
)]
fn a_rejected_table_stops_the_remaining_inserts(world: SeedingWorld) {
    let _ = world;
}
