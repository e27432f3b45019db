//! `campus-seed`: generate campus seed data, write JSON documents and insert
//! the rows into PostgreSQL.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::sync::Arc;

use camino::Utf8PathBuf;
use campus_data::{DEFAULT_ID_LENGTH, DEFAULT_OUTPUT_DIR, GenerationConfig, Point};
use campus_seeder::config::DatabaseSettings;
use campus_seeder::domain::SeedingService;
use campus_seeder::outbound::json_files::JsonFileSink;
use campus_seeder::outbound::persistence::{DbPool, DieselTableSink, PoolConfig};
use chrono::{DateTime, Utc};
use clap::Parser;
use color_eyre::eyre::{Context, Result};
use mockable::DefaultClock;
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_SEED: u64 = 42;

/// `campus-seed` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "campus-seed",
    about = "Generate deterministic campus and forum seed data",
    version
)]
struct CliArgs {
    /// RNG seed; the same seed and reference time reproduce the same data.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
    /// RFC 3339 instant treated as "now". Defaults to the current time.
    #[arg(long = "reference-time", value_name = "rfc3339")]
    reference_time: Option<DateTime<Utc>>,
    /// Directory receiving one `<table>.json` document per table.
    #[arg(long = "output-dir", value_name = "path", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: Utf8PathBuf,
    /// Do not write JSON documents.
    #[arg(long = "skip-files")]
    skip_files: bool,
    /// Do not insert rows into PostgreSQL.
    #[arg(long = "skip-database")]
    skip_database: bool,
    /// Length of generated record identifiers.
    #[arg(long = "id-length", default_value_t = DEFAULT_ID_LENGTH)]
    id_length: usize,
    /// First academic year (Gregorian), inclusive.
    #[arg(long = "first-academic-year", value_name = "year")]
    first_academic_year: Option<i32>,
    /// Last academic year (Gregorian), exclusive.
    #[arg(long = "end-academic-year", value_name = "year")]
    end_academic_year: Option<i32>,
    /// Campus centre as `latitude,longitude`.
    #[arg(long = "campus-center", value_name = "lat,lng")]
    campus_center: Option<Point>,
    /// Number of faculties.
    #[arg(long)]
    faculties: Option<usize>,
    /// Curriculums per faculty.
    #[arg(long = "curriculums-per-faculty")]
    curriculums_per_faculty: Option<usize>,
    /// Majors per curriculum (at most 100).
    #[arg(long = "majors-per-curriculum")]
    majors_per_curriculum: Option<usize>,
    /// Number of admin users.
    #[arg(long)]
    admins: Option<usize>,
    /// Number of professors.
    #[arg(long)]
    professors: Option<usize>,
    /// Number of students.
    #[arg(long)]
    students: Option<usize>,
    /// Number of buildings.
    #[arg(long)]
    buildings: Option<usize>,
    /// Number of subjects.
    #[arg(long)]
    subjects: Option<usize>,
    /// Weekly schedules per subject (at most seven distinct weekdays).
    #[arg(long = "schedules-per-subject")]
    schedules_per_subject: Option<usize>,
    /// Number of ordinary forum posts.
    #[arg(long)]
    posts: Option<usize>,
}

impl CliArgs {
    fn generation_config(&self, reference_time: DateTime<Utc>) -> GenerationConfig {
        let mut config =
            GenerationConfig::new(self.seed, reference_time).with_id_length(self.id_length);

        let defaults = config.academic_years();
        let first = self.first_academic_year.unwrap_or(defaults.start);
        let end = self.end_academic_year.unwrap_or(defaults.end);
        config = config.with_academic_years(first..end);

        if let Some(center) = self.campus_center {
            config = config.with_campus_center(center);
        }
        if let Some(count) = self.faculties {
            config = config.with_faculty_count(count);
        }
        if let Some(count) = self.curriculums_per_faculty {
            config = config.with_curriculums_per_faculty(count);
        }
        if let Some(count) = self.majors_per_curriculum {
            config = config.with_majors_per_curriculum(count);
        }
        if let Some(count) = self.admins {
            config = config.with_admin_count(count);
        }
        if let Some(count) = self.professors {
            config = config.with_professor_count(count);
        }
        if let Some(count) = self.students {
            config = config.with_student_count(count);
        }
        if let Some(count) = self.buildings {
            config = config.with_building_count(count);
        }
        if let Some(count) = self.subjects {
            config = config.with_subject_count(count);
        }
        if let Some(count) = self.schedules_per_subject {
            config = config.with_schedules_per_subject(count);
        }
        if let Some(count) = self.posts {
            config = config.with_post_count(count);
        }
        config
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let args = CliArgs::parse();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build Tokio runtime")?;
    runtime.block_on(run(args))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}

async fn run(args: CliArgs) -> Result<()> {
    let mut service = SeedingService::new(Arc::new(DefaultClock));

    if !args.skip_files {
        service = service.with_document_sink(Arc::new(JsonFileSink::new(args.output_dir.clone())));
    }

    if !args.skip_database {
        let settings = DatabaseSettings::from_env()?;
        info!(
            host = settings.host(),
            port = settings.port(),
            database = settings.database_name(),
            "using PostgreSQL"
        );
        let pool = DbPool::new(PoolConfig::from_settings(&settings));
        service = service.with_table_sink(Arc::new(DieselTableSink::new(pool)));
    }

    let reference_time = service.reference_time(args.reference_time);
    let config = args.generation_config(reference_time);
    let outcome = service
        .seed(&config)
        .await
        .wrap_err("seeding run failed")?;

    info!(
        tables = outcome.tables,
        documents_written = outcome.documents_written,
        documents_failed = outcome.documents_failed,
        rows_inserted = outcome.rows_inserted,
        "seeding complete"
    );
    Ok(())
}
