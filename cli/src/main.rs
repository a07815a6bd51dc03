//! pmis CLI - binary entry point.
//!
//! ```text
//! main() -> init_tracing() -> Settings::load() -> DataStore::open() -> Placement
//!                                                                         |
//!                                                                         v
//!                                       profile | student | match | match-all | admin ...
//! ```
//!
//! Results go to stdout. Diagnostics go to `~/.pmis/logs/pmis.log` so that
//! piping JSON output stays clean.

mod render;

use std::{
    fs::{self, File, OpenOptions},
    io,
    path::PathBuf,
    sync::Mutex,
};

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use pmis_config::Settings;
use pmis_engine::{MatchingEngine, Placement, StudentMatches};
use pmis_store::{DataStore, Seed};
use pmis_types::{LocationType, NewStudent, SocialCategory, StudentId};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::debug!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // No log file: surface warnings on stderr only, keeping stdout for results.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::new("warn"))
        .init();
    for warning in init_warnings {
        tracing::warn!("{warning}");
    }
}

fn open_log_file() -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.pmis/logs/pmis.log
    if let Some(home) = pmis_config::pmis_home() {
        candidates.push(home.join("logs").join("pmis.log"));
    }

    // Fallback: ./.pmis/logs/pmis.log
    candidates.push(PathBuf::from(".pmis").join("logs").join("pmis.log"));

    candidates
}

#[derive(Parser)]
#[command(name = "pmis")]
#[command(version)]
#[command(about = "Match student profiles to government internship listings")]
struct Cli {
    /// Config file (default: $PMIS_CONFIG, then ~/.pmis/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Data directory holding the JSON collections; overrides the config file
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new student profile
    Profile(ProfileArgs),
    /// Show one student profile
    Student {
        /// Student id
        id: String,
    },
    /// List registered students
    Students,
    /// List the internship catalogue
    Internships,
    /// Rank internships for a student and save the result
    Match {
        /// Student id
        id: String,
        /// Show every sub-score next to each match
        #[arg(long)]
        explain: bool,
        /// Print the saved match record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rank internships for every registered student
    MatchAll,
    /// Show admin dashboard statistics
    Admin {
        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct ProfileArgs {
    #[arg(long)]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value_t = 0)]
    age: u32,
    /// e.g. "12th", "diploma", "undergraduate", "postgraduate", "phd"
    #[arg(long, default_value = "")]
    education: String,
    #[arg(long, default_value = "")]
    college: String,
    /// On a 10-point scale
    #[arg(long, default_value_t = 0.0)]
    cgpa: f64,
    /// Repeat for each skill
    #[arg(long = "skill")]
    skills: Vec<String>,
    /// Repeat for each sector of interest
    #[arg(long = "interest")]
    interests: Vec<String>,
    /// Preferred city, or "any"
    #[arg(long, default_value = "")]
    location_preference: String,
    /// "urban" or "rural"
    #[arg(long)]
    location_type: Option<String>,
    /// "General", "OBC", "SC", or "ST"
    #[arg(long)]
    category: Option<String>,
    #[arg(long, default_value = "")]
    experience: String,
    /// Student has taken part in the scheme before
    #[arg(long)]
    past_participation: bool,
}

impl From<ProfileArgs> for NewStudent {
    fn from(args: ProfileArgs) -> Self {
        NewStudent {
            name: args.name,
            email: args.email,
            phone: args.phone,
            age: args.age,
            education: args.education,
            college: args.college,
            cgpa: args.cgpa,
            skills: args.skills,
            interests: args.interests,
            location_preference: args.location_preference,
            location_type: args
                .location_type
                .filter(|s| !s.trim().is_empty())
                .map(LocationType::from),
            category: args
                .category
                .filter(|s| !s.trim().is_empty())
                .map(SocialCategory::from),
            experience: args.experience,
            past_participation: args.past_participation,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut settings =
        Settings::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(dir) = cli.data_dir {
        settings.data_dir = dir;
    }

    let store = DataStore::open(
        settings.data_dir.clone(),
        Seed::from_flag(settings.seed_sample_internships),
    )
    .with_context(|| {
        format!(
            "failed to open data directory {}",
            settings.data_dir.display()
        )
    })?;
    let placement = Placement::new(store, MatchingEngine::new(settings.matching));

    run(&placement, cli.command)
}

fn run(placement: &Placement, command: Commands) -> Result<()> {
    match command {
        Commands::Profile(args) => {
            let student = placement.register_student(args.into())?;
            println!("Profile created successfully!");
            println!("Student id: {}", student.id);
        }
        Commands::Student { id } => {
            let id = StudentId::new(id);
            let student = placement
                .student(&id)
                .ok_or_else(|| anyhow!("student not found: {id}"))?;
            print!("{}", render::student(&student));
        }
        Commands::Students => {
            print!("{}", render::students(&placement.store().all_students()));
        }
        Commands::Internships => {
            print!(
                "{}",
                render::internships(&placement.store().all_internships())
            );
        }
        Commands::Match { id, explain, json } => {
            let id = StudentId::new(id);
            let StudentMatches { student, record } = placement.run_matching(&id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                let engine = explain.then_some(placement.engine());
                print!("{}", render::match_results(&student, &record, engine));
            }
        }
        Commands::MatchAll => {
            let summary = placement.match_all()?;
            println!("{}", serde_json::to_string(&summary)?);
        }
        Commands::Admin { json } => {
            let dashboard = placement.dashboard();
            if json {
                println!("{}", serde_json::to_string_pretty(&dashboard.stats)?);
            } else {
                print!("{}", render::dashboard(&dashboard));
            }
        }
    }
    Ok(())
}
