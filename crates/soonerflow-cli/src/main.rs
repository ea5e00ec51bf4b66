//! `soonerflow` CLI — check class schedules from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Parse a meeting time
//! soonerflow parse "MWF 10:00 am-10:50 am"
//!
//! # List every conflict in a schedule (stdin → stdout)
//! soonerflow conflicts < schedule.json
//!
//! # Would this section fit?
//! soonerflow conflicts -i schedule.json --candidate section.json
//!
//! # Template-week calendar events as JSON
//! soonerflow calendar -i schedule.json -o events.json --week 2026-08-17
//!
//! # Every meeting of the semester
//! soonerflow semester -i schedule.json --term "Fall 2026" --timezone America/Chicago
//!
//! # GPA and degree progress
//! soonerflow progress -i courses.json --required 120
//!
//! # Semesters between enrollment and graduation
//! soonerflow semesters --from "Fall 2022" --to "Spring 2026" --summer
//!
//! # Prerequisite graph edges for a catalog
//! soonerflow prereqs -i catalog.json --completed "MATH 1914,CS 1323"
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` or `-v`/`-vv`.

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use schedule_engine::progress::{calculate_gpa, format_gpa, total_credits, DegreeProgress, GradedCourse};
use schedule_engine::semester::{semester_count, semesters_between};
use schedule_engine::{
    check_time_conflict, expand_class_over_semester, find_all_conflicts, parse_class_time,
    prerequisite_edges, process_calendar_events, CatalogCourse, PlannerConfig, Schedule,
    ScheduledClass, Semester, TemplateWeek,
};
use serde::Deserialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "soonerflow",
    version,
    about = "SoonerFlow schedule checker"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Planner config JSON (template week, timezone, required credits)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a meeting time string and print it as JSON
    Parse {
        /// Meeting time, e.g. "TR 1:30pm-2:45pm"
        time: String,
    },
    /// Report time conflicts in a schedule, or for a candidate section
    Conflicts {
        /// Schedule JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Section JSON to check against the schedule
        #[arg(long)]
        candidate: Option<String>,
    },
    /// Project the schedule onto the template week
    Calendar {
        /// Schedule JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Monday of the template week (YYYY-MM-DD)
        #[arg(long)]
        week: Option<String>,
    },
    /// Expand the schedule over every meeting of a semester
    Semester {
        /// Schedule JSON (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Semester such as "Fall 2026" (defaults to the schedule's semester)
        #[arg(long)]
        term: Option<String>,
        /// IANA timezone (defaults to the config's timezone)
        #[arg(long)]
        timezone: Option<String>,
    },
    /// Show GPA and degree credit progress for completed courses
    Progress {
        /// JSON array of {credits, grade} (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Credits required for the degree
        #[arg(long)]
        required: Option<u32>,
    },
    /// List the semesters from enrollment through graduation
    Semesters {
        /// First semester, e.g. "Fall 2022"
        #[arg(long)]
        from: String,
        /// Last semester, e.g. "Spring 2026"
        #[arg(long)]
        to: String,
        /// Include summer terms (also enabled by the config's include_summer)
        #[arg(long)]
        summer: bool,
    },
    /// Build prerequisite graph edges for a catalog of courses
    Prereqs {
        /// JSON array of {subject, number, description} (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Completed course codes, comma-separated
        #[arg(long, value_delimiter = ',')]
        completed: Vec<String>,
    },
}

/// A schedule file may be a full schedule object or a bare array of classes.
#[derive(Deserialize)]
#[serde(untagged)]
enum ScheduleInput {
    Schedule(Schedule),
    Classes(Vec<ScheduledClass>),
}

impl ScheduleInput {
    fn into_schedule(self) -> Schedule {
        match self {
            ScheduleInput::Schedule(schedule) => schedule,
            ScheduleInput::Classes(classes) => Schedule {
                classes,
                ..Default::default()
            },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match cli.config.as_deref() {
        Some(path) => PlannerConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path))?,
        None => PlannerConfig::default(),
    };
    debug!(?config, "planner config");

    match cli.command {
        Commands::Parse { time } => {
            let parsed = parse_class_time(&time);
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        Commands::Conflicts { input, candidate } => {
            let schedule = read_schedule(input.as_deref())?;

            match candidate {
                Some(path) => {
                    let raw = read_input(Some(&path))?;
                    let class: ScheduledClass = serde_json::from_str(&raw)
                        .with_context(|| format!("Failed to parse candidate section: {}", path))?;
                    match check_time_conflict(&class, &schedule.classes) {
                        Some(conflict) => println!("{}", conflict),
                        None => println!("No conflicts"),
                    }
                }
                None => {
                    let conflicts = find_all_conflicts(&schedule.classes);
                    if conflicts.is_empty() {
                        println!("No conflicts");
                    }
                    for conflict in &conflicts {
                        println!("{}", conflict);
                    }
                }
            }
        }
        Commands::Calendar {
            input,
            output,
            week,
        } => {
            let schedule = read_schedule(input.as_deref())?;
            let week = match week {
                Some(raw) => {
                    let monday = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                        .with_context(|| format!("Invalid --week date: {}", raw))?;
                    TemplateWeek::new(monday)?
                }
                None => config.template_week()?,
            };

            let events = process_calendar_events(&schedule.classes, &week);
            info!(events = events.len(), week = %week.monday(), "projected template week");
            write_output(output.as_deref(), &serde_json::to_string_pretty(&events)?)?;
        }
        Commands::Semester {
            input,
            output,
            term,
            timezone,
        } => {
            let schedule = read_schedule(input.as_deref())?;
            let term = term
                .or_else(|| schedule.semester.clone())
                .context("No semester given: pass --term or set \"semester\" in the schedule")?;
            let semester: Semester = term
                .parse()
                .with_context(|| format!("Invalid semester: {}", term))?;
            let (start, end) = semester.date_range()?;
            let timezone = timezone.unwrap_or_else(|| config.timezone.clone());

            let mut events = Vec::new();
            for class in &schedule.classes {
                let expanded = expand_class_over_semester(class, start, end, &timezone)
                    .with_context(|| format!("Failed to expand class {}", class.id))?;
                events.extend(expanded);
            }
            info!(events = events.len(), %semester, "expanded semester");
            write_output(output.as_deref(), &serde_json::to_string_pretty(&events)?)?;
        }
        Commands::Progress { input, required } => {
            let raw = read_input(input.as_deref())?;
            let courses: Vec<GradedCourse> =
                serde_json::from_str(&raw).context("Failed to parse completed courses")?;
            let progress = DegreeProgress::new(
                total_credits(&courses),
                required.unwrap_or(config.required_credits),
            );

            println!("GPA:        {}", format_gpa(calculate_gpa(&courses)));
            println!("Credits:    {} / {}", progress.completed, progress.required);
            println!("Complete:   {}%", progress.percent_complete());
            println!("Remaining:  {}", progress.remaining());
        }
        Commands::Semesters { from, to, summer } => {
            let first: Semester = from
                .parse()
                .with_context(|| format!("Invalid semester: {}", from))?;
            let last: Semester = to.parse().with_context(|| format!("Invalid semester: {}", to))?;
            let include_summer = summer || config.include_summer;

            for semester in semesters_between(first, last, include_summer) {
                println!("{} ({})", semester, semester.to_code());
            }
            println!("Total:      {}", semester_count(first, last, include_summer));
        }
        Commands::Prereqs {
            input,
            output,
            completed,
        } => {
            let raw = read_input(input.as_deref())?;
            let courses: Vec<CatalogCourse> =
                serde_json::from_str(&raw).context("Failed to parse course catalog")?;
            let completed: Vec<String> = completed.iter().map(|c| c.trim().to_string()).collect();

            let edges = prerequisite_edges(&courses, &completed);
            info!(courses = courses.len(), edges = edges.len(), "built prerequisite graph");
            write_output(output.as_deref(), &serde_json::to_string_pretty(&edges)?)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so JSON on stdout stays clean. `RUST_LOG` wins over `-v`.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_schedule(path: Option<&str>) -> Result<Schedule> {
    let raw = read_input(path)?;
    let input: ScheduleInput = serde_json::from_str(&raw).context("Failed to parse schedule JSON")?;
    let schedule = input.into_schedule();
    info!(classes = schedule.classes.len(), name = %schedule.name, "loaded schedule");
    Ok(schedule)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

/// Writes `content` plus a trailing newline, to the file or to stdout.
fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    let line = format!("{}\n", content);
    match path {
        Some(path) => {
            std::fs::write(path, line).with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            io::stdout()
                .write_all(line.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
