use clap::{ArgAction, Parser};
use eyre::{Result, bail};
use std::path::PathBuf;
use tracing::Level;
use vsolver::{Config, display, loaders, solve};

#[derive(Debug, Parser)]
#[command(version, about = "Assign students to projects from their ranked choices")]
struct Args {
    /// Combined JSON input document
    #[arg(required_unless_present = "students", conflicts_with_all = ["students", "projects"])]
    input: Option<PathBuf>,
    /// Students CSV file, to be used with --projects
    #[arg(long, requires = "projects")]
    students: Option<PathBuf>,
    /// Projects CSV file, to be used with --students
    #[arg(long, requires = "students")]
    projects: Option<PathBuf>,
    /// Use FILE instead of the built-in defaults
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Print the solution as JSON on stdout
    #[arg(short, long)]
    json: bool,
    /// Set verbosity level
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let config = match &args.config {
        Some(file_name) => Config::load(file_name)?,
        None => Config::default(),
    };
    let (students, projects) = match (&args.input, &args.students, &args.projects) {
        (Some(input), None, None) => loaders::load_json(input)?,
        (None, Some(students), Some(projects)) => loaders::load_csv(students, projects)?,
        _ => bail!("give either a JSON document or --students and --projects"),
    };
    let outcome = solve(&students, &projects, &config.solver)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.solution())?);
    } else {
        display::display_details(&outcome.assignments);
        display::display_stats(&outcome.assignments, outcome.total_cost);
        display::display_empty(&outcome.assignments);
    }
    Ok(())
}
