mod commands;
mod logging;
mod output;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use logging::{init_logging, LogConfig, LogFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skylt",
    version,
    about = "Build architectural sign schedules from floor-plan text"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project store file
    #[arg(
        long,
        global = true,
        env = "SKYLT_STORE",
        default_value = skylt_core::store::DEFAULT_STORE_FILE
    )]
    store: PathBuf,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only)
    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,

    /// Log output format (logs go to stderr)
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    log_format: LogFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Create, list and edit projects
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },
    /// Scan a plan (PDF or extracted text) and generate schedule rows from one page
    Generate {
        /// Project id or name
        project: String,

        /// Path to a PDF, or to a text file with pages separated by form feeds
        input_file: PathBuf,

        /// Page of the input file to generate from (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Row preset: southwood, or any other name for generic rows (default: the project's preset, else southwood)
        #[arg(short, long)]
        preset: Option<String>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Show the result without saving it
        #[arg(long)]
        dry_run: bool,
    },
    /// Drop a pin using a palette preset (1, 2, S, L, X or its label)
    Pin {
        /// Project id or name
        project: String,

        /// Palette key or label
        preset: String,

        /// Project page the pin lands on (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long, default_value_t = 0.0)]
        x: f64,

        #[arg(long, default_value_t = 0.0)]
        y: f64,

        /// Plan file whose text is used to guess room numbers
        #[arg(long = "from", value_name = "FILE")]
        from: Option<PathBuf>,
    },
    /// Clear all pins on one page
    ClearPins {
        /// Project id or name
        project: String,

        /// Project page (1-based)
        #[arg(long)]
        page: usize,
    },
    /// Edit schedule rows by hand
    Row {
        #[command(subcommand)]
        action: RowAction,
    },
    /// Print the schedule
    Show {
        /// Project id or name
        project: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Check the schedule for incomplete bundles and level problems
    Validate {
        /// Project id or name
        project: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Export the schedule as CSV
    Export {
        /// Project id or name
        project: String,

        /// Output file (default: stdout)
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Inspect keyword rules and presets
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
}

#[derive(Subcommand)]
enum ProjectAction {
    /// Create a project
    New {
        name: String,
        #[arg(long)]
        building: Option<String>,
        #[arg(long)]
        level: Option<String>,
        #[arg(long)]
        preset: Option<String>,
    },
    /// List projects
    List,
    /// Update project settings
    Set {
        /// Project id or name
        project: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        building: Option<String>,
        #[arg(long)]
        level: Option<String>,
        #[arg(long)]
        preset: Option<String>,
    },
    /// Delete a project
    Delete {
        /// Project id or name
        project: String,
    },
}

#[derive(Subcommand)]
enum RowAction {
    /// Append a blank row
    Add {
        /// Project id or name
        project: String,
    },
    /// Set one field of a row
    Set {
        /// Project id or name
        project: String,
        /// Row number as shown by `skylt show` (1-based)
        row: usize,
        /// SignType, RoomNumber, RoomName, Building, Level or Notes
        field: String,
        value: String,
    },
    /// Delete a row
    Delete {
        /// Project id or name
        project: String,
        /// Row number as shown by `skylt show` (1-based)
        row: usize,
    },
    /// Delete every row
    Clear {
        /// Project id or name
        project: String,
    },
}

#[derive(Subcommand)]
enum RulesAction {
    /// List keyword categories and the rows they generate
    List,
    /// List row presets and the pin palette
    Presets,
}

fn main() {
    let cli = Cli::parse();

    init_logging(&LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        format: cli.log_format,
    });

    let store = cli.store;
    let result = match cli.command {
        Commands::Project { action } => match action {
            ProjectAction::New {
                name,
                building,
                level,
                preset,
            } => commands::project::new(&store, &name, building, level, preset),
            ProjectAction::List => commands::project::list(&store),
            ProjectAction::Set {
                project,
                name,
                building,
                level,
                preset,
            } => commands::project::set(&store, &project, name, building, level, preset),
            ProjectAction::Delete { project } => commands::project::delete(&store, &project),
        },
        Commands::Generate {
            project,
            input_file,
            page,
            preset,
            output,
            dry_run,
        } => commands::generate::run(
            &store,
            &project,
            input_file,
            page,
            preset.as_deref(),
            &output,
            dry_run,
        ),
        Commands::Pin {
            project,
            preset,
            page,
            x,
            y,
            from,
        } => commands::pin::run(&store, &project, &preset, page, x, y, from),
        Commands::ClearPins { project, page } => commands::pin::clear(&store, &project, page),
        Commands::Row { action } => match action {
            RowAction::Add { project } => commands::schedule::add(&store, &project),
            RowAction::Set {
                project,
                row,
                field,
                value,
            } => commands::schedule::set(&store, &project, row, &field, value),
            RowAction::Delete { project, row } => {
                commands::schedule::delete(&store, &project, row)
            }
            RowAction::Clear { project } => commands::schedule::clear(&store, &project),
        },
        Commands::Show { project, output } => commands::schedule::show(&store, &project, &output),
        Commands::Validate { project, output } => {
            commands::validate::run(&store, &project, &output)
        }
        Commands::Export { project, out } => commands::export::run(&store, &project, out),
        Commands::Rules { action } => match action {
            RulesAction::List => commands::rules::list(),
            RulesAction::Presets => commands::rules::presets(),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
