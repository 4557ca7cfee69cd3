//! gradebook CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use gradebook_core::error::RosterError;

mod commands;
mod session;
mod view;

#[derive(Parser)]
#[command(name = "gradebook", version, about = "Student marks roster manager")]
struct Cli {
    /// Roster data file (overrides config and GRADEBOOK_DATA_FILE)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// View all student records
    List,

    /// View an individual student record by code or part of a name
    Show {
        /// Student code or name fragment
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Show the student with the highest total
    Highest,

    /// Show the student with the lowest total
    Lowest,

    /// Sort student records by overall percentage and save the new order
    Sort {
        /// Lowest percentage first
        #[arg(long, conflicts_with = "descending")]
        ascending: bool,

        /// Highest percentage first
        #[arg(long)]
        descending: bool,
    },

    /// Add a student record
    Add {
        /// Student code (1000-9999)
        #[arg(long, allow_negative_numbers = true)]
        code: i32,

        /// Student name
        #[arg(long)]
        name: String,

        /// Coursework 1 (0-20)
        #[arg(long, allow_negative_numbers = true)]
        cw1: i32,

        /// Coursework 2 (0-20)
        #[arg(long, allow_negative_numbers = true)]
        cw2: i32,

        /// Coursework 3 (0-20)
        #[arg(long, allow_negative_numbers = true)]
        cw3: i32,

        /// Exam (0-100)
        #[arg(long, allow_negative_numbers = true)]
        exam: i32,
    },

    /// Update a student's record; omitted fields keep their current value
    Update {
        /// Code of the student to update
        #[arg(value_name = "CODE")]
        target: i32,

        /// New student code (1000-9999)
        #[arg(long, allow_negative_numbers = true)]
        code: Option<i32>,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New coursework 1 (0-20)
        #[arg(long, allow_negative_numbers = true)]
        cw1: Option<i32>,

        /// New coursework 2 (0-20)
        #[arg(long, allow_negative_numbers = true)]
        cw2: Option<i32>,

        /// New coursework 3 (0-20)
        #[arg(long, allow_negative_numbers = true)]
        cw3: Option<i32>,

        /// New exam mark (0-100)
        #[arg(long, allow_negative_numbers = true)]
        exam: Option<i32>,
    },

    /// Delete a student record
    Delete {
        /// Code of the student to delete
        code: i32,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Print class statistics, optionally exporting them as JSON
    Report {
        /// Write the JSON report to this path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Show a previously saved JSON report instead of the current roster
        #[arg(long, conflicts_with = "output")]
        from: Option<PathBuf>,
    },

    /// Create a starter config and an empty data file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gradebook=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data = cli.data;
    let config = cli.config;

    let result = match cli.command {
        Commands::List => commands::list::execute(data, config),
        Commands::Show { query } => commands::show::execute(data, config, query.join(" ")),
        Commands::Highest => commands::rank::execute(data, config, commands::rank::Rank::Highest),
        Commands::Lowest => commands::rank::execute(data, config, commands::rank::Rank::Lowest),
        Commands::Sort {
            ascending,
            descending,
        } => commands::sort::execute(data, config, ascending, descending),
        Commands::Add {
            code,
            name,
            cw1,
            cw2,
            cw3,
            exam,
        } => commands::add::execute(data, config, code, name, cw1, cw2, cw3, exam),
        Commands::Update {
            target,
            code,
            name,
            cw1,
            cw2,
            cw3,
            exam,
        } => commands::update::execute(
            data,
            config,
            target,
            commands::update::Changes {
                code,
                name,
                cw1,
                cw2,
                cw3,
                exam,
            },
        ),
        Commands::Delete { code, yes } => commands::delete::execute(data, config, code, yes),
        Commands::Report {
            output,
            format,
            from,
        } => commands::report::execute(data, config, output, format, from),
        Commands::Init => commands::init::execute(data),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        if e.downcast_ref::<RosterError>()
            .is_some_and(RosterError::is_retryable)
        {
            eprintln!("Nothing was saved. Correct the values and run the command again.");
        }
        process::exit(1);
    }
}
