//! colstat CLI - column statistics for delimited text files.

use std::{num::NonZeroUsize, path::PathBuf, process::ExitCode, thread};

use clap::{Args, Parser, Subcommand};

use crate::{
    classify::MissingTokens,
    profile::ColumnProfiler,
    reader::{self, CsvOptions},
    report,
    table::ColumnTable,
};

/// colstat - descriptive statistics for delimited text files
#[derive(Parser)]
#[command(name = "colstat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Input flags shared by all subcommands.
#[derive(Args)]
struct InputArgs {
    /// Path to the delimited file
    path: PathBuf,
    /// Field delimiter
    #[arg(short, long, default_value = ",")]
    delimiter: char,
    /// Treat the first row as data instead of a header
    #[arg(long)]
    no_header: bool,
    /// Comma-separated tokens that denote missing values
    /// (default: "", na, n/a, null, missing)
    #[arg(long, value_delimiter = ',')]
    missing: Option<Vec<String>>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify columns and print per-column statistics
    Summarize {
        #[command(flatten)]
        input: InputArgs,
        /// Worker threads (0 = single-threaded, default = available cores)
        #[arg(short, long)]
        workers: Option<usize>,
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Print each column's inferred type and value count
    Schema {
        #[command(flatten)]
        input: InputArgs,
    },
}

/// Run the colstat CLI.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Summarize {
            input,
            workers,
            format,
        } => cmd_summarize(&input, workers, &format),
        Commands::Schema { input } => cmd_schema(&input),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_table(input: &InputArgs) -> crate::Result<ColumnTable> {
    let delimiter = CsvOptions::delimiter_from_char(input.delimiter)?;
    let options = CsvOptions::new()
        .delimiter(delimiter)
        .has_header(!input.no_header);

    let rows = reader::read_rows(&input.path, &options)?;
    Ok(ColumnTable::assemble(rows, options.has_header))
}

fn missing_tokens(input: &InputArgs) -> MissingTokens {
    match &input.missing {
        Some(tokens) => MissingTokens::from_tokens(tokens),
        None => MissingTokens::default(),
    }
}

fn default_workers() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

fn cmd_summarize(input: &InputArgs, workers: Option<usize>, format: &str) -> crate::Result<()> {
    let table = load_table(input)?;
    if table.is_empty() {
        return Err(crate::Error::EmptyInput);
    }

    let profiler = ColumnProfiler::new()
        .missing_tokens(missing_tokens(input))
        .num_workers(workers.unwrap_or_else(default_workers));
    let report = profiler.profile(&table);

    match format {
        "json" => println!("{}", report::render_json(&report)?),
        "text" => print!("{}", report::render_text(&report)),
        other => {
            return Err(crate::Error::invalid_config(format!(
                "unknown output format '{other}' (expected text or json)"
            )))
        }
    }

    Ok(())
}

fn cmd_schema(input: &InputArgs) -> crate::Result<()> {
    let table = load_table(input)?;
    let missing = missing_tokens(input);

    println!("File: {}", input.path.display());
    println!("Columns: {}", table.len());
    println!();

    for (name, values) in table.iter() {
        if values.is_empty() {
            println!("{name}: empty (0 values)");
            continue;
        }
        let classified = crate::classify::classify(values, &missing);
        println!("{name}: {} ({} values)", classified.kind(), values.len());
    }

    Ok(())
}
