use clap::{Parser, Subcommand};
use kumiawase::prelude::*;
use serde::Deserialize;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

// --- JSON Deserialization Structs (Input Format Specific) ---
// Hand-written step files may omit ids and give values as bare strings.

#[derive(Deserialize)]
#[serde(transparent)]
struct RawSteps(Vec<RawStep>);

#[derive(Deserialize)]
struct RawStep {
    #[serde(default)]
    id: Option<String>,
    name: String,
    #[serde(default)]
    values: Vec<RawValue>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Plain(String),
    Tagged {
        #[serde(default)]
        id: Option<String>,
        value: String,
        #[serde(default, alias = "tag")]
        color: Tag,
    },
}

// --- Converter Implementation ---

impl IntoSteps for RawSteps {
    fn into_steps(self) -> Result<Vec<Step>, ImportError> {
        Ok(self
            .0
            .into_iter()
            .map(|raw_step| {
                let mut step = Step::new(raw_step.name);
                if let Some(id) = raw_step.id {
                    step.id = id;
                }
                step.values = raw_step
                    .values
                    .into_iter()
                    .map(|raw_value| match raw_value {
                        RawValue::Plain(value) => StepValue::new(value, Tag::default()),
                        RawValue::Tagged { id, value, color } => {
                            let mut step_value = StepValue::new(value, color);
                            if let Some(id) = id {
                                step_value.id = id;
                            }
                            step_value
                        }
                    })
                    .collect();
                step
            })
            .collect())
    }
}

/// Pairwise test case generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log engine internals (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate pairwise cases from a steps JSON file
    Generate {
        /// Path to a JSON array of steps
        steps_path: String,
        #[command(flatten)]
        options: GenerateOptions,
        /// Write the results as CSV to this path
        #[arg(long)]
        csv: Option<String>,
        /// Write steps and results as a JSON document to this path
        #[arg(long)]
        json: Option<String>,
        /// Only print the summary, not the table
        #[arg(short, long)]
        quiet: bool,
    },
    /// Load a previously exported JSON document and show its cases
    Import {
        /// Path to the JSON document
        document_path: String,
        /// Re-export the loaded results as CSV to this path
        #[arg(long)]
        csv: Option<String>,
    },
    /// Enter steps and values at the prompt, then generate
    #[command(alias = "human")]
    Interactive {
        #[command(flatten)]
        options: GenerateOptions,
    },
}

#[derive(clap::Args, Debug, Clone, Copy)]
struct GenerateOptions {
    /// Maximum number of cases to select
    #[arg(long, default_value_t = kumiawase::selector::DEFAULT_CAP)]
    cap: usize,
    /// Refuse inputs whose cross-product exceeds this many assignments
    #[arg(long)]
    limit: Option<u64>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Generate {
            steps_path,
            options,
            csv,
            json,
            quiet,
        } => {
            let steps = load_steps(&steps_path);
            run_generation(steps, options, csv, json, quiet);
        }
        Command::Import { document_path, csv } => run_import(&document_path, csv),
        Command::Interactive { options } => {
            let steps = prompt_for_steps();
            run_generation(steps, options, None, None, false);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_steps(path: &str) -> Vec<Step> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read steps file '{}': {}", path, e)));
    let raw: RawSteps = serde_json::from_str(&content)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse steps JSON: {}", e)));
    raw.into_steps()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert steps: {}", e)))
}

fn run_generation(
    steps: Vec<Step>,
    options: GenerateOptions,
    csv_path: Option<String>,
    json_path: Option<String>,
    quiet: bool,
) {
    let start = Instant::now();

    let mut builder = Generator::builder(steps.clone()).with_cap(options.cap);
    if let Some(limit) = options.limit {
        builder = builder.with_assignment_limit(u128::from(limit));
    }
    let generation = builder
        .build()
        .generate()
        .unwrap_or_else(|e| exit_with_error(&format!("Generation failed: {}", e)));
    let duration = start.elapsed();

    if !quiet {
        println!("\n{}", TableFormatter::format(&steps, &generation.results));
    }

    let report = &generation.report;
    println!("\n--- Generation Summary ---");
    println!("Steps:                {}", steps.len());
    println!("Total Assignments:    {}", report.total_assignments);
    println!("Examined:             {}", report.assignments_examined);
    println!("Selected Cases:       {}", generation.results.len());
    println!(
        "Pairs Covered:        {}/{} ({:.1}%)",
        report.covered_pairs(),
        report.possible_pairs,
        report.coverage_ratio() * 100.0
    );
    if report.cap_reached && report.is_incomplete() {
        println!("Note: the cap of {} cases was reached before full coverage.", options.cap);
    }
    println!("Generation Time:      {:?}", duration);

    if let Some(path) = csv_path {
        write_csv(&path, &steps, &generation.results)
            .unwrap_or_else(|e| exit_with_error(&format!("CSV export failed: {}", e)));
        println!("Saved CSV to '{}'", path);
    }
    if let Some(path) = json_path {
        PairwiseDocument::new(steps, generation.results)
            .save(&path)
            .unwrap_or_else(|e| exit_with_error(&format!("JSON export failed: {}", e)));
        println!("Saved document to '{}'", path);
    }
}

fn run_import(document_path: &str, csv_path: Option<String>) {
    let document = PairwiseDocument::from_file(document_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Import failed: {}", e)));
    let session = Session::from_document(document);

    println!("\n{}", TableFormatter::format(session.steps(), session.results()));
    println!(
        "\nLoaded {} step(s) and {} case(s).",
        session.steps().len(),
        session.results().len()
    );

    if let Some(path) = csv_path {
        write_csv(&path, session.steps(), session.results())
            .unwrap_or_else(|e| exit_with_error(&format!("CSV export failed: {}", e)));
        println!("Saved CSV to '{}'", path);
    }
}

/// Prompts for step names and their values until an empty step name is entered.
fn prompt_for_steps() -> Vec<Step> {
    println!("--- Kumiawase Interactive Mode ---");
    println!("Enter an empty step name to finish.");
    println!("Values are comma separated; suffix a value with :g, :y or :r to tag it.");

    let mut steps = Vec::new();
    loop {
        let name = prompt_for_input(&format!("Step {} name", steps.len() + 1), None);
        if name.is_empty() {
            break;
        }
        let values = prompt_for_input(&format!("Values for '{}'", name), Some(""));
        let step = values
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .fold(Step::new(name), |step, raw| {
                let (value, tag) = parse_tagged_value(raw);
                step.with_value(value, tag)
            });
        steps.push(step);
    }

    if steps.is_empty() {
        exit_with_error("At least one step is required.");
    }
    steps
}

fn parse_tagged_value(raw: &str) -> (&str, Tag) {
    match raw.rsplit_once(':') {
        Some((value, "g")) => (value, Tag::Green),
        Some((value, "y")) => (value, Tag::Yellow),
        Some((value, "r")) => (value, Tag::Red),
        _ => (raw, Tag::default()),
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default
        .filter(|d| !d.is_empty())
        .map_or(String::new(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to flush stdout: {}", e));
    }

    if let Err(e) = io::stdin().read_line(&mut line) {
        exit_with_error(&format!("Failed to read line: {}", e));
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
