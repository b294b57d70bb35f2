use clap::Parser;
use kumiawase::step::{Step, Tag};
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;

/// A CLI tool to generate random step files for the Kumiawase generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_steps.json")]
    output: String,

    /// The number of steps to generate
    #[arg(short, long, default_value_t = 5)]
    steps: usize,

    /// The minimum number of values to generate for each step
    #[arg(long, default_value_t = 0)]
    min: usize,

    /// The maximum number of values to generate for each step
    #[arg(long, default_value_t = 4)]
    max: usize,

    /// Probability that a generated value is left blank
    #[arg(long, default_value_t = 0.0)]
    blank_chance: f64,
}

const STEP_POOL: [(&str, &[&str]); 8] = [
    ("Browser", &["Chrome", "Firefox", "Safari", "Edge", "Opera"]),
    ("OS", &["Windows", "macOS", "Linux", "Android", "iOS"]),
    ("Locale", &["en-US", "de-DE", "ja-JP", "fr-FR"]),
    ("Account", &["Guest", "Member", "Admin", "Suspended"]),
    ("Network", &["Wi-Fi", "4G", "Offline"]),
    ("Payment", &["Card", "Invoice", "Voucher", "Wallet"]),
    ("Screen", &["Phone", "Tablet", "Desktop", "Ultrawide"]),
    ("Theme", &["Light", "Dark", "High contrast"]),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) cannot be greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }
    if !(0.0..=1.0).contains(&cli.blank_chance) {
        eprintln!("Error: --blank-chance must be between 0 and 1");
        std::process::exit(1);
    }

    println!(
        "Generating {} step(s) (values per step: {} to {})...",
        cli.steps, cli.min, cli.max
    );

    let steps: Vec<Step> = (0..cli.steps)
        .map(|i| generate_step(&mut rng, i, cli.min, cli.max, cli.blank_chance))
        .collect();

    let combinations: u128 = steps
        .iter()
        .map(|s| s.effective_values().count().max(1) as u128)
        .fold(1, u128::saturating_mul);
    println!("-> Cross-product size: {}", combinations);

    let json_output = serde_json::to_string_pretty(&steps)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved steps to '{}'",
        cli.output
    );

    Ok(())
}

/// Picks a step from the pool, suffixing the name once the pool wraps around.
fn generate_step(
    rng: &mut ThreadRng,
    index: usize,
    min_values: usize,
    max_values: usize,
    blank_chance: f64,
) -> Step {
    let (base_name, pool) = STEP_POOL[index % STEP_POOL.len()];
    let round = index / STEP_POOL.len();
    let name = if round == 0 {
        base_name.to_string()
    } else {
        format!("{} {}", base_name, round + 1)
    };

    let count = rng.random_range(min_values..=max_values);
    let mut step = Step::new(name);
    for i in 0..count {
        let value = if rng.random_bool(blank_chance) {
            String::new()
        } else if i < pool.len() {
            pool[i].to_string()
        } else {
            format!("{} #{}", pool[i % pool.len()], i / pool.len() + 1)
        };
        step = step.with_value(value, random_tag(rng));
    }

    println!("-> Generated step '{}' with {} value(s).", step.name, count);
    step
}

fn random_tag(rng: &mut ThreadRng) -> Tag {
    match rng.random_range(0..3) {
        0 => Tag::Green,
        1 => Tag::Yellow,
        _ => Tag::Red,
    }
}
