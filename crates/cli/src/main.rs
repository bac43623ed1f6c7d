#![deny(unsafe_code)]
//! CLI binary for the random color generator.
//!
//! Subcommands:
//! - `generate` — print N colors for a scheme and luminosity
//! - `recipe <json>` — render a reproducible recipe
//! - `hsv <h> <s> <v>` — convert one HSV triple to RGB
//! - `list` — print available schemes and luminosities
//!
//! Logging goes to stderr and is controlled by `RANDCOLOR_LOG`
//! (an `EnvFilter` directive, default `warn`).

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use randcolor_core::{hsv_to_rgb, Color, ColorScheme, Luminosity, RandomColor, Recipe, Xorshift64};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "randcolor", about = "Generate attractive random colors")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate colors for one scheme and luminosity.
    Generate {
        /// Color scheme (random, monochrome, red, orange, yellow, green, blue, purple, pink).
        #[arg(short, long, default_value = "random")]
        scheme: String,

        /// Luminosity (random, dark, light, bright).
        #[arg(short, long, default_value = "bright")]
        luminosity: String,

        /// Number of colors to generate.
        #[arg(short = 'n', long, default_value_t = 84, allow_negative_numbers = true)]
        count: i64,

        /// PRNG seed; omitted means a fresh seed from OS entropy.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Render a recipe given as a JSON string.
    Recipe {
        /// e.g. '{"seed": 42, "scheme": "blue", "luminosity": "dark", "count": 8}'
        json: String,
    },
    /// Convert hue (0-360), saturation and brightness (0-100) to RGB.
    Hsv {
        #[arg(allow_negative_numbers = true)]
        hue: i32,
        #[arg(allow_negative_numbers = true)]
        saturation: i32,
        #[arg(allow_negative_numbers = true)]
        brightness: i32,
    },
    /// List available schemes and luminosities.
    List,
}

fn print_colors(colors: &[Color], seed: u64, json: bool) -> Result<(), CliError> {
    if json {
        let info = serde_json::json!({
            "seed": seed,
            "colors": colors,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        for c in colors {
            println!("{c}");
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let schemes = ColorScheme::list_names();
            let luminosities = Luminosity::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "schemes": schemes,
                    "luminosities": luminosities,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Schemes:");
                println!("  {}", schemes.join(", "));
                println!("Luminosities:");
                println!("  {}", luminosities.join(", "));
            }
        }
        Command::Generate {
            scheme,
            luminosity,
            count,
            seed,
        } => {
            let scheme = ColorScheme::from_name(&scheme)?;
            let luminosity = Luminosity::from_name(&luminosity)?;
            let seed = seed.unwrap_or_else(Xorshift64::entropy_seed);
            let generator = RandomColor::new(seed);
            tracing::info!(seed, %scheme, %luminosity, count, "generating colors");

            let colors = generator.generate_many(scheme, luminosity, count)?;
            print_colors(&colors, seed, cli.json)?;
        }
        Command::Recipe { json } => {
            let recipe: Recipe = serde_json::from_str(&json)
                .map_err(|e| CliError::Input(format!("invalid recipe JSON: {e}")))?;
            let colors = recipe.render()?;
            print_colors(&colors, recipe.seed, cli.json)?;
        }
        Command::Hsv {
            hue,
            saturation,
            brightness,
        } => {
            let color = hsv_to_rgb(hue, saturation, brightness);
            if cli.json {
                let info = serde_json::json!({
                    "hex": color,
                    "rgba": color.to_rgba(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{color} rgb({}, {}, {})", color.r, color.g, color.b);
            }
        }
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("RANDCOLOR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
