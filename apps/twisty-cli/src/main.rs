use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use twisty_input::{execute_with, format_sequence, inverse_sequence, parse};
use twisty_kernel::{Cube, Layout};
use twisty_render::{NetTextRenderer, Palette, Renderer};
use twisty_tools::CubeInspector;

#[derive(Parser)]
#[command(name = "twisty-cli", about = "Apply face turns to a 3x3x3 cube")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Apply a turn sequence such as "F R' U" and print the result
    Run {
        /// Turns in notation: F R U B L D, optionally followed by '
        #[arg(required = true)]
        sequence: Vec<String>,
        /// Start from the numbered 1..54 layout instead of a solved cube
        #[arg(short, long)]
        numbered: bool,
        /// Print the cube after every turn
        #[arg(short, long)]
        steps: bool,
        /// Plain text labels instead of colored blocks
        #[arg(long)]
        plain: bool,
        /// Print the final state as JSON
        #[arg(long, conflicts_with = "steps")]
        json: bool,
    },
    /// Check that replay and the inverse sequence reproduce the expected states
    Verify {
        #[arg(required = true)]
        sequence: Vec<String>,
        #[arg(short, long)]
        numbered: bool,
    },
}

fn layout(numbered: bool) -> Layout {
    if numbered {
        Layout::Numbered
    } else {
        Layout::Solved
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            println!("twisty-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", twisty_render::crate_info());
            println!("tools: {}", twisty_tools::crate_info());
            println!("{}", CubeInspector::summary(&Cube::new()));
        }
        Commands::Run {
            sequence,
            numbered,
            steps,
            plain,
            json,
        } => {
            let command = sequence.join(" ");
            let palette = if plain { Palette::Plain } else { Palette::Ansi };
            let renderer = NetTextRenderer::new(palette);
            let mut cube = Cube::with_layout(layout(numbered));

            tracing::info!(%command, numbered, "running command");
            let outcome = execute_with(&mut cube, &command, |index, turn, cube| {
                if steps {
                    println!("Step {}: {turn}", index + 1);
                    print!("{}", renderer.render(cube));
                }
            });

            if json {
                println!("{}", serde_json::to_string_pretty(&cube)?);
            } else {
                println!("Result of: {command}");
                print!("{}", renderer.render(&cube));
                println!("{}", CubeInspector::summary(&cube));
            }

            let applied = outcome.with_context(|| format!("failed to run {command:?}"))?;
            tracing::info!(applied, "command complete");
        }
        Commands::Verify { sequence, numbered } => {
            let command = sequence.join(" ");
            let turns = parse(&command)?;
            let layout = layout(numbered);
            let start = Cube::with_layout(layout);

            let mut cube = start.clone();
            for turn in &turns {
                cube.apply(*turn);
            }

            let replayed = Cube::replay(layout, cube.events());
            let replay_ok = replayed.faces() == cube.faces();

            let inverse = inverse_sequence(&turns);
            for turn in &inverse {
                cube.apply(*turn);
            }
            let inverse_ok = cube.faces() == start.faces();

            println!("Sequence: {}", format_sequence(&turns));
            println!("Inverse:  {}", format_sequence(&inverse));
            println!("Replay: {}", if replay_ok { "OK" } else { "MISMATCH" });
            println!(
                "Inverse restores start: {}",
                if inverse_ok { "OK" } else { "MISMATCH" }
            );

            if !(replay_ok && inverse_ok) {
                anyhow::bail!("verification failed for {command:?}");
            }
        }
    }

    Ok(())
}
