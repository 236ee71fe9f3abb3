use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::Level;

use brianmodel::{
    factory::Factory,
    model::{export, Model},
    Map,
};

#[derive(Parser)]
#[clap(name = "brianmc")]
#[clap(version, about = "Generate Brian equations from neuron parameter files")]
struct Cli {
    /// Log more, repeat for even more
    #[clap(short, long, parse(from_occurrences))]
    verbose: usize,
    #[clap(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Render the equations of all (or one) neuron(s)
    Equations {
        /// Model parameter file
        model: PathBuf,
        /// Only this neuron
        #[clap(short, long)]
        neuron: Option<String>,
        /// Print a JSON object name -> equations
        #[clap(long)]
        json: bool,
        /// Write one <neuron>.eqs per neuron into this directory
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
    /// Build the model and list currents and state variables
    Check {
        /// Model parameter file
        model: PathBuf,
    },
    /// List known current classes
    Currents,
}

fn level(verbose: usize) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn equations(
    model: &Path,
    neuron: Option<&str>,
    json: bool,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let mut eqs = Model::from_file(model)?.to_equations();
    if let Some(name) = neuron {
        let eq = eqs
            .remove(name)
            .ok_or_else(|| anyhow::anyhow!("No neuron '{}' in {:?}", name, model))?;
        eqs = Map::from([(name.to_string(), eq)]);
    }
    if let Some(dir) = output {
        export(&eqs, dir)?;
    } else if json {
        println!("{}", serde_json::to_string_pretty(&eqs)?);
    } else {
        for (name, eq) in &eqs {
            println!("# {}\n{}\n", name, eq);
        }
    }
    Ok(())
}

fn check(model: &Path) -> anyhow::Result<()> {
    let model = Model::from_file(model)?;
    for (name, neuron) in model.neurons() {
        let clamp = if neuron.is_clamped() { " (clamped)" } else { "" };
        println!("{}{}: conductance {}", name, clamp, neuron.conductance());
        for (current, states) in neuron.state_variables()? {
            println!("  {} [{}]", current, states.join(", "));
        }
        neuron.check_duplicates(&neuron.equations().join("\n"))?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(level(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    match &cli.cmd {
        Cmd::Equations {
            model,
            neuron,
            json,
            output,
        } => equations(model, neuron.as_deref(), *json, output.as_deref())?,
        Cmd::Check { model } => check(model)?,
        Cmd::Currents => {
            for class in Factory::default().classes() {
                println!("{}", class);
            }
        }
    }
    Ok(())
}
