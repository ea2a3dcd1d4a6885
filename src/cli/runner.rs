//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::SimulationConfig;
use crate::engine::{self, Outcome};
use crate::error::Result;
use crate::report;
use crate::source::RandomSampler;
use std::path::{Path, PathBuf};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Run {
                config,
                count,
                min_id,
                max_id,
                manual,
                output,
                format,
            } => self.run_simulation(RunArgs {
                config: config.as_deref(),
                count: *count,
                min_id: *min_id,
                max_id: *max_id,
                manual: manual.as_deref(),
                output: output.as_deref(),
                format: *format,
            }),
            Commands::Validate { config } => Self::validate(config),
            Commands::Serve { port } => crate::cli::serve(*port).await,
        }
    }

    /// Build the request config from file and flag overrides
    fn build_config(args: &RunArgs<'_>) -> Result<SimulationConfig> {
        let mut config = match args.config {
            Some(path) => SimulationConfig::from_file(path)?,
            None => SimulationConfig::default(),
        };

        if let Some(count) = args.count {
            config.count = count;
        }
        if let Some(min_id) = args.min_id {
            config.min_id = min_id;
        }
        if let Some(max_id) = args.max_id {
            config.max_id = max_id;
        }
        if let Some(ids_text) = args.manual {
            config.auto_generate = false;
            config.ids_text = ids_text.to_string();
        }

        Ok(config)
    }

    /// Execute one simulation and render the result
    fn run_simulation(&self, args: RunArgs<'_>) -> Result<()> {
        let config = Self::build_config(&args)?;
        let mut sampler = RandomSampler::new();
        let outcome = engine::run_simulation(&config, &mut sampler)?;

        match args.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            }
            OutputFormat::Pretty => match &outcome {
                Outcome::Waiting => {
                    println!("Waiting for IDs: pass --manual or enable automatic generation.");
                }
                Outcome::Completed(report) => {
                    if report.generated {
                        println!("Generated {} random IDs.", report.ids.len());
                        println!();
                    }
                    print!("{}", report::render_summary(report));
                    println!();
                    print!("{}", report::render_chart(&report.counts()));
                    println!();
                    print!("{}", report::render_table(report));
                }
            },
        }

        if let (Some(path), Some(report)) = (args.output, outcome.report()) {
            report::write_csv(&report.records, path)?;
            println!();
            println!("CSV written to {}", path.display());
        }

        Ok(())
    }

    /// Validate a request file and report the result
    fn validate(path: &PathBuf) -> Result<()> {
        let config = SimulationConfig::from_file(path)?;
        println!("OK: {} is a valid request file.", path.display());
        if config.auto_generate {
            println!(
                "  {} IDs from [{}, {}]",
                config.count, config.min_id, config.max_id
            );
        } else {
            println!("  manual input: \"{}\"", config.ids_text);
        }
        Ok(())
    }
}

/// Flattened arguments for the `run` command
struct RunArgs<'a> {
    config: Option<&'a Path>,
    count: Option<u32>,
    min_id: Option<i64>,
    max_id: Option<i64>,
    manual: Option<&'a str>,
    output: Option<&'a Path>,
    format: OutputFormat,
}
