mod cli;
mod config;
mod core;
mod wizard;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, RunArgs};
use core::session::SessionInput;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Assess(args) => {
            let input = SessionInput {
                firm_size: args.firm_size,
                bilingual_exposure: args.bilingual_exposure,
                region: args.region,
                hiring_pressure: args.hiring_pressure,
            };
            run_session(args.run, input)
        }
        Commands::Wizard(args) => {
            let input = wizard::collect()?;
            run_session(args, input)
        }
        Commands::Heatmap(args) => {
            let cwd = std::env::current_dir()?;
            let loaded = config::load_config(args.config.as_deref(), &cwd)?;

            if args.json || loaded.config.general.json {
                println!("{}", serde_json::to_string_pretty(&loaded.config.heatmap)?);
            } else {
                core::report::print_heatmap(&loaded.config.heatmap);
            }
            Ok(0)
        }
        Commands::Init(args) => {
            if args.config.is_some() {
                eprintln!(
                    "warning: --config is ignored by `hirescope init`; writing ./hirescope.toml"
                );
            }

            let path = std::env::current_dir()?.join("hirescope.toml");
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
    }
}

fn run_session(args: RunArgs, input: SessionInput) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(args.config.as_deref(), &cwd)?;
    let report = core::run_assessment(&input, &loaded.config)?;

    let output_json = args.json || loaded.config.general.json;
    if output_json {
        let json_report = core::report::JsonReport::from(&report);
        println!("{}", serde_json::to_string_pretty(&json_report)?);
    } else {
        core::report::print_human(&report);
    }

    if report.exit.ok { Ok(0) } else { Ok(1) }
}
