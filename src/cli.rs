use crate::core::session::{BilingualExposure, FirmSize, HiringPressure, Region};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "hirescope",
    version,
    about = "Hiring-risk assessment for bilingual labor markets"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Assess(AssessArgs),
    Wizard(RunArgs),
    Heatmap(RunArgs),
    Init(InitArgs),
}

#[derive(Debug, Args, Clone)]
pub struct RunArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct AssessArgs {
    #[command(flatten)]
    pub run: RunArgs,
    // optional at the parser; missing selections surface as one validation message.
    #[arg(long, value_enum)]
    pub firm_size: Option<FirmSize>,
    #[arg(long, value_enum)]
    pub bilingual_exposure: Option<BilingualExposure>,
    #[arg(long, value_enum)]
    pub region: Option<Region>,
    #[arg(long, value_enum)]
    pub hiring_pressure: Option<HiringPressure>,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
}
