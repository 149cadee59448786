use crate::config::{Config, FailAt, HeatmapConfig, Intensity, RegionHeat};
use crate::core::interpret::Interpretation;
use crate::core::score::{Indicators, Tier};
use crate::core::session::Region;
use colored::Colorize;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct ExitStatus {
    pub ok: bool,
    pub reasons: Vec<String>,
}

impl ExitStatus {
    pub fn reason_line(&self) -> String {
        self.reasons.join("; ")
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSummary {
    pub fail_at: FailAt,
}

#[derive(Debug, Clone)]
pub struct FinalReport {
    pub score: f64,
    pub tier: Tier,
    pub indicators: Indicators,
    pub interpretation: Interpretation,
    pub region: Region,
    pub heat: RegionHeat,
    pub config: ConfigSummary,
    pub exit: ExitStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport {
    pub score: f64,
    pub tier: Tier,
    pub indicators: Indicators,
    pub interpretation_text: String,
    pub config: ConfigSummary,
}

impl From<&FinalReport> for JsonReport {
    fn from(report: &FinalReport) -> Self {
        Self {
            score: report.score,
            tier: report.tier,
            indicators: report.indicators,
            interpretation_text: report.interpretation.render_plain(),
            config: report.config.clone(),
        }
    }
}

pub fn evaluate_exit(tier: Tier, cfg: &Config) -> ExitStatus {
    let mut reasons = Vec::new();

    if tier.meets_fail_at(cfg.general.fail_at) {
        reasons.push(format!(
            "tier {} is at or above fail_at {}",
            tier, cfg.general.fail_at
        ));
    }

    ExitStatus {
        ok: reasons.is_empty(),
        reasons,
    }
}

fn tier_colored(tier: Tier) -> String {
    let text = tier.as_str().to_ascii_uppercase();
    match tier {
        Tier::Low => text.green().bold().to_string(),
        Tier::Moderate => text.yellow().bold().to_string(),
        Tier::Elevated => text.red().bold().to_string(),
        Tier::Structural => text.bright_red().bold().to_string(),
    }
}

fn intensity_colored(intensity: Intensity) -> String {
    match intensity {
        Intensity::Low => intensity.as_str().green().to_string(),
        Intensity::Moderate => intensity.as_str().yellow().to_string(),
        Intensity::High => intensity.as_str().red().to_string(),
        Intensity::Severe => intensity.as_str().bright_red().bold().to_string(),
    }
}

pub fn print_human(report: &FinalReport) {
    println!(
        "Hiring Risk Score: {:.1}/100 ({})",
        report.score,
        tier_colored(report.tier)
    );

    println!();
    println!("{}", report.interpretation.diagnostic);

    println!();
    println!("indicators");
    for (name, value) in [
        ("bilingual pressure", report.indicators.bilingual_pressure),
        ("scarcity exposure", report.indicators.scarcity_exposure),
        ("ai leverage", report.indicators.ai_leverage),
        ("eor feasibility", report.indicators.eor_feasibility),
    ] {
        println!("  {:<20} {:>5.1}/100", name, value);
    }

    println!();
    println!("recommendations");
    for recommendation in &report.interpretation.recommendations {
        println!("-> {}", recommendation);
    }

    println!();
    println!("market context");
    println!("{}", report.interpretation.market_context);

    println!();
    println!(
        "regional heat: {} [{}]",
        report.region.display_name(),
        intensity_colored(report.heat.intensity)
    );
    println!("{}", report.heat.summary);

    println!();
    if report.exit.ok {
        println!("exit: OK");
    } else {
        println!("exit: FAILED ({})", report.exit.reason_line());
    }
}

pub fn print_heatmap(heatmap: &HeatmapConfig) {
    println!("Regional hiring heat");

    for region in [Region::Brussels, Region::Antwerp, Region::Liege, Region::Other] {
        let entry = heatmap.entry(region);
        println!();
        println!(
            "{:<16} [{}]",
            region.display_name(),
            intensity_colored(entry.intensity)
        );
        println!("  {}", entry.summary);
    }
}
