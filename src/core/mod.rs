pub mod interpret;
pub mod report;
pub mod score;
pub mod session;

use crate::config::Config;
use crate::core::report::{ConfigSummary, FinalReport};
use crate::core::session::SessionInput;
use anyhow::Result;

pub fn run_assessment(input: &SessionInput, cfg: &Config) -> Result<FinalReport> {
    let selections = input.require_all()?;
    let assessment = score::assess(&selections, &cfg.tables);
    let interpretation = interpret::interpret(&selections, &assessment);
    let exit = report::evaluate_exit(assessment.tier, cfg);

    Ok(FinalReport {
        score: assessment.score,
        tier: assessment.tier,
        indicators: assessment.indicators,
        interpretation,
        region: selections.region,
        heat: cfg.heatmap.entry(selections.region).clone(),
        config: ConfigSummary {
            fail_at: cfg.general.fail_at,
        },
        exit,
    })
}
