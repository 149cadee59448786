use crate::core::score::{RiskAssessment, Tier};
use crate::core::session::{BilingualExposure, FirmSize, HiringPressure, Region, Selections};

pub const MARKET_CONTEXT: &str = "Belgium's linguistic divide keeps its talent pools fragmented: \
roughly half of the vacancies in and around Brussels ask for working proficiency in both French \
and Dutch, while the national pool of genuinely bilingual professionals grows far slower than \
demand. Employer-of-record arrangements, cross-border commuters from France and the Netherlands, \
and AI-assisted screening have widened the options for firms that cannot win the local bidding \
war, but none of them removes the underlying scarcity.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub diagnostic: String,
    pub recommendations: Vec<&'static str>,
    pub market_context: &'static str,
}

impl Interpretation {
    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.diagnostic);
        out.push_str("\n\n");
        for (idx, recommendation) in self.recommendations.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", idx + 1, recommendation));
        }
        out.push('\n');
        out.push_str(self.market_context);
        out
    }
}

pub fn interpret(selections: &Selections, assessment: &RiskAssessment) -> Interpretation {
    Interpretation {
        diagnostic: diagnostic_for(selections, assessment.tier),
        recommendations: recommendations_for(selections, assessment.tier),
        market_context: MARKET_CONTEXT,
    }
}

fn diagnostic_for(selections: &Selections, tier: Tier) -> String {
    let firm = selections.firm_size.label();
    let region = selections.region.label();
    let bilingual = selections.bilingual_exposure.label();
    let hiring = selections.hiring_pressure.label();

    match tier {
        Tier::Low => format!(
            "A {firm} firm recruiting {region} with {bilingual} and {hiring} faces little \
             structural hiring risk; existing sourcing channels should keep roles filled."
        ),
        Tier::Moderate => format!(
            "A {firm} firm recruiting {region} with {bilingual} and {hiring} faces a manageable \
             but real hiring risk; lead times will stretch on bilingual and senior roles."
        ),
        Tier::Elevated => format!(
            "A {firm} firm recruiting {region} with {bilingual} and {hiring} is exposed well \
             above the market baseline; expect bidding wars on bilingual profiles and slipping \
             start dates."
        ),
        Tier::Structural => format!(
            "A {firm} firm recruiting {region} with {bilingual} and {hiring} faces structural \
             hiring risk: the local market cannot supply this demand profile at a sustainable \
             price."
        ),
    }
}

// tier-level advice first, then input-specific additions in a fixed order.
fn recommendations_for(selections: &Selections, tier: Tier) -> Vec<&'static str> {
    let mut recommendations: Vec<&'static str> = match tier {
        Tier::Low => vec![
            "keep current sourcing channels and revisit this assessment after the next planning cycle",
            "benchmark salary bands once a year to stay ahead of drift",
        ],
        Tier::Moderate => vec![
            "tighten time-to-offer below three weeks on bilingual roles",
            "build a passive-candidate pipeline before requisitions open",
            "benchmark salary bands against regional medians twice a year",
        ],
        Tier::Elevated => vec![
            "re-scope hard bilingual requirements to the tasks that genuinely need them",
            "open remote or cross-border sourcing before escalating salary offers",
            "shorten the interview loop to two rounds for scarce profiles",
        ],
        Tier::Structural => vec![
            "treat hiring capacity as a constraint on the growth plan, not as an HR backlog",
            "combine employer-of-record hiring abroad with AI-assisted internal mobility",
            "escalate compensation decisions for scarce profiles to leadership",
        ],
    };

    if selections.bilingual_exposure == BilingualExposure::High {
        recommendations.push(
            "budget an explicit salary premium for certified FR/NL bilinguals instead of \
             discovering it offer by offer",
        );
    }
    if selections.hiring_pressure == HiringPressure::Aggressive {
        recommendations.push(
            "stagger requisitions by quarter so simultaneous openings do not compete for the \
             same candidates",
        );
    }
    if selections.region == Region::Brussels {
        recommendations.push(
            "widen the search radius beyond Brussels-Capital; Flemish Brabant and Hainaut \
             commuters double the reachable pool",
        );
    }
    if selections.firm_size == FirmSize::Small {
        recommendations.push(
            "pool recruiting with peer firms or a sector federation to afford channels larger \
             firms use by default",
        );
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringTables;
    use crate::core::score;
    use clap::ValueEnum;

    fn selections(
        firm_size: FirmSize,
        bilingual_exposure: BilingualExposure,
        region: Region,
        hiring_pressure: HiringPressure,
    ) -> Selections {
        Selections {
            firm_size,
            bilingual_exposure,
            region,
            hiring_pressure,
        }
    }

    #[test]
    fn diagnostic_interpolates_all_four_labels() {
        let selections = selections(
            FirmSize::Large,
            BilingualExposure::High,
            Region::Brussels,
            HiringPressure::Aggressive,
        );
        let assessment = score::assess(&selections, &ScoringTables::default());
        let interpretation = interpret(&selections, &assessment);

        assert!(interpretation.diagnostic.contains("large (250+ employees)"));
        assert!(interpretation.diagnostic.contains("in Brussels-Capital"));
        assert!(interpretation.diagnostic.contains("high bilingual exposure"));
        assert!(interpretation.diagnostic.contains("aggressive hiring plans"));
    }

    #[test]
    fn market_context_is_constant_across_inputs() {
        let tables = ScoringTables::default();
        let quiet = selections(
            FirmSize::Small,
            BilingualExposure::Low,
            Region::Other,
            HiringPressure::Stable,
        );
        let tense = selections(
            FirmSize::Large,
            BilingualExposure::High,
            Region::Brussels,
            HiringPressure::Aggressive,
        );

        let a = interpret(&quiet, &score::assess(&quiet, &tables));
        let b = interpret(&tense, &score::assess(&tense, &tables));
        assert_eq!(a.market_context, b.market_context);
        assert_eq!(a.market_context, MARKET_CONTEXT);
    }

    #[test]
    fn every_combination_yields_nonempty_text() {
        let tables = ScoringTables::default();

        for &firm_size in FirmSize::value_variants() {
            for &bilingual_exposure in BilingualExposure::value_variants() {
                for &region in Region::value_variants() {
                    for &hiring_pressure in HiringPressure::value_variants() {
                        let sel =
                            selections(firm_size, bilingual_exposure, region, hiring_pressure);
                        let interpretation = interpret(&sel, &score::assess(&sel, &tables));

                        assert!(!interpretation.diagnostic.is_empty());
                        assert!(!interpretation.recommendations.is_empty());
                        assert!(!interpretation.market_context.is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn conditional_recommendations_follow_tier_advice() {
        let sel = selections(
            FirmSize::Small,
            BilingualExposure::High,
            Region::Brussels,
            HiringPressure::Aggressive,
        );
        let assessment = score::assess(&sel, &ScoringTables::default());
        let recommendations = interpret(&sel, &assessment).recommendations;

        let premium_pos = recommendations
            .iter()
            .position(|r| r.contains("salary premium"))
            .unwrap();
        let stagger_pos = recommendations
            .iter()
            .position(|r| r.contains("stagger requisitions"))
            .unwrap();
        let radius_pos = recommendations
            .iter()
            .position(|r| r.contains("search radius"))
            .unwrap();
        let pool_pos = recommendations
            .iter()
            .position(|r| r.contains("pool recruiting"))
            .unwrap();

        assert!(premium_pos < stagger_pos);
        assert!(stagger_pos < radius_pos);
        assert!(radius_pos < pool_pos);
    }

    #[test]
    fn render_plain_numbers_the_recommendations() {
        let sel = selections(
            FirmSize::Medium,
            BilingualExposure::Medium,
            Region::Other,
            HiringPressure::Moderate,
        );
        let assessment = score::assess(&sel, &ScoringTables::default());
        let rendered = interpret(&sel, &assessment).render_plain();

        assert!(rendered.contains("1. "));
        assert!(rendered.ends_with(MARKET_CONTEXT));
    }
}
