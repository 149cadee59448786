use crate::config::{FailAt, ScoringTables};
use crate::core::session::{BilingualExposure, FirmSize, HiringPressure, Region, Selections};
use serde::Serialize;
use std::fmt;

pub const BASE_SCORE: f64 = 50.0;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Low,
    Moderate,
    Elevated,
    Structural,
}

impl Tier {
    // boundary values belong to the upper tier: exactly 40.0 is Moderate.
    pub fn from_score(score: f64) -> Self {
        if score < 40.0 {
            Self::Low
        } else if score < 60.0 {
            Self::Moderate
        } else if score < 80.0 {
            Self::Elevated
        } else {
            Self::Structural
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::Elevated => "elevated",
            Self::Structural => "structural",
        }
    }

    pub fn meets_fail_at(self, fail_at: FailAt) -> bool {
        match fail_at {
            FailAt::None => false,
            FailAt::Moderate => matches!(self, Self::Moderate | Self::Elevated | Self::Structural),
            FailAt::Elevated => matches!(self, Self::Elevated | Self::Structural),
            FailAt::Structural => matches!(self, Self::Structural),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Indicators {
    pub bilingual_pressure: f64,
    pub scarcity_exposure: f64,
    pub ai_leverage: f64,
    pub eor_feasibility: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskAssessment {
    pub score: f64,
    pub tier: Tier,
    pub indicators: Indicators,
}

// callers reach this through `SessionInput::require_all`, so a `Selections`
// always carries all four answers.
pub fn assess(selections: &Selections, tables: &ScoringTables) -> RiskAssessment {
    let raw = BASE_SCORE
        * tables.firm_size.factor(selections.firm_size)
        * tables.bilingual_exposure.factor(selections.bilingual_exposure)
        * tables.region.factor(selections.region)
        * tables.hiring_pressure.factor(selections.hiring_pressure);

    let score = clamp_score(raw);

    RiskAssessment {
        score,
        tier: Tier::from_score(score),
        indicators: derive_indicators(score, selections),
    }
}

fn derive_indicators(score: f64, selections: &Selections) -> Indicators {
    let brussels_bonus = if selections.region == Region::Brussels {
        15.0
    } else {
        0.0
    };
    let large_firm_bonus = if selections.firm_size == FirmSize::Large {
        20.0
    } else {
        0.0
    };
    let eor_base = if selections.bilingual_exposure == BilingualExposure::High {
        85.0
    } else {
        60.0
    };
    let eor_push = if selections.hiring_pressure == HiringPressure::Aggressive {
        15.0
    } else {
        0.0
    };

    Indicators {
        bilingual_pressure: clamp_score(score * 1.1 + brussels_bonus),
        scarcity_exposure: clamp_score(score * 1.2),
        ai_leverage: clamp_score(100.0 - score * 0.3 + large_firm_bonus),
        eor_feasibility: clamp_score(eor_base + eor_push),
    }
}

fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;
    use proptest::prelude::*;

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
    fn all_neutral_inputs_score_fifty() {
        let assessment = assess(
            &selections(
                FirmSize::Medium,
                BilingualExposure::Medium,
                Region::Other,
                HiringPressure::Moderate,
            ),
            &ScoringTables::default(),
        );

        assert_eq!(assessment.score, 50.0);
        assert_eq!(assessment.tier, Tier::Moderate);
        // indicator transforms multiply floats, so compare with a tolerance
        assert!((assessment.indicators.bilingual_pressure - 55.0).abs() < 1e-9);
        assert!((assessment.indicators.scarcity_exposure - 60.0).abs() < 1e-9);
        assert!((assessment.indicators.ai_leverage - 85.0).abs() < 1e-9);
        assert_eq!(assessment.indicators.eor_feasibility, 60.0);
    }

    #[test]
    fn worst_case_inputs_clamp_to_one_hundred() {
        // 50 * 1.2 * 1.4 * 1.3 * 1.3 = 141.96 before the clamp
        let assessment = assess(
            &selections(
                FirmSize::Large,
                BilingualExposure::High,
                Region::Brussels,
                HiringPressure::Aggressive,
            ),
            &ScoringTables::default(),
        );

        assert_eq!(assessment.score, 100.0);
        assert_eq!(assessment.tier, Tier::Structural);
        assert_eq!(assessment.indicators.bilingual_pressure, 100.0);
        assert_eq!(assessment.indicators.scarcity_exposure, 100.0);
        assert_eq!(assessment.indicators.ai_leverage, 90.0);
        assert_eq!(assessment.indicators.eor_feasibility, 100.0);
    }

    #[test]
    fn tier_thresholds_are_half_open() {
        assert_eq!(Tier::from_score(0.0), Tier::Low);
        assert_eq!(Tier::from_score(39.999), Tier::Low);
        assert_eq!(Tier::from_score(40.0), Tier::Moderate);
        assert_eq!(Tier::from_score(59.999), Tier::Moderate);
        assert_eq!(Tier::from_score(60.0), Tier::Elevated);
        assert_eq!(Tier::from_score(79.999), Tier::Elevated);
        assert_eq!(Tier::from_score(80.0), Tier::Structural);
        assert_eq!(Tier::from_score(100.0), Tier::Structural);
    }

    #[test]
    fn scoring_is_deterministic() {
        let tables = ScoringTables::default();
        let session = selections(
            FirmSize::Small,
            BilingualExposure::High,
            Region::Liege,
            HiringPressure::Stable,
        );

        let first = assess(&session, &tables);
        let second = assess(&session, &tables);
        assert_eq!(first, second);
    }

    #[test]
    fn every_combination_stays_bounded_under_default_tables() {
        let tables = ScoringTables::default();

        for &firm_size in FirmSize::value_variants() {
            for &bilingual_exposure in BilingualExposure::value_variants() {
                for &region in Region::value_variants() {
                    for &hiring_pressure in HiringPressure::value_variants() {
                        let assessment = assess(
                            &selections(firm_size, bilingual_exposure, region, hiring_pressure),
                            &tables,
                        );

                        for value in [
                            assessment.score,
                            assessment.indicators.bilingual_pressure,
                            assessment.indicators.scarcity_exposure,
                            assessment.indicators.ai_leverage,
                            assessment.indicators.eor_feasibility,
                        ] {
                            assert!(
                                (0.0..=100.0).contains(&value),
                                "out of bounds for {firm_size:?}/{bilingual_exposure:?}/{region:?}/{hiring_pressure:?}: {value}"
                            );
                        }
                    }
                }
            }
        }
    }

    proptest! {
        // tables are operator-supplied config, so hostile values must still
        // produce bounded output.
        #[test]
        fn arbitrary_tables_keep_outputs_bounded(
            firm in -2.0..4.0f64,
            bilingual in -2.0..4.0f64,
            region in -2.0..4.0f64,
            hiring in -2.0..4.0f64,
        ) {
            let mut tables = ScoringTables::default();
            tables.firm_size.large = firm;
            tables.bilingual_exposure.high = bilingual;
            tables.region.brussels = region;
            tables.hiring_pressure.aggressive = hiring;

            let assessment = assess(
                &selections(
                    FirmSize::Large,
                    BilingualExposure::High,
                    Region::Brussels,
                    HiringPressure::Aggressive,
                ),
                &tables,
            );

            for value in [
                assessment.score,
                assessment.indicators.bilingual_pressure,
                assessment.indicators.scarcity_exposure,
                assessment.indicators.ai_leverage,
                assessment.indicators.eor_feasibility,
            ] {
                prop_assert!((0.0..=100.0).contains(&value));
            }
        }
    }
}
