use clap::ValueEnum;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum FirmSize {
    Small,
    Medium,
    Large,
}

impl FirmSize {
    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "small (under 50 employees)",
            Self::Medium => "mid-sized (50-249 employees)",
            Self::Large => "large (250+ employees)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum BilingualExposure {
    Low,
    Medium,
    High,
}

impl BilingualExposure {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low bilingual exposure",
            Self::Medium => "medium bilingual exposure",
            Self::High => "high bilingual exposure",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Region {
    Brussels,
    Antwerp,
    Liege,
    Other,
}

impl Region {
    // labels carry their own preposition so templates read naturally.
    pub fn label(self) -> &'static str {
        match self {
            Self::Brussels => "in Brussels-Capital",
            Self::Antwerp => "in Antwerp",
            Self::Liege => "in Liège",
            Self::Other => "outside the major hubs",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Brussels => "Brussels-Capital",
            Self::Antwerp => "Antwerp",
            Self::Liege => "Liège",
            Self::Other => "Other regions",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum HiringPressure {
    Stable,
    Moderate,
    Aggressive,
}

impl HiringPressure {
    pub fn label(self) -> &'static str {
        match self {
            Self::Stable => "stable hiring plans",
            Self::Moderate => "moderate hiring plans",
            Self::Aggressive => "aggressive hiring plans",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionInput {
    pub firm_size: Option<FirmSize>,
    pub bilingual_exposure: Option<BilingualExposure>,
    pub region: Option<Region>,
    pub hiring_pressure: Option<HiringPressure>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selections {
    pub firm_size: FirmSize,
    pub bilingual_exposure: BilingualExposure,
    pub region: Region,
    pub hiring_pressure: HiringPressure,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("missing required inputs: {}; all four selections must be set before scoring", .missing.join(", "))]
pub struct InvalidInput {
    pub missing: Vec<&'static str>,
}

impl SessionInput {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.firm_size.is_none() {
            missing.push("firm-size");
        }
        if self.bilingual_exposure.is_none() {
            missing.push("bilingual-exposure");
        }
        if self.region.is_none() {
            missing.push("region");
        }
        if self.hiring_pressure.is_none() {
            missing.push("hiring-pressure");
        }
        missing
    }

    pub fn require_all(&self) -> Result<Selections, InvalidInput> {
        match (
            self.firm_size,
            self.bilingual_exposure,
            self.region,
            self.hiring_pressure,
        ) {
            (Some(firm_size), Some(bilingual_exposure), Some(region), Some(hiring_pressure)) => {
                Ok(Selections {
                    firm_size,
                    bilingual_exposure,
                    region,
                    hiring_pressure,
                })
            }
            _ => Err(InvalidInput {
                missing: self.missing_fields(),
            }),
        }
    }
}
