use crate::core::session::{BilingualExposure, FirmSize, HiringPressure, Region};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub tables: ScoringTables,
    pub heatmap: HeatmapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub fail_at: FailAt,
    pub json: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            fail_at: FailAt::Structural,
            json: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FailAt {
    None,
    Moderate,
    Elevated,
    #[default]
    Structural,
}

impl fmt::Display for FailAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Moderate => write!(f, "moderate"),
            Self::Elevated => write!(f, "elevated"),
            Self::Structural => write!(f, "structural"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringTables {
    pub firm_size: FirmSizeTable,
    pub bilingual_exposure: BilingualExposureTable,
    pub region: RegionTable,
    pub hiring_pressure: HiringPressureTable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FirmSizeTable {
    pub small: f64,
    pub medium: f64,
    pub large: f64,
}

impl Default for FirmSizeTable {
    fn default() -> Self {
        Self {
            small: 0.85,
            medium: 1.0,
            large: 1.2,
        }
    }
}

impl FirmSizeTable {
    pub fn factor(&self, size: FirmSize) -> f64 {
        match size {
            FirmSize::Small => self.small,
            FirmSize::Medium => self.medium,
            FirmSize::Large => self.large,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BilingualExposureTable {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Default for BilingualExposureTable {
    fn default() -> Self {
        Self {
            low: 0.8,
            medium: 1.0,
            high: 1.4,
        }
    }
}

impl BilingualExposureTable {
    pub fn factor(&self, exposure: BilingualExposure) -> f64 {
        match exposure {
            BilingualExposure::Low => self.low,
            BilingualExposure::Medium => self.medium,
            BilingualExposure::High => self.high,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionTable {
    pub brussels: f64,
    pub antwerp: f64,
    pub liege: f64,
    pub other: f64,
}

impl Default for RegionTable {
    fn default() -> Self {
        Self {
            brussels: 1.3,
            antwerp: 1.15,
            liege: 1.05,
            other: 1.0,
        }
    }
}

impl RegionTable {
    pub fn factor(&self, region: Region) -> f64 {
        match region {
            Region::Brussels => self.brussels,
            Region::Antwerp => self.antwerp,
            Region::Liege => self.liege,
            Region::Other => self.other,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HiringPressureTable {
    pub stable: f64,
    pub moderate: f64,
    pub aggressive: f64,
}

impl Default for HiringPressureTable {
    fn default() -> Self {
        Self {
            stable: 0.85,
            moderate: 1.0,
            aggressive: 1.3,
        }
    }
}

impl HiringPressureTable {
    pub fn factor(&self, pressure: HiringPressure) -> f64 {
        match pressure {
            HiringPressure::Stable => self.stable,
            HiringPressure::Moderate => self.moderate,
            HiringPressure::Aggressive => self.aggressive,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapConfig {
    pub brussels: RegionHeat,
    pub antwerp: RegionHeat,
    pub liege: RegionHeat,
    pub other: RegionHeat,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            brussels: RegionHeat {
                intensity: Intensity::Severe,
                summary: "acute FR/NL scarcity; EU institutions and the public sector absorb \
                          much of the bilingual pool"
                    .to_string(),
            },
            antwerp: RegionHeat {
                intensity: Intensity::High,
                summary: "port-driven demand keeps logistics and technical profiles tight; \
                          Dutch-dominant market with a premium on French"
                    .to_string(),
            },
            liege: RegionHeat {
                intensity: Intensity::Moderate,
                summary: "industrial reconversion keeps technical profiles scarce; \
                          French-dominant with limited Dutch supply"
                    .to_string(),
            },
            other: RegionHeat {
                intensity: Intensity::Low,
                summary: "national baseline; scarcity concentrated in specialist and \
                          bilingual niches"
                    .to_string(),
            },
        }
    }
}

impl HeatmapConfig {
    pub fn entry(&self, region: Region) -> &RegionHeat {
        match region {
            Region::Brussels => &self.brussels,
            Region::Antwerp => &self.antwerp,
            Region::Liege => &self.liege,
            Region::Other => &self.other,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionHeat {
    pub intensity: Intensity,
    pub summary: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Moderate,
    High,
    Severe,
}

impl Intensity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
            Self::Severe => "SEVERE",
        }
    }
}

pub fn load_config(cli_config_path: Option<&Path>, cwd: &Path) -> Result<LoadedConfig> {
    if let Some(path) = cli_config_path {
        if !path.exists() {
            bail!(
                "config file not found at {} (passed with --config)",
                path.display()
            );
        }

        return Ok(LoadedConfig {
            config: read_config(path)?,
        });
    }

    let local_path = cwd.join("hirescope.toml");
    if local_path.exists() {
        return Ok(LoadedConfig {
            config: read_config(&local_path)?,
        });
    }

    Ok(LoadedConfig {
        config: Config::default(),
    })
}

pub fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!(
            "refusing to overwrite existing config file: {}",
            path.display()
        );
    }

    let content = default_config_toml()?;
    fs::write(path, content).with_context(|| format!("failed writing {}", path.display()))?;
    Ok(())
}

pub fn default_config_toml() -> Result<String> {
    toml::to_string_pretty(&Config::default()).context("failed to serialize default config")
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed reading config file {}", path.display()))?;
    let config = toml::from_str::<Config>(&content)
        .with_context(|| format!("failed parsing config file {}", path.display()))?;
    Ok(config)
}
