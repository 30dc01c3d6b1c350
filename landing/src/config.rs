//! Site configuration embedded from `site.toml`.
//!
//! Every table is optional. A document that fails to parse or validate is
//! reported once and the page runs on the built-in defaults.

use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use zephyr_choreo::ChoreoError;
use zephyr_choreo::timing::{CounterTiming, LoaderTiming, RotationTiming};

const EMBEDDED: &str = include_str!("../site.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site.toml is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid timing: {0}")]
    Timing(#[from] ChoreoError),

    #[error("unknown log level {0:?}")]
    LogLevel(String),
}

/// Everything tunable about the page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub telemetry: TelemetryConfig,
    pub loader: LoaderTiming,
    pub tabs: RotationTiming,
    pub carousel: RotationTiming,
    pub counter: CounterTiming,
    pub marquee: MarqueeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            telemetry: TelemetryConfig::default(),
            loader: LoaderTiming::default(),
            tabs: RotationTiming::tabs(),
            carousel: RotationTiming::carousel(),
            counter: CounterTiming::default(),
            marquee: MarqueeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// The document compiled into the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml(EMBEDDED)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.telemetry.level_filter()?;
        self.loader.validate()?;
        self.tabs.validate("tabs.period_ms")?;
        self.carousel.validate("carousel.period_ms")?;
        self.counter.validate()?;
        self.marquee.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TelemetryConfig {
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl TelemetryConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.level.clone()))
    }
}

/// Logo strip scrolling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarqueeConfig {
    /// Seconds for one full loop.
    pub duration_s: u32,
    /// Horizontal travel per logo, in pixels.
    pub item_shift_px: u32,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            duration_s: 30,
            item_shift_px: 50,
        }
    }
}

impl MarqueeConfig {
    /// Distance the strip travels in one loop of `items` logos.
    pub fn travel_px(&self, items: usize) -> u32 {
        self.item_shift_px.saturating_mul(items as u32)
    }

    fn validate(&self) -> Result<(), ChoreoError> {
        if self.duration_s == 0 {
            return Err(ChoreoError::ZeroDuration {
                what: "marquee.duration_s",
            });
        }
        Ok(())
    }
}
