//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use canvas::engine::ScreenKind;
use canvas::geom::Size;

pub const DEFAULT_SCREEN: ScreenKind = ScreenKind::Clock;
pub const DEFAULT_WIDTH: u32 = 1080;
pub const DEFAULT_HEIGHT: u32 = 2000;
pub const DEFAULT_FRAME_MS: u64 = 16;
pub const DEFAULT_RUN_SECS: u64 = 3;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown GALLERY_SCREEN: {0}")]
    UnknownScreen(String),
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("{var} must be greater than zero")]
    Zero { var: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    pub screen: ScreenKind,
    pub size: Size,
    /// Frame interval while something is animating.
    pub frame_ms: u64,
    /// How long the headless run lasts.
    pub run_secs: u64,
    /// Seed for every random placement. Random when unset.
    pub seed: Option<u64>,
    /// Print the last rendered display list as JSON.
    pub dump: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            screen: DEFAULT_SCREEN,
            size: Size::new(f64::from(DEFAULT_WIDTH), f64::from(DEFAULT_HEIGHT)),
            frame_ms: DEFAULT_FRAME_MS,
            run_secs: DEFAULT_RUN_SECS,
            seed: None,
            dump: false,
        }
    }
}

impl GalleryConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `GALLERY_SCREEN`: one of `arrow`, `clock` (default), `gender`,
    ///   `weight`, `grades`, `clicker`, `box`
    /// - `GALLERY_WIDTH` / `GALLERY_HEIGHT`: default 1080×2000
    /// - `GALLERY_FRAME_MS`: default 16
    /// - `GALLERY_RUN_SECS`: default 3
    /// - `GALLERY_SEED`: random when absent
    /// - `GALLERY_DUMP`: `1`/`true` to print the last frame
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for unparseable or zero values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`GalleryConfig::from_env`], reading variables through `var`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for unparseable or zero values.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let screen = match var("GALLERY_SCREEN") {
            Some(raw) => raw.parse::<ScreenKind>().map_err(|_| ConfigError::UnknownScreen(raw))?,
            None => DEFAULT_SCREEN,
        };
        let width = parse_positive(&var, "GALLERY_WIDTH", DEFAULT_WIDTH)?;
        let height = parse_positive(&var, "GALLERY_HEIGHT", DEFAULT_HEIGHT)?;
        let frame_ms = parse_positive(&var, "GALLERY_FRAME_MS", DEFAULT_FRAME_MS)?;
        let run_secs = parse_positive(&var, "GALLERY_RUN_SECS", DEFAULT_RUN_SECS)?;
        let seed = var("GALLERY_SEED").map(|raw| parse("GALLERY_SEED", &raw)).transpose()?;
        let dump = var("GALLERY_DUMP").is_some_and(|raw| parse_flag(&raw));

        Ok(Self {
            screen,
            size: Size::new(f64::from(width), f64::from(height)),
            frame_ms,
            run_secs,
            seed,
            dump,
        })
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid { var: key, value: raw.to_owned() })
}

fn parse_positive<T>(var: &impl Fn(&str) -> Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr + Default + PartialEq,
{
    let Some(raw) = var(key) else {
        return Ok(default);
    };
    let value = parse::<T>(key, &raw)?;
    if value == T::default() {
        return Err(ConfigError::Zero { var: key });
    }
    Ok(value)
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
