//! Game configuration with documented constants
//!
//! All timing and layout numbers are collected here with explanations of
//! their purpose. Values can be overridden from a TOML file; see
//! [`ParlorConfig::from_toml_str`].

use serde::Deserialize;

/// Configuration for the game drivers
///
/// These values have been tuned for a relaxed casual pace. Changing them
/// affects how quickly hints appear and how patient the idle timeout is.
#[derive(Debug, Clone)]
pub struct ParlorConfig {
    // === TIMING ===
    /// Milliseconds of player inactivity before a running game ends
    ///
    /// Reset by every input event (keys, mouse, resize). When it expires
    /// the game reports an idle timeout instead of waiting forever on an
    /// abandoned terminal.
    pub idle_timeout_ms: u64,

    /// Milliseconds between automatic scramble hints
    ///
    /// Each expiry reveals one more letter of the answer, then the
    /// countdown restarts itself. Submitting a guess also restarts it,
    /// so an active player sees fewer hints.
    pub hint_interval_ms: u64,

    /// Milliseconds between input polls in the game loops
    ///
    /// Also bounds how late a countdown can fire. 125ms keeps the games
    /// responsive without spinning the CPU.
    pub poll_interval_ms: u64,

    // === DIALOG ===
    /// Column at which the description dialog wraps its text
    ///
    /// Lines break at the last space at or before this column; a single
    /// word longer than the width is hard-broken.
    pub wrap_width: usize,

    // === IMAGES ===
    /// Maximum image width in terminal cells
    ///
    /// One cell is one pixel column. Images wider than this are
    /// downscaled before display.
    pub image_cols: u16,

    /// Maximum image height in text rows
    ///
    /// Half-block rendering packs two pixel rows into each text row, so
    /// the pixel budget is twice this value.
    pub image_rows: u16,

    // === PUZZLE BOARDS ===
    /// Tile grids a puzzle round may be cut into, as (rows, cols)
    ///
    /// One layout is picked at random per round. More tiles means a
    /// longer round.
    pub tile_layouts: Vec<(usize, usize)>,
}

impl Default for ParlorConfig {
    fn default() -> Self {
        Self {
            // Timing (idle >> hint >> poll)
            idle_timeout_ms: 60_000,
            hint_interval_ms: 5_000,
            poll_interval_ms: 125,

            // Dialog
            wrap_width: 90,

            // Images
            image_cols: 64,
            image_rows: 22,

            // Boards
            tile_layouts: vec![(3, 4), (4, 4), (4, 6)],
        }
    }
}

/// Optional overrides, deserialized from a TOML settings file
///
/// Absent keys keep their default values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    pub idle_timeout_ms: Option<u64>,
    pub hint_interval_ms: Option<u64>,
    pub poll_interval_ms: Option<u64>,
    pub wrap_width: Option<usize>,
    pub image_cols: Option<u16>,
    pub image_rows: Option<u16>,
    pub tile_layouts: Option<Vec<(usize, usize)>>,
}

impl ParlorConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with the overrides from a TOML document applied on top
    pub fn from_toml_str(toml_str: &str) -> Result<Self, String> {
        let overrides: ConfigOverrides =
            toml::from_str(toml_str).map_err(|e| format!("invalid settings TOML: {}", e))?;
        Ok(Self::default().with_overrides(overrides))
    }

    /// Apply a set of overrides, keeping defaults for absent keys
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(v) = overrides.idle_timeout_ms {
            self.idle_timeout_ms = v;
        }
        if let Some(v) = overrides.hint_interval_ms {
            self.hint_interval_ms = v;
        }
        if let Some(v) = overrides.poll_interval_ms {
            self.poll_interval_ms = v;
        }
        if let Some(v) = overrides.wrap_width {
            self.wrap_width = v;
        }
        if let Some(v) = overrides.image_cols {
            self.image_cols = v;
        }
        if let Some(v) = overrides.image_rows {
            self.image_rows = v;
        }
        if let Some(v) = overrides.tile_layouts {
            self.tile_layouts = v;
        }
        self
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.poll_interval_ms == 0 {
            return Err("poll_interval_ms must be positive".into());
        }

        // Countdowns are checked from the poll loop, so they must outlast it
        if self.hint_interval_ms <= self.poll_interval_ms {
            return Err(format!(
                "hint_interval_ms ({}) should be > poll_interval_ms ({})",
                self.hint_interval_ms, self.poll_interval_ms
            ));
        }
        if self.idle_timeout_ms <= self.hint_interval_ms {
            return Err(format!(
                "idle_timeout_ms ({}) should be > hint_interval_ms ({})",
                self.idle_timeout_ms, self.hint_interval_ms
            ));
        }

        if self.wrap_width < 20 {
            return Err(format!(
                "wrap_width ({}) should be at least 20 columns",
                self.wrap_width
            ));
        }

        if self.image_cols < 4 || self.image_rows < 2 {
            return Err("image cell budget is too small to draw anything".into());
        }

        if self.tile_layouts.is_empty() {
            return Err("tile_layouts must name at least one layout".into());
        }
        for &(rows, cols) in &self.tile_layouts {
            if rows == 0 || cols == 0 {
                return Err(format!("tile layout {}x{} has an empty axis", rows, cols));
            }
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<ParlorConfig> = OnceLock::new();

/// Get the global config (initializes with defaults if not set)
pub fn config() -> &'static ParlorConfig {
    CONFIG.get_or_init(ParlorConfig::default)
}

/// Set the global config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: ParlorConfig) -> Result<(), ParlorConfig> {
    CONFIG.set(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(ParlorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_override_application() {
        let config = ParlorConfig::from_toml_str(
            r#"
            hint_interval_ms = 8000
            wrap_width = 60
            tile_layouts = [[2, 3]]
            "#,
        )
        .unwrap();

        assert_eq!(config.hint_interval_ms, 8_000);
        assert_eq!(config.wrap_width, 60);
        assert_eq!(config.tile_layouts, vec![(2, 3)]);
        // Untouched keys keep defaults
        assert_eq!(config.poll_interval_ms, ParlorConfig::default().poll_interval_ms);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(ParlorConfig::from_toml_str("frobnicate = 3").is_err());
    }

    #[test]
    fn test_timer_ordering_enforced() {
        let mut config = ParlorConfig::default();
        config.hint_interval_ms = config.idle_timeout_ms;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_layout_rejected() {
        let mut config = ParlorConfig::default();
        config.tile_layouts = vec![(0, 4)];
        assert!(config.validate().is_err());

        config.tile_layouts.clear();
        assert!(config.validate().is_err());
    }
}
