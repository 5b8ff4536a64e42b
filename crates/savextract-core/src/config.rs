//! Pipeline configuration.

use std::path::PathBuf;

/// File name offzip gives the save payload when unpacking a console save.
pub const DEFAULT_INTERMEDIATE_NAME: &str = "0000000c.snf";

/// Game folder under the user's Documents directory.
pub const DEFAULT_GAME_DIR: &str = "The Witcher 3";

/// Save folder inside the game folder.
pub const DEFAULT_SAVES_DIR: &str = "gamesaves";

/// Which optional behaviors a run applies.
///
/// Defaults enable everything, matching the most complete behavior of the
/// tool: flag-driven destination, transformed names, companion image copy.
///
/// # Examples
///
/// ```
/// use savextract_core::PipelinePolicy;
///
/// let policy = PipelinePolicy {
///     copy_companion_image: false,
///     ..Default::default()
/// };
/// assert!(policy.transform_names);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelinePolicy {
    /// Flatten the archive name (`Manual.` → `ManualSave_`, `.` → `_`).
    pub transform_names: bool,

    /// Copy a sibling `.png` next to the relocated save.
    pub copy_companion_image: bool,

    /// Let the "use default save directory" flag override the destination.
    pub allow_docs_override: bool,
}

impl Default for PipelinePolicy {
    fn default() -> Self {
        Self {
            transform_names: true,
            copy_companion_image: true,
            allow_docs_override: true,
        }
    }
}

/// Configuration for a pipeline run.
///
/// # Examples
///
/// ```
/// use savextract_core::PipelineConfig;
///
/// let config = PipelineConfig::default();
/// assert_eq!(config.intermediate_name, "0000000c.snf");
/// assert_eq!(config.game_dir, "The Witcher 3");
/// ```
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Optional behaviors.
    pub policy: PipelinePolicy,

    /// Name of the entry the tool is expected to produce.
    pub intermediate_name: String,

    /// Game folder under `Documents`.
    pub game_dir: String,

    /// Save folder under the game folder.
    pub saves_dir: String,

    /// Home directory to use instead of the platform lookup.
    pub home_dir: Option<PathBuf>,

    /// Prefix for the scratch directory name.
    pub scratch_prefix: String,
}

impl Default for PipelineConfig {
    /// Default values:
    /// - `policy`: everything enabled
    /// - `intermediate_name`: `0000000c.snf`
    /// - `game_dir`: `The Witcher 3`
    /// - `saves_dir`: `gamesaves`
    /// - `home_dir`: `None` (platform lookup)
    /// - `scratch_prefix`: `savextract-`
    fn default() -> Self {
        Self {
            policy: PipelinePolicy::default(),
            intermediate_name: DEFAULT_INTERMEDIATE_NAME.to_string(),
            game_dir: DEFAULT_GAME_DIR.to_string(),
            saves_dir: DEFAULT_SAVES_DIR.to_string(),
            home_dir: None,
            scratch_prefix: "savextract-".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Returns the home directory, preferring the configured override.
    #[must_use]
    pub fn resolve_home(&self) -> Option<PathBuf> {
        self.home_dir.clone().or_else(dirs::home_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_enables_everything() {
        let policy = PipelinePolicy::default();
        assert!(policy.transform_names);
        assert!(policy.copy_companion_image);
        assert!(policy.allow_docs_override);
    }

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.intermediate_name, DEFAULT_INTERMEDIATE_NAME);
        assert_eq!(config.saves_dir, "gamesaves");
        assert!(config.home_dir.is_none());
    }

    #[test]
    fn test_home_override_wins() {
        let config = PipelineConfig {
            home_dir: Some(PathBuf::from("/profiles/geralt")),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_home(),
            Some(PathBuf::from("/profiles/geralt"))
        );
    }
}
