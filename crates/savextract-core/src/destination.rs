//! Destination directory resolution.

use crate::PipelineConfig;
use crate::PipelineError;
use crate::Result;
use crate::request::InvocationRequest;
use std::env;
use std::path::Path;
use std::path::PathBuf;

/// Builds `<home>/Documents/<game_dir>/<saves_dir>`.
///
/// # Examples
///
/// ```
/// use savextract_core::destination::docs_save_dir;
/// use std::path::Path;
///
/// let dir = docs_save_dir(Path::new("/home/geralt"), "The Witcher 3", "gamesaves");
/// assert_eq!(dir, Path::new("/home/geralt/Documents/The Witcher 3/gamesaves"));
/// ```
#[must_use]
pub fn docs_save_dir(home: &Path, game_dir: &str, saves_dir: &str) -> PathBuf {
    home.join("Documents").join(game_dir).join(saves_dir)
}

/// Resolves where the extracted save should go.
///
/// The docs flag beats any explicit destination. Without either, the current
/// directory is used. The directory is not checked for existence.
pub fn resolve_destination(request: &InvocationRequest, config: &PipelineConfig) -> Result<PathBuf> {
    if request.use_docs_dir() && config.policy.allow_docs_override {
        let home = config
            .resolve_home()
            .ok_or(PipelineError::HomeDirUnavailable)?;
        return Ok(docs_save_dir(&home, &config.game_dir, &config.saves_dir));
    }

    match request.destination() {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Ok(env::current_dir()?),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::PipelinePolicy;

    fn config_with_home(home: &str) -> PipelineConfig {
        PipelineConfig {
            home_dir: Some(PathBuf::from(home)),
            ..Default::default()
        }
    }

    #[test]
    fn test_explicit_destination_verbatim() {
        let request = InvocationRequest::new("a.sav", Some(PathBuf::from("D:/out")));
        let resolved = resolve_destination(&request, &config_with_home("/h")).unwrap();
        assert_eq!(resolved, PathBuf::from("D:/out"));
    }

    #[test]
    fn test_docs_flag_overrides_destination() {
        let request =
            InvocationRequest::new("a.sav", Some(PathBuf::from("D:/out"))).with_docs_dir(true);
        let resolved = resolve_destination(&request, &config_with_home("/h")).unwrap();
        assert_eq!(
            resolved,
            Path::new("/h")
                .join("Documents")
                .join("The Witcher 3")
                .join("gamesaves")
        );
    }

    #[test]
    fn test_docs_override_disabled_by_policy() {
        let request =
            InvocationRequest::new("a.sav", Some(PathBuf::from("out"))).with_docs_dir(true);
        let config = PipelineConfig {
            policy: PipelinePolicy {
                allow_docs_override: false,
                ..Default::default()
            },
            ..config_with_home("/h")
        };
        assert_eq!(
            resolve_destination(&request, &config).unwrap(),
            PathBuf::from("out")
        );
    }

    #[test]
    fn test_missing_destination_uses_current_dir() {
        let request = InvocationRequest::new("a.sav", None);
        let resolved = resolve_destination(&request, &config_with_home("/h")).unwrap();
        assert_eq!(resolved, env::current_dir().unwrap());
    }

    #[test]
    fn test_custom_game_dir() {
        let config = PipelineConfig {
            game_dir: "Other Game".into(),
            saves_dir: "saves".into(),
            ..config_with_home("/h")
        };
        let request = InvocationRequest::new("a.sav", None).with_docs_dir(true);
        assert!(
            resolve_destination(&request, &config)
                .unwrap()
                .ends_with("Documents/Other Game/saves")
        );
    }
}
