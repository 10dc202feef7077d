use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".gh-diff.toml";

/// Find and read the config file
///
/// Searches in order:
/// 1. `.gh-diff.toml` in the current working directory
/// 2. `.gh-diff.toml` in the home directory
/// 3. `config.toml` in the platform config directory
///
/// Returns the path and content of the first readable file, None otherwise.
/// Nothing is logged here; the caller reports the outcome once logging is set up.
pub fn load_config_file() -> Option<(PathBuf, String)> {
    let home = env::var_os("HOME").map(PathBuf::from);
    let config_path = crate::paths::app_config_path().ok();

    candidate_paths(home, config_path)
        .into_iter()
        .find_map(|path| {
            let content = std::fs::read_to_string(&path).ok()?;
            Some((path, content))
        })
}

fn candidate_paths(home: Option<PathBuf>, config_path: Option<PathBuf>) -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    paths.extend(home.map(|home| home.join(CONFIG_FILE)));
    paths.extend(config_path);
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_order() {
        let paths = candidate_paths(
            Some(PathBuf::from("/home/octocat")),
            Some(PathBuf::from("/etc/xdg/gh-diff/config.toml")),
        );

        assert_eq!(
            paths,
            vec![
                PathBuf::from(CONFIG_FILE),
                PathBuf::from("/home/octocat").join(CONFIG_FILE),
                PathBuf::from("/etc/xdg/gh-diff/config.toml"),
            ]
        );
    }

    #[test]
    fn test_lookup_without_home() {
        let paths = candidate_paths(None, Some(PathBuf::from("/cfg/config.toml")));
        assert_eq!(
            paths,
            vec![PathBuf::from(CONFIG_FILE), PathBuf::from("/cfg/config.toml")]
        );
    }
}
