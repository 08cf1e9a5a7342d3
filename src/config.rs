//! Configuration discovery and effective settings resolution.
//!
//! Sastview reads `sastview.toml|yaml|yml` from the working directory (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config. The repository base reference is the only value persisted across
//! sessions; passing `--repo` saves it before rendering.
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Primary config file name; the YAML variants are honored on load only.
pub const CONFIG_FILE: &str = "sastview.toml";

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
/// Root configuration loaded from `sastview.toml|yaml`.
pub struct ViewerConfig {
    /// Repository base reference used to resolve source links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub root: PathBuf,
    /// Effective base reference; empty means links degrade to absent.
    pub repo: String,
}

/// Walk upward from `start` to detect the config root.
///
/// Stops when a `sastview.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join(CONFIG_FILE).exists()
            || cur.join("sastview.yaml").exists()
            || cur.join("sastview.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `ViewerConfig` from `sastview.toml` or `sastview.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<ViewerConfig> {
    let toml_path = root.join(CONFIG_FILE);
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: ViewerConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["sastview.yaml", "sastview.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: ViewerConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(start: &Path, cli_repo: Option<&str>) -> Effective {
    let root = detect_root(start);
    let cfg = load_config(&root).unwrap_or_default();
    let repo = cli_repo
        .map(|s| s.to_string())
        .or(cfg.repo)
        .unwrap_or_default();
    Effective { root, repo }
}

/// Persist the base reference when it differs from the stored value.
///
/// Returns the written path, or `None` when the stored value already
/// matches. Always writes the TOML form.
pub fn persist_repo(root: &Path, repo: &str) -> std::io::Result<Option<PathBuf>> {
    let current = load_config(root).unwrap_or_default();
    if current.repo.as_deref() == Some(repo) {
        return Ok(None);
    }
    let path = write_config(
        root,
        &ViewerConfig {
            repo: Some(repo.to_string()),
        },
    )?;
    Ok(Some(path))
}

/// Drop the persisted base reference.
pub fn clear_repo(root: &Path) -> std::io::Result<PathBuf> {
    write_config(root, &ViewerConfig { repo: None })
}

fn write_config(root: &Path, cfg: &ViewerConfig) -> std::io::Result<PathBuf> {
    let path = root.join(CONFIG_FILE);
    let body = toml::to_string_pretty(cfg)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    fs::write(&path, body)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("sastview.toml")).unwrap();
        writeln!(f, "{}", r#"repo = "https://gitlab.com/g/p/-/blob/main/""#).unwrap();

        // Resolve using explicit start to avoid global CWD races
        let eff = resolve_effective(root, None);
        assert_eq!(eff.root, root);
        assert_eq!(eff.repo, "https://gitlab.com/g/p/-/blob/main/");
    }

    #[test]
    fn test_load_yaml_and_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("sastview.yaml")).unwrap();
        writeln!(f, "repo: https://gitlab.com/g/p/").unwrap();

        let eff = resolve_effective(root, None);
        assert_eq!(eff.repo, "https://gitlab.com/g/p/");

        let empty = tempdir().unwrap();
        let eff = resolve_effective(empty.path(), None);
        assert_eq!(eff.repo, "");
    }

    #[test]
    fn test_cli_takes_precedence_over_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("sastview.toml"), "repo = \"https://a.example/\"\n").unwrap();

        let eff = resolve_effective(root, Some("https://b.example/"));
        assert_eq!(eff.repo, "https://b.example/");
    }

    #[test]
    fn test_persist_and_reload_round_trip() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let written = persist_repo(root, "https://gitlab.com/g/p/").unwrap();
        assert!(written.is_some());

        let cfg = load_config(root).unwrap();
        assert_eq!(cfg.repo.as_deref(), Some("https://gitlab.com/g/p/"));

        // Unchanged value is not rewritten
        let written = persist_repo(root, "https://gitlab.com/g/p/").unwrap();
        assert!(written.is_none());

        // A different value is
        let written = persist_repo(root, "https://gitlab.com/g/q/").unwrap();
        assert!(written.is_some());
        let cfg = load_config(root).unwrap();
        assert_eq!(cfg.repo.as_deref(), Some("https://gitlab.com/g/q/"));
    }

    #[test]
    fn test_clear_repo() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        persist_repo(root, "https://gitlab.com/g/p/").unwrap();
        clear_repo(root).unwrap();
        let cfg = load_config(root).unwrap();
        assert!(cfg.repo.is_none());
    }

    #[test]
    fn test_detect_root_walks_up_to_git() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join(".git")).unwrap();
        let nested = root.join("a/b");
        fs::create_dir_all(&nested).unwrap();
        assert_eq!(detect_root(&nested), root);
    }
}
