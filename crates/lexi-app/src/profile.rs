use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use lexi_config::Config;
use serde::{Deserialize, Serialize};

/// Config shipped next to the binary's working directory
const REPO_DEFAULT_CONFIG: &str = "config.json";

fn lexi_root() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lexi"))
}

pub fn profiles_dir() -> Option<PathBuf> {
    lexi_root().map(|root| root.join("profiles"))
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse profile {}", path.display()))?;
    Ok(profile.value)
}

/// Resolve the config for a run.
///
/// An explicit path must exist. Otherwise the named profile is tried, then
/// `main`, then `config.json` in the working directory, then built-in defaults.
pub fn load_config(explicit: Option<&Path>, profile: &str) -> anyhow::Result<Config> {
    load_config_from(
        explicit,
        profiles_dir().as_deref(),
        profile,
        Path::new(REPO_DEFAULT_CONFIG),
    )
}

fn load_config_from(
    explicit: Option<&Path>,
    profiles: Option<&Path>,
    profile: &str,
    repo_default: &Path,
) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        tracing::info!("Loading config from {}", path.display());
        return Ok(Config::from_file(path)?);
    }

    if let Some(dir) = profiles {
        let profile_file = dir.join(format!("{profile}.json"));
        if profile_file.exists() {
            tracing::info!("Loading profile {profile}");
            return read_profile(&profile_file);
        }

        let main_file = dir.join("main.json");
        if profile != "main" && main_file.exists() {
            tracing::warn!("Profile {profile} not found, falling back to main profile");
            return read_profile(&main_file);
        }
    }

    if repo_default.exists() {
        tracing::warn!("No profile found, loading {}", repo_default.display());
        return Ok(Config::from_file(repo_default)?);
    }

    tracing::warn!("No config found, using defaults");
    Ok(Config::default())
}

/// Write `config` as the named profile, returning its path
pub fn save_profile(name: &str, config: &Config) -> anyhow::Result<PathBuf> {
    let dir = profiles_dir().context("No user config directory on this platform")?;
    save_profile_in(&dir, name, config)
}

fn save_profile_in(dir: &Path, name: &str, config: &Config) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let profile = Profile {
        name: name.into(),
        value: config.clone(),
    };
    let file = dir.join(format!("{name}.json"));
    fs::write(&file, serde_json::to_string_pretty(&profile)?)?;
    tracing::info!("Saved profile {name} to {}", file.display());
    Ok(file)
}
