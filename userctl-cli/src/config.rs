//! Environment-file configuration
//!
//! Connection settings are never compiled in. They come from flags or the
//! environment, optionally seeded from .env files:
//! 1. Variables already set in the environment (never overwritten)
//! 2. ./.env
//! 3. ~/.userctl/.env

use std::path::{Path, PathBuf};

use tracing::{debug, info};

/// The userctl config directory (~/.userctl)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".userctl"))
}

/// Candidate .env files in priority order.
fn candidate_files() -> Vec<PathBuf> {
    let mut files = vec![PathBuf::from(".env")];
    if let Some(dir) = config_dir() {
        files.push(dir.join(".env"));
    }
    files
}

/// Load the default .env files, returning the ones that were read.
///
/// Runs before tracing is initialized; pass the result to [`log_loaded`].
pub fn load_dotenv() -> Vec<PathBuf> {
    load_dotenv_from(&candidate_files())
}

/// Load each existing file in `paths`. Earlier files win over later ones
/// because dotenvy never overwrites a variable that is already set.
pub fn load_dotenv_from(paths: &[PathBuf]) -> Vec<PathBuf> {
    paths
        .iter()
        .filter(|path| path.is_file())
        .filter(|path| dotenvy::from_path(path).is_ok())
        .cloned()
        .collect()
}

/// Report which .env files contributed configuration.
pub fn log_loaded(loaded: &[PathBuf]) {
    if loaded.is_empty() {
        info!("Using environment variables only (no .env file found)");
        return;
    }
    for path in loaded {
        debug!("Loaded .env from {}", self::display(path));
    }
    let joined: Vec<String> = loaded.iter().map(|p| display(p)).collect();
    info!("Loaded configuration from: {}", joined.join(", "));
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
