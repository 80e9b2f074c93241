//! Engine configuration read from the environment.

use std::path::Path;

/// Runtime settings for the engine binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub database_path: String,
    pub server_host: String,
    pub server_port: u16,
    /// `*` or a comma-separated origin list; `None` disables CORS headers.
    pub cors_allowed_origins: Option<String>,
    pub seed_demo_data: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            database_path: "trivia.db".into(),
            server_host: "0.0.0.0".into(),
            server_port: 3000,
            cors_allowed_origins: None,
            seed_demo_data: false,
        }
    }
}

impl EngineConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let database_path = lookup("DATABASE_PATH").unwrap_or(defaults.database_path);
        let server_host = lookup("SERVER_HOST").unwrap_or(defaults.server_host);
        let server_port = lookup("SERVER_PORT")
            .or_else(|| lookup("PORT"))
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(defaults.server_port);
        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let seed_demo_data = lookup("SEED_DEMO_DATA")
            .map(|raw| matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.seed_demo_data);

        Self {
            database_path,
            server_host,
            server_port,
            cors_allowed_origins,
            seed_demo_data,
        }
    }
}

/// Load `.env.local` then `.env` from `root`, if present.
///
/// Variables already set in the process environment win.
pub fn load_dotenv_from(root: &Path) {
    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
