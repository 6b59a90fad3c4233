use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,

    // Public site base URL, used for canonical/alternate links
    pub site_url: String,

    // Build identity (exposed by /api/version)
    pub commit_sha: String,
    pub deployment_id: String,

    // Language preference persistence
    pub preferences_file: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT is not a valid port number")?,

            site_url: std::env::var("SITE_URL")
                .unwrap_or_else(|_| "https://spacelaunchdb.com".to_string()),

            commit_sha: std::env::var("COMMIT_SHA").unwrap_or_else(|_| "commit".to_string()),
            deployment_id: std::env::var("DEPLOYMENT_ID")
                .unwrap_or_else(|_| "deploy".to_string()),

            preferences_file: std::env::var("PREFERENCES_FILE")
                .unwrap_or_else(|_| "preferences.json".to_string()),
        })
    }
}
