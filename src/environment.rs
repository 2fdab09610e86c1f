// src/environment.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub workspace_path: PathBuf,
    #[serde(default = "default_latex_bin")]
    pub latex_bin: String,
    #[serde(default)]
    pub keep_artifacts: bool,
}

fn default_latex_bin() -> String {
    "pdflatex".to_string()
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: EnvironmentConfig,
    production: EnvironmentConfig,
}

impl EnvironmentConfig {
    /// Load configuration based on environment
    pub fn load() -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        Self::load_from_file(&environment)
    }

    fn get_environment() -> String {
        std::env::var("RESUMAKER_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_from_file(environment: &str) -> Result<Self> {
        let config_path = PathBuf::from("config.yaml");
        if !config_path.exists() {
            anyhow::bail!("config.yaml not found in current directory. Server cannot start without configuration.");
        }

        let config_content =
            std::fs::read_to_string(&config_path).context("Failed to read config.yaml")?;

        let config_file: ConfigFile =
            serde_yaml::from_str(&config_content).context("Failed to parse config.yaml")?;

        let env_config = match environment {
            "production" => config_file.production,
            _ => config_file.local,
        };

        Ok(Self {
            workspace_path: Self::resolve_path(&env_config.workspace_path)?,
            latex_bin: env_config.latex_bin,
            keep_artifacts: env_config.keep_artifacts,
        })
    }

    fn resolve_path(path: &PathBuf) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.clone())
        } else {
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            Ok(current_dir.join(path))
        }
    }

    /// Ensure the compile workspace exists
    pub async fn ensure_directories(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.workspace_path)
            .await
            .with_context(|| {
                format!(
                    "Failed to create workspace directory: {}",
                    self.workspace_path.display()
                )
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_file() {
        let yaml = r#"
local:
  workspace_path: workspace
production:
  workspace_path: /var/lib/resumaker/workspace
  latex_bin: pdflatex
  keep_artifacts: false
"#;
        let config: ConfigFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.local.workspace_path, PathBuf::from("workspace"));
        assert_eq!(config.local.latex_bin, "pdflatex");
        assert!(!config.local.keep_artifacts);
        assert!(config.production.workspace_path.is_absolute());
    }
}
