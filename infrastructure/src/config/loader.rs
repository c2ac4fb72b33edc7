//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Application directory name under the platform config dir
const APP_DIR: &str = "movie-sentiment";

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["sentiment.toml", ".sentiment.toml"];

/// Prefix of environment overrides (`MOVIE_SENTIMENT_SERVICE__BASE_URL`)
pub const ENV_PREFIX: &str = "MOVIE_SENTIMENT_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `MOVIE_SENTIMENT_<SECTION>__<KEY>`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./sentiment.toml` or `./.sentiment.toml`
    /// 4. Global config: `$XDG_CONFIG_HOME/movie-sentiment/config.toml`
    /// 5. Default values
    ///
    /// An explicit path must exist; the discovered files are optional.
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        if let Some(path) = config_path
            && !path.is_file()
        {
            return Err(Box::new(figment::Error::from(format!(
                "config file not found: {}",
                path.display()
            ))));
        }
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Build the merged figment without extracting it
    pub fn figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // The password variable is read by the CLI, never merged into config
        figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["password"]).split("__"))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/movie-sentiment/config.toml` if set,
    /// otherwise the platform config directory equivalent.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used (for --show-config)
    pub fn describe_sources(config_path: Option<&PathBuf>) -> Vec<String> {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        lines.push(format!(
            "  [ENV  ] Environment: {}<SECTION>__<KEY>",
            ENV_PREFIX
        ));

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            lines.push(format!("  [{:<5}] Explicit: {}", mark, path.display()));
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines.push(format!(
                "  [     ] Project: ./{} or ./{}",
                PROJECT_FILES[0], PROJECT_FILES[1]
            )),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:  {}", mark, path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use sentiment_application::UnauthorizedPolicy;
    use sentiment_domain::OutputFormat;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.service.base_url, "http://127.0.0.1:8000");
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("movie-sentiment"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[service]\nbase_url = \"https://reviews.example.com\"\n\n[output]\nformat = \"json\""
        )
        .unwrap();

        Jail::expect_with(|jail| {
            let dir = jail.directory().display().to_string();
            jail.set_env("XDG_CONFIG_HOME", dir);
            let config = ConfigLoader::load(Some(&path)).map_err(|e| *e)?;
            assert_eq!(config.service.base_url, "https://reviews.example.com");
            assert_eq!(config.output.format, Some(OutputFormat::Json));
            Ok(())
        });
    }

    #[test]
    fn test_project_file_and_env_override() {
        Jail::expect_with(|jail| {
            let dir = jail.directory().display().to_string();
            jail.set_env("XDG_CONFIG_HOME", dir);
            jail.create_file(
                "sentiment.toml",
                r#"
[service]
base_url = "http://project:8000"
timeout_seconds = 20
"#,
            )?;
            jail.set_env("MOVIE_SENTIMENT_SERVICE__BASE_URL", "http://env:9000");
            jail.set_env("MOVIE_SENTIMENT_SESSION__ON_UNAUTHORIZED", "clear");
            jail.set_env("MOVIE_SENTIMENT_PASSWORD", "not-config");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.service.base_url, "http://env:9000");
            assert_eq!(config.service.timeout_seconds, Some(20));
            assert_eq!(config.session.on_unauthorized, UnauthorizedPolicy::Clear);
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        Jail::expect_with(|jail| {
            let dir = jail.directory().display().to_string();
            jail.set_env("XDG_CONFIG_HOME", dir);
            let path = PathBuf::from("does-not-exist.toml");

            let err = ConfigLoader::load(Some(&path)).unwrap_err();
            assert!(err.to_string().contains("does-not-exist.toml"));

            assert!(ConfigLoader::load(None).is_ok());
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            let dir = jail.directory().display().to_string();
            jail.set_env("XDG_CONFIG_HOME", dir);
            jail.create_file(".sentiment.toml", "[output]\ncolor = false\nformat = \"plain\"")?;
            jail.create_file("override.toml", "[output]\nformat = \"json\"")?;

            let path = PathBuf::from("override.toml");
            let config = ConfigLoader::load(Some(&path)).map_err(|e| *e)?;
            assert_eq!(config.output.format, Some(OutputFormat::Json));
            assert!(!config.output.color);
            Ok(())
        });
    }

    #[test]
    fn test_describe_sources_mentions_env() {
        let lines = ConfigLoader::describe_sources(None);
        assert!(lines.iter().any(|l| l.contains(ENV_PREFIX)));
        assert!(lines.last().unwrap().contains("built-in defaults"));
    }
}
