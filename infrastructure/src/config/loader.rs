//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "tri-health";
const PROJECT_FILES: [&str; 2] = ["tri-health.toml", ".tri-health.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./tri-health.toml` or `./.tri-health.toml`
    /// 3. Global: `$XDG_CONFIG_HOME/tri-health/config.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let sources: Vec<PathBuf> = Self::global_config_path()
            .filter(|path| path.exists())
            .into_iter()
            .chain(Self::project_config_path())
            .chain(config_path.map(Path::to_path_buf))
            .collect();

        Self::load_sources(&sources)
    }

    /// Merge TOML files over the defaults; later files win
    fn load_sources(paths: &[PathBuf]) -> Result<FileConfig, Box<figment::Error>> {
        paths
            .iter()
            .fold(
                Figment::new().merge(Serialized::defaults(FileConfig::default())),
                |figment, path| figment.merge(Toml::file(path)),
            )
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::project_config_in(Path::new("."))
    }

    fn project_config_in(base: &Path) -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(|name| base.join(name))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for --show-config)
    pub fn print_config_sources(explicit: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<7}] Explicit: {}", mark, path.display());
        }

        match Self::project_config_path() {
            Some(path) => println!("  [FOUND  ] Project: {}", path.display()),
            None => println!("  [       ] Project: ./tri-health.toml or ./.tri-health.toml"),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "" };
            println!("  [{:<7}] Global:  {}", mark, path.display());
        }

        println!("  [       ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trihealth_domain::OutputFormat;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.models.dir, "saved_models");
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("tri-health"));
    }

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "custom.toml",
            r#"
[models]
dir = "/srv/models"

[output]
format = "json"
"#,
        );

        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(config.models.dir, "/srv/models");
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        // Untouched sections keep their defaults
        assert!(config.output.color);
        assert_eq!(config.tui.tick_rate_ms, 250);
    }

    #[test]
    fn test_load_reports_bad_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "bad.toml", "[tui]\ntick_rate_ms = \"fast\"\n");

        assert!(ConfigLoader::load(Some(&path)).is_err());
    }

    #[test]
    fn test_project_config_discovery() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ConfigLoader::project_config_in(dir.path()).is_none());

        let hidden = write(dir.path(), ".tri-health.toml", "");
        assert_eq!(ConfigLoader::project_config_in(dir.path()), Some(hidden));

        let visible = write(dir.path(), "tri-health.toml", "");
        assert_eq!(ConfigLoader::project_config_in(dir.path()), Some(visible));
    }

    #[test]
    fn test_sources_merge_in_priority_order() {
        let global_dir = tempfile::tempdir().unwrap();
        let project_dir = tempfile::tempdir().unwrap();
        let global = write(
            global_dir.path(),
            "config.toml",
            "[models]\ndir = \"/global\"\n\n[output]\ncolor = false\n\n[tui]\nflash_seconds = 9\n",
        );
        write(
            project_dir.path(),
            "tri-health.toml",
            "[models]\ndir = \"/project\"\n\n[tui]\nshow_features = true\n",
        );
        let project = ConfigLoader::project_config_in(project_dir.path()).unwrap();
        let explicit = write(project_dir.path(), "explicit.toml", "[models]\ndir = \"/explicit\"\n");

        let config = ConfigLoader::load_sources(&[global.clone(), project.clone()]).unwrap();
        assert_eq!(config.models.dir, "/project");
        assert!(!config.output.color);
        assert!(config.tui.show_features);
        assert_eq!(config.tui.flash_seconds, 9);
        assert_eq!(config.tui.tick_rate_ms, 250);

        let config = ConfigLoader::load_sources(&[global, project, explicit]).unwrap();
        assert_eq!(config.models.dir, "/explicit");
        assert!(config.tui.show_features);
    }

    #[test]
    fn test_no_sources_yields_defaults() {
        let config = ConfigLoader::load_sources(&[]).unwrap();
        assert_eq!(config.models.dir, ConfigLoader::load_defaults().models.dir);
        assert!(config.output.format.is_none());
    }
}
