// Rust guideline compliant 2026-10-16

//! Configuration management for tracegraph.

use crate::integrity::IntegrityPolicy;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for an extraction run.
///
/// The issue-type and link names are the tracker-specific spellings that the
/// [`TypeTaxonomy`](crate::TypeTaxonomy) maps onto semantic categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Tracker projects to extract.
    #[serde(default = "default_projects")]
    pub projects: Vec<String>,

    /// Issue type name classified as `capability`.
    #[serde(default = "default_capability_issue_type")]
    pub capability_issue_type: String,

    /// Issue type name classified as `feature`.
    #[serde(default = "default_feature_issue_type")]
    pub feature_issue_type: String,

    /// Issue type name classified as `requirement`.
    #[serde(default = "default_requirement_issue_type")]
    pub requirement_issue_type: String,

    /// Issue type name classified as `thread`.
    #[serde(default = "default_thread_issue_type")]
    pub thread_issue_type: String,

    /// Link label for "is parent of".
    #[serde(default = "default_parent_link")]
    pub parent_link: String,

    /// Link label for "is child of".
    #[serde(default = "default_child_link")]
    pub child_link: String,

    /// Link label for "traces to".
    #[serde(default = "default_traces_to_link")]
    pub traces_to_link: String,

    /// Link label for "traces from".
    #[serde(default = "default_traces_from_link")]
    pub traces_from_link: String,

    /// Link label for outward dependencies; also the default edge type.
    #[serde(default = "default_depends_link_out")]
    pub depends_link_out: String,

    /// Link label for inward dependencies.
    #[serde(default = "default_depends_link_in")]
    pub depends_link_in: String,

    /// Label prefix marking a process label on an issue.
    #[serde(default = "default_process_prefix")]
    pub process_prefix: String,

    /// Custom field holding the finish date of thread issues.
    #[serde(default = "default_thread_finish_field")]
    pub thread_finish_field: String,

    /// Page size requested from the tracker.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Integrity policy applied after ingestion.
    #[serde(default)]
    pub integrity: IntegrityPolicy,

    /// Output document path.
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Verbose per-record diagnostics. Never changes graph content.
    #[serde(default)]
    pub debug: bool,
}

fn default_projects() -> Vec<String> {
    vec!["PIR".to_string()]
}

fn default_capability_issue_type() -> String {
    "New Capability".to_string()
}

fn default_feature_issue_type() -> String {
    "New Feature".to_string()
}

fn default_requirement_issue_type() -> String {
    "Requirement".to_string()
}

fn default_thread_issue_type() -> String {
    "Thread".to_string()
}

fn default_parent_link() -> String {
    "is parent of".to_string()
}

fn default_child_link() -> String {
    "is a child of".to_string()
}

fn default_traces_to_link() -> String {
    "traces to".to_string()
}

fn default_traces_from_link() -> String {
    "traces from".to_string()
}

fn default_depends_link_out() -> String {
    "depends on".to_string()
}

fn default_depends_link_in() -> String {
    "is a dependency of".to_string()
}

fn default_process_prefix() -> String {
    "process_".to_string()
}

fn default_thread_finish_field() -> String {
    "customfield_13008".to_string()
}

/// Default tracker page size.
fn default_page_size() -> usize {
    100
}

fn default_output_file() -> String {
    "output.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            projects: default_projects(),
            capability_issue_type: default_capability_issue_type(),
            feature_issue_type: default_feature_issue_type(),
            requirement_issue_type: default_requirement_issue_type(),
            thread_issue_type: default_thread_issue_type(),
            parent_link: default_parent_link(),
            child_link: default_child_link(),
            traces_to_link: default_traces_to_link(),
            traces_from_link: default_traces_from_link(),
            depends_link_out: default_depends_link_out(),
            depends_link_in: default_depends_link_in(),
            process_prefix: default_process_prefix(),
            thread_finish_field: default_thread_finish_field(),
            page_size: default_page_size(),
            integrity: IntegrityPolicy::default(),
            output_file: default_output_file(),
            debug: false,
        }
    }
}

impl Config {
    /// Loads configuration from an optional file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The TOML file at `path`, when given and present
    /// 3. Environment variables with `TRACEGRAPH_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file contains invalid TOML
    /// - An environment override or the merged result fails validation
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = path {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                config = toml::from_str(&content)
                    .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `TRACEGRAPH_PROJECTS` - Comma-separated project keys
    /// - `TRACEGRAPH_DEBUG` - Verbose diagnostics (true/false)
    /// - `TRACEGRAPH_OUTPUT_FILE` - Output document path
    /// - `TRACEGRAPH_PAGE_SIZE` - Tracker page size
    /// - `TRACEGRAPH_INTEGRITY` - Integrity policy (report/repair/trim)
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("TRACEGRAPH_PROJECTS") {
            self.projects = val
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Ok(val) = std::env::var("TRACEGRAPH_DEBUG") {
            self.debug = val.parse().map_err(|_| {
                Error::Config("TRACEGRAPH_DEBUG must be true or false".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("TRACEGRAPH_OUTPUT_FILE") {
            self.output_file = val;
        }

        if let Ok(val) = std::env::var("TRACEGRAPH_PAGE_SIZE") {
            self.page_size = val.parse().map_err(|_| {
                Error::Config("TRACEGRAPH_PAGE_SIZE must be a positive number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("TRACEGRAPH_INTEGRITY") {
            self.integrity = val.parse()?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No project is configured
    /// - Any issue-type or link name is blank
    /// - `page_size` is zero
    pub fn validate(&self) -> Result<()> {
        if self.projects.is_empty() {
            return Err(Error::Config(
                "at least one project must be configured".to_string(),
            ));
        }

        let names = [
            ("capability_issue_type", &self.capability_issue_type),
            ("feature_issue_type", &self.feature_issue_type),
            ("requirement_issue_type", &self.requirement_issue_type),
            ("thread_issue_type", &self.thread_issue_type),
            ("parent_link", &self.parent_link),
            ("child_link", &self.child_link),
            ("traces_to_link", &self.traces_to_link),
            ("traces_from_link", &self.traces_from_link),
            ("depends_link_out", &self.depends_link_out),
            ("depends_link_in", &self.depends_link_in),
        ];
        for (field, value) in names {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("{} cannot be empty", field)));
            }
        }

        if self.page_size == 0 {
            return Err(Error::Config(
                "page_size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// The four tracked issue-type names, in capability/feature/requirement/thread order.
    pub fn tracked_issue_types(&self) -> [&str; 4] {
        [
            &self.capability_issue_type,
            &self.feature_issue_type,
            &self.requirement_issue_type,
            &self.thread_issue_type,
        ]
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Renders the configuration as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Env vars are process-global; serialize the tests that touch them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_all_env_vars() {
        std::env::remove_var("TRACEGRAPH_PROJECTS");
        std::env::remove_var("TRACEGRAPH_DEBUG");
        std::env::remove_var("TRACEGRAPH_OUTPUT_FILE");
        std::env::remove_var("TRACEGRAPH_PAGE_SIZE");
        std::env::remove_var("TRACEGRAPH_INTEGRITY");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.projects, vec!["PIR".to_string()]);
        assert_eq!(config.capability_issue_type, "New Capability");
        assert_eq!(config.child_link, "is a child of");
        assert_eq!(config.process_prefix, "process_");
        assert_eq!(config.page_size, 100);
        assert_eq!(config.integrity, IntegrityPolicy::Report);
        assert!(!config.debug);
    }

    #[test]
    fn test_config_load_missing_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(Some(&temp_dir.path().join("tracegraph.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("tracegraph.toml");
        let content = r#"
projects = ["PIR", "OPS"]
feature_issue_type = "Epic"
child_link = "Is Child Of"
page_size = 50
integrity = "trim"
debug = true
"#;
        std::fs::write(&config_path, content).unwrap();

        let config = Config::load(Some(&config_path)).unwrap();
        assert_eq!(config.projects, vec!["PIR".to_string(), "OPS".to_string()]);
        assert_eq!(config.feature_issue_type, "Epic");
        assert_eq!(config.child_link, "Is Child Of");
        assert_eq!(config.page_size, 50);
        assert_eq!(config.integrity, IntegrityPolicy::Trim);
        assert!(config.debug);
        // Unset fields keep their defaults
        assert_eq!(config.thread_issue_type, "Thread");
    }

    #[test]
    fn test_config_invalid_toml() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("tracegraph.toml");
        std::fs::write(&config_path, "projects = [").unwrap();

        assert!(matches!(
            Config::load(Some(&config_path)),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_config_validation_zero_page_size() {
        let config = Config {
            page_size: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_empty_projects() {
        let config = Config {
            projects: Vec::new(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_blank_link_name() {
        let config = Config {
            traces_to_link: "  ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_env_override_projects() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();

        std::env::set_var("TRACEGRAPH_PROJECTS", "PIR, OPS ,");
        let config = Config::load(None).unwrap();
        assert_eq!(config.projects, vec!["PIR".to_string(), "OPS".to_string()]);

        clear_all_env_vars();
    }

    #[test]
    fn test_config_env_override_integrity() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();

        std::env::set_var("TRACEGRAPH_INTEGRITY", "repair");
        let config = Config::load(None).unwrap();
        assert_eq!(config.integrity, IntegrityPolicy::Repair);

        clear_all_env_vars();
    }

    #[test]
    fn test_config_env_invalid_page_size() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();

        std::env::set_var("TRACEGRAPH_PAGE_SIZE", "lots");
        assert!(Config::load(None).is_err());

        clear_all_env_vars();
    }

    #[test]
    fn test_config_file_overridden_by_env() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("tracegraph.toml");
        std::fs::write(&config_path, "output_file = \"graph.json\"").unwrap();

        std::env::set_var("TRACEGRAPH_OUTPUT_FILE", "env.json");
        let config = Config::load(Some(&config_path)).unwrap();
        assert_eq!(config.output_file, "env.json");

        clear_all_env_vars();
    }

    #[test]
    fn test_config_save_and_load() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("tracegraph.toml");

        let original = Config {
            projects: vec!["ABC".to_string()],
            process_prefix: "proc-".to_string(),
            integrity: IntegrityPolicy::Repair,
            ..Config::default()
        };

        original.save(&config_path).unwrap();
        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(original, loaded);
    }
}
