//! Quiz configuration stored in an optional `quiz.toml`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Quiz configuration (TOML).
///
/// The file is optional and intended to be edited by humans. Missing fields
/// default to sensible values; a missing file means all defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct QuizConfig {
    /// Problem set file: one `prompt,expected_answer` row per line.
    pub problems: PathBuf,

    /// Total session wall-clock budget in seconds.
    pub budget_secs: u64,

    /// Directory the final report is written into.
    pub report_dir: PathBuf,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            problems: PathBuf::from("problems.csv"),
            budget_secs: 30,
            report_dir: PathBuf::from("."),
        }
    }
}

impl QuizConfig {
    pub fn validate(&self) -> Result<()> {
        if self.budget_secs == 0 {
            return Err(anyhow!("budget_secs must be > 0"));
        }
        if self.problems.as_os_str().is_empty() {
            return Err(anyhow!("problems must be a non-empty path"));
        }
        if self.report_dir.as_os_str().is_empty() {
            return Err(anyhow!("report_dir must be a non-empty path"));
        }
        Ok(())
    }

    pub fn budget(&self) -> Duration {
        Duration::from_secs(self.budget_secs)
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub problems: Option<PathBuf>,
    pub budget_secs: Option<u64>,
    pub report_dir: Option<PathBuf>,
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `QuizConfig::default()`.
pub fn load_config(path: &Path) -> Result<QuizConfig> {
    if !path.exists() {
        let cfg = QuizConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: QuizConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Apply command-line overrides to the file-based config.
pub fn apply_overrides(mut base: QuizConfig, overrides: &ConfigOverrides) -> Result<QuizConfig> {
    if let Some(problems) = &overrides.problems {
        base.problems = problems.clone();
    }
    if let Some(budget_secs) = overrides.budget_secs {
        base.budget_secs = budget_secs;
    }
    if let Some(report_dir) = &overrides.report_dir {
        base.report_dir = report_dir.clone();
    }
    base.validate()?;
    Ok(base)
}
