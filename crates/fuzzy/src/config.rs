//! Search configuration.
//!
//! Thresholds and searchable fields are grouped into named profiles so each
//! screen of the host app can pick one (`restaurant`, `food`, ...). Values
//! come from a TOML file when one is present:
//!
//! ```toml
//! default_threshold = 0.6
//!
//! [profiles.restaurant]
//! threshold = 0.5
//! fields = ["name", "cuisine", "address", "tags"]
//! ```
//!
//! Profiles from the file are merged over the built-in ones.

use crate::error::{FuzzyError, Result};
use crate::threshold::Threshold;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Config file names searched, in order, when no path is given.
const CONFIG_CANDIDATES: [&str; 3] = [
    ".foodshare-search.toml",
    "foodshare-search.toml",
    ".config/foodshare-search.toml",
];

/// Root search configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchConfig {
    /// Threshold used when no profile is selected
    #[serde(default = "default_threshold")]
    pub default_threshold: Threshold,

    /// Named search profiles
    #[serde(default)]
    pub profiles: BTreeMap<String, SearchProfile>,

    /// File the configuration was loaded from
    #[serde(skip)]
    pub path: Option<String>,
}

/// Threshold and searchable fields for one kind of catalog
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchProfile {
    /// Minimum item score
    #[serde(default = "default_threshold")]
    pub threshold: Threshold,

    /// Field keys or dotted paths to search
    #[serde(default)]
    pub fields: Vec<String>,
}

impl SearchProfile {
    /// Creates a profile.
    pub fn new(threshold: Threshold, fields: &[&str]) -> Self {
        Self {
            threshold,
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }
}

fn default_threshold() -> Threshold {
    Threshold::DEFAULT
}

fn builtin_profiles() -> BTreeMap<String, SearchProfile> {
    let lenient = Threshold::LENIENT;

    BTreeMap::from([
        (
            "restaurant".to_string(),
            SearchProfile::new(lenient, &["name", "cuisine", "address"]),
        ),
        (
            "food".to_string(),
            SearchProfile::new(lenient, &["name", "description", "category"]),
        ),
    ])
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_threshold: Threshold::DEFAULT,
            profiles: builtin_profiles(),
            path: None,
        }
    }
}

impl SearchConfig {
    /// Load configuration from a file path, a standard location, or defaults.
    ///
    /// # Errors
    /// `Config` if the file cannot be read, parsed, or fails validation.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = path.map(String::from).or_else(find_config_file);

        let Some(path) = config_path else {
            debug!("no search config file found, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(&path)
            .map_err(|e| FuzzyError::Config(format!("Failed to read config file {}: {}", path, e)))?;

        let mut config = Self::from_toml(&content).map_err(|e| match e {
            FuzzyError::Config(msg) => FuzzyError::Config(format!("{}: {}", path, msg)),
            other => other,
        })?;
        config.path = Some(path);
        Ok(config)
    }

    /// Parse configuration from TOML text, merging over the built-in profiles.
    pub fn from_toml(content: &str) -> Result<Self> {
        let parsed: SearchConfig = toml::from_str(content)
            .map_err(|e| FuzzyError::Config(format!("Failed to parse config: {}", e)))?;

        let mut profiles = builtin_profiles();
        for (name, profile) in parsed.profiles {
            if profiles.contains_key(&name) {
                debug!(profile = %name, "overriding built-in search profile");
            }
            profiles.insert(name, profile);
        }

        let config = Self {
            default_threshold: parsed.default_threshold,
            profiles,
            path: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every profile is usable.
    pub fn validate(&self) -> Result<()> {
        for (name, profile) in &self.profiles {
            if profile.fields.is_empty() {
                return Err(FuzzyError::Config(format!(
                    "profile '{}' has no searchable fields",
                    name
                )));
            }
            if profile.fields.iter().any(|f| f.trim().is_empty()) {
                return Err(FuzzyError::Config(format!(
                    "profile '{}' has an empty field name",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Look up a profile by name.
    pub fn profile(&self, name: &str) -> Option<&SearchProfile> {
        self.profiles.get(name)
    }

    /// Threshold for `profile`, falling back to the default threshold.
    pub fn threshold_for(&self, profile: Option<&str>) -> Threshold {
        match profile {
            Some(name) => match self.profile(name) {
                Some(p) => p.threshold,
                None => {
                    warn!(profile = %name, "unknown search profile, using default threshold");
                    self.default_threshold
                }
            },
            None => self.default_threshold,
        }
    }
}

fn find_config_file() -> Option<String> {
    CONFIG_CANDIDATES
        .iter()
        .find(|candidate| Path::new(candidate).exists())
        .map(|candidate| candidate.to_string())
}
