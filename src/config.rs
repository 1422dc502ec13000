//! Engine configuration with TOML persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::graph::Uniqueness;
use crate::types::{LexError, LexResult, MAX_MEANING_DEPTH, ROOT_HOPS, ROOT_SENTINEL};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "LEXQ_CONFIG";

/// Upper bound on `root_hops` and `max_meaning_depth`; path counts grow exponentially with depth.
pub const MAX_CONFIGURABLE_DEPTH: u32 = 64;

/// Upper bound on a walk depth when its uniqueness is [`Uniqueness::None`].
/// Parallel edges on a cycle give `2^depth` paths.
pub const MAX_UNCHECKED_DEPTH: u32 = 16;

/// How many times a root reached along several root paths is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootMultiplicity {
    /// Once per root path. A root reached twice is walked twice.
    #[default]
    PerPath,
    /// Once per distinct root vertex.
    Distinct,
}

/// Complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Meaning-resolution traversal settings.
    pub traversal: TraversalConfig,

    /// Fuzzy matcher settings.
    pub fuzzy: FuzzyConfig,
}

/// Settings for root discovery and the outbound meaning walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Exact number of inbound MeaningRoot hops from a lexeme to its root.
    pub root_hops: u32,

    /// Maximum outbound MeaningGraph depth walked from a root.
    pub max_meaning_depth: u32,

    /// Marker value identifying a meaning-tree root.
    pub root_sentinel: i64,

    /// Per-path repetition rule for the inbound walk from a lexeme to its roots.
    pub root_uniqueness: Uniqueness,

    /// Per-path repetition rule for the outbound walk from a root.
    pub uniqueness: Uniqueness,

    /// Whether a root reached along several paths is walked once per path.
    pub root_multiplicity: RootMultiplicity,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            root_hops: ROOT_HOPS,
            max_meaning_depth: MAX_MEANING_DEPTH,
            root_sentinel: ROOT_SENTINEL,
            root_uniqueness: Uniqueness::PathEdges,
            uniqueness: Uniqueness::PathVertices,
            root_multiplicity: RootMultiplicity::PerPath,
        }
    }
}

/// Settings for the fuzzy matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyConfig {
    /// Prune candidates with the snapshot's metric tree instead of scanning every form.
    pub use_metric_index: bool,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        Self {
            use_metric_index: true,
        }
    }
}

impl EngineConfig {
    /// Parse from TOML text and validate.
    pub fn from_toml(content: &str) -> LexResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| LexError::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from TOML file
    pub fn load(path: &Path) -> LexResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LexError::Config(format!("failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Save to TOML file
    pub fn save(&self, path: &Path) -> LexResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LexError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from the default location, falling back to defaults when it is
    /// missing or broken.
    pub fn load_or_default() -> Self {
        let path = default_config_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Check value ranges.
    pub fn validate(&self) -> LexResult<()> {
        let traversal = &self.traversal;
        if traversal.root_hops == 0 {
            return Err(LexError::Config("root_hops must be at least 1".to_string()));
        }
        check_depth("root_hops", traversal.root_hops, traversal.root_uniqueness)?;
        check_depth(
            "max_meaning_depth",
            traversal.max_meaning_depth,
            traversal.uniqueness,
        )
    }
}

fn check_depth(name: &str, depth: u32, uniqueness: Uniqueness) -> LexResult<()> {
    let limit = match uniqueness {
        Uniqueness::None => MAX_UNCHECKED_DEPTH,
        Uniqueness::PathVertices | Uniqueness::PathEdges => MAX_CONFIGURABLE_DEPTH,
    };
    if depth > limit {
        return Err(LexError::Config(format!(
            "{name} {depth} exceeds {limit} for uniqueness {uniqueness:?}"
        )));
    }
    Ok(())
}

/// `<config dir>/lexigraph/engine.toml`.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lexigraph")
        .join("engine.toml")
}

/// Resolve the config file using priority order:
/// 1. Explicit path (CLI arg)
/// 2. LEXQ_CONFIG environment variable
/// 3. The default location, if it exists
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    let default_path = default_config_path();
    default_path.exists().then_some(default_path)
}

/// Load the resolved config file, or defaults when none is found.
pub fn load_engine_config(explicit: Option<&Path>) -> LexResult<EngineConfig> {
    match resolve_config_path(explicit) {
        Some(path) => EngineConfig::load(&path),
        None => Ok(EngineConfig::default()),
    }
}
