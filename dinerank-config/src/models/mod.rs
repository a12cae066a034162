pub mod settings;

use anyhow::{Context, anyhow};
use dinerank_core::{ItemRepository, RankingEngine, SortState};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use settings::{DisplayConfig, PositionConfig, SortConfig};

/// Environment variable naming a TOML or JSON config file.
pub const CONFIG_PATH_VAR: &str = "DINERANK_CONFIG_PATH";
/// Environment variable holding an inline JSON config.
pub const CONFIG_JSON_VAR: &str = "DINERANK_CONFIG_JSON";

/// Source that produced the engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Everything needed to stand up a ranking engine.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    pub sort: SortConfig,
    pub display: DisplayConfig,
    /// Observer location for distance ranking. Distances stay unknown without
    /// one.
    pub position: Option<PositionConfig>,
    /// JSON catalog to load when none is given on the command line.
    pub catalog_path: Option<PathBuf>,
}

impl EngineConfig {
    /// Load configuration using environment variables.
    /// Evaluation order:
    /// 1) `$DINERANK_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$DINERANK_CONFIG_JSON` (inline JSON),
    /// 3) a `dinerank.toml` or `dinerank.json` in the working directory,
    /// 4) defaults.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        if let Ok(path_str) = env::var(CONFIG_PATH_VAR)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var(CONFIG_JSON_VAR)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_VAR}"))?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file() {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents)
                .with_context(|| format!("invalid config {}", path.display())),
            Some("toml") => toml::from_str(&contents)
                .map_err(|err| anyhow!("invalid config {}: {}", path.display(), err)),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    /// TOML first, then JSON.
    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).map_err(|err| anyhow!("invalid config json: {err}"))
    }

    fn find_default_file() -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &["dinerank.toml", "dinerank.json"];

        CANDIDATES
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .map(Path::to_path_buf)
    }

    /// Engine over `repo` configured from this file: sort first, then display
    /// overrides, then distances when a position is configured.
    pub fn build_engine<R: ItemRepository>(&self, repo: R) -> RankingEngine<R> {
        let mut engine = match self.sort.packed {
            Some(bits) => RankingEngine::with_state(repo, SortState::from_bits(bits)),
            None => RankingEngine::from_criteria(repo, self.sort.toggles()),
        };
        if let Some(alphabetical) = self.sort.alphabetical {
            engine.set_alphabetical(alphabetical);
        }
        self.display.apply_to(&mut engine);

        let located = self
            .position
            .is_some_and(|position| engine.refresh_distances(&position.provider()));
        if located {
            engine.resort();
        } else {
            engine.apply_pending();
        }
        debug!(
            state = engine.sort_type(),
            entries = engine.len(),
            located,
            "engine configured"
        );
        engine
    }
}
