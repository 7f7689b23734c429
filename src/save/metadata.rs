use crate::training::*;
use crate::*;
use anyhow::Context;
use std::path::Path;
use std::path::PathBuf;

/// How a saved table was produced.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Metadata {
    pub form: Form,
    pub config: Config,
    pub games: usize,
    pub turns: usize,
    pub truncated: usize,
    pub wins: [usize; N],
    pub seconds: u64,
}

impl Metadata {
    pub fn new(form: Form, config: Config, progress: &impl Progress) -> Self {
        Self {
            form,
            config,
            games: progress.games(),
            turns: progress.turns(),
            truncated: progress.truncated(),
            wins: progress.wins(),
            seconds: progress.elapsed().as_secs(),
        }
    }
    /// Sidecar path for a table file.
    pub fn path(table: &Path) -> PathBuf {
        table.with_extension("json")
    }
    pub fn save(&self, table: &Path) -> anyhow::Result<()> {
        let ref path = Self::path(table);
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("write {}", path.display()))
    }
    pub fn load(table: &Path) -> anyhow::Result<Self> {
        let ref path = Self::path(table);
        let json = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        serde_json::from_str(&json).with_context(|| format!("parse {}", path.display()))
    }
}
