use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::config::EngineConfig;

use super::SeedData;

const SEED_DATA_RELATIVE_PATH: &str = "assets/data/seed.json";
const BUNDLED_SEED_DATA: &str = include_str!("../../assets/data/seed.json");

pub fn seed_data_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(SEED_DATA_RELATIVE_PATH)
}

impl SeedData {
    /// The seed set compiled into the binary.
    pub fn bundled() -> Result<Self> {
        parse_seed_data(BUNDLED_SEED_DATA, "bundled seed data")
    }
}

pub fn load_seed_data_from_path(path: impl AsRef<Path>) -> Result<SeedData> {
    let path = path.as_ref();
    let seed: SeedData = read_json(path, "seed data")?;
    seed.validate().with_context(|| format!("invalid seed data file: {}", path.display()))?;
    Ok(seed)
}

pub fn load_engine_config_from_path(path: impl AsRef<Path>) -> Result<EngineConfig> {
    let path = path.as_ref();
    let config: EngineConfig = read_json(path, "engine config")?;
    config
        .validate()
        .with_context(|| format!("invalid engine config file: {}", path.display()))?;
    Ok(config)
}

fn parse_seed_data(raw: &str, label: &str) -> Result<SeedData> {
    let seed: SeedData =
        serde_json::from_str(raw).with_context(|| format!("failed parsing {label} as JSON"))?;
    seed.validate().with_context(|| format!("invalid {label}"))?;
    Ok(seed)
}

fn read_json<T>(path: &Path, label: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed reading {label} file: {}", path.display()))?;

    serde_json::from_str(&raw)
        .with_context(|| format!("failed parsing {label} file as JSON: {}", path.display()))
}
