//! Configuration of [BlackjackEnv](super::BlackjackEnv).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configurations of [`BlackjackEnv`](super::BlackjackEnv).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlackjackEnvConfig {
    /// If `true`, the table is logged after every step.
    #[serde(default)]
    pub(super) render: bool,
}

impl BlackjackEnvConfig {
    /// Sets the render flag.
    pub fn render(mut self, render: bool) -> Self {
        self.render = render;
        self
    }

    /// Loads [`BlackjackEnvConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let c = serde_yaml::from_reader(rdr)?;
        Ok(c)
    }

    /// Saves [`BlackjackEnvConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
