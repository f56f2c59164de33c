use std::{fs::File, io::BufReader, path::Path};

use crate::{
    animation::engine::{Engine, EngineConfig},
    foundation::error::{CubesResult, SlicedCubesError},
    geometry::params::GeometryParams,
    lattice::region::Lattice,
    stage::table::{STORED_STAGES, StageTable},
    state::piece::PieceSetState,
};

/// Every static parameter a driver and its displays must share.
///
/// Missing sections fall back to their defaults, so `{}` is the built-in show.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct ShowConfig {
    /// Timing and wrap rule.
    pub engine: EngineConfig,
    /// Checkerboard placement.
    pub lattice: Lattice,
    /// Reconstruction dimensions.
    pub geometry: GeometryParams,
    /// Keyframes `STAGE1` through `STAGE6`.
    pub stages: StageTable,
}

#[derive(serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawShowConfig {
    engine: EngineConfig,
    lattice: Lattice,
    geometry: GeometryParams,
    stages: Option<serde_json::Value>,
}

impl Default for RawShowConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            lattice: Lattice::default(),
            geometry: GeometryParams::default(),
            stages: None,
        }
    }
}

impl ShowConfig {
    /// Parse a show from a JSON reader. The stage table is checked on the way in.
    pub fn from_reader<R: std::io::Read>(r: R) -> CubesResult<Self> {
        let raw: RawShowConfig = serde_json::from_reader(r)
            .map_err(|e| SlicedCubesError::serde(format!("parse show JSON: {e}")))?;
        Self::from_raw(raw)
    }

    /// Parse a show from a JSON string.
    pub fn from_json_str(s: &str) -> CubesResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a show from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> CubesResult<Self> {
        use anyhow::Context as _;

        let path = path.as_ref();
        let f = File::open(path).with_context(|| format!("open show '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    fn from_raw(raw: RawShowConfig) -> CubesResult<Self> {
        let stages = match raw.stages {
            Some(value) => {
                let stages: [PieceSetState; STORED_STAGES] = serde_json::from_value(value)
                    .map_err(|e| SlicedCubesError::malformed_table(format!("stages: {e}")))?;
                StageTable::new(stages)?
            }
            None => StageTable::standard(),
        };
        Ok(Self {
            engine: raw.engine,
            lattice: raw.lattice,
            geometry: raw.geometry,
            stages,
        })
    }

    /// Validate every section, including the wrapped transition under the chosen wrap rule.
    pub fn validate(&self) -> CubesResult<()> {
        self.engine.validate()?;
        self.lattice.validate()?;
        self.geometry.validate()?;
        self.stages.check_wrap(self.engine.wrap)
    }

    /// Validate and build the engine this show describes.
    pub fn build_engine(&self) -> CubesResult<Engine> {
        self.validate()?;
        Engine::new(self.stages.clone(), self.engine)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/show.rs"]
mod tests;
