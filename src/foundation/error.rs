/// Convenience result type used across the crate.
pub type CubesResult<T> = Result<T, SlicedCubesError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Every variant is fatal for state production: the driver stops instead of broadcasting a
/// partially computed tuple.
#[derive(thiserror::Error, Debug)]
pub enum SlicedCubesError {
    /// Clock value, segment duration, phase offset or lattice setting out of contract.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A stage keyframe is out of range or breaks the selector-switch rule.
    #[error("malformed stage table: {0}")]
    MalformedStageTable(String),

    /// Reconstruction parameters that cannot produce a rigid pose.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlicedCubesError {
    /// Build a [`SlicedCubesError::InvalidConfig`] value.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Build a [`SlicedCubesError::MalformedStageTable`] value.
    pub fn malformed_table(msg: impl Into<String>) -> Self {
        Self::MalformedStageTable(msg.into())
    }

    /// Build a [`SlicedCubesError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`SlicedCubesError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SlicedCubesError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
