use thiserror::Error;

/// Largest grid edge the engine will allocate, in cells.
pub const MAX_GRID_EDGE: u32 = 8192;

/// Failures surfaced at the orchestrator boundary.
///
/// The step kernel, pointer tracker and compositor are total functions and
/// never produce one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid grid dimensions {width}x{height} (each edge must be 1..={max})", max = MAX_GRID_EDGE)]
    InvalidDimensions { width: u32, height: u32 },

    #[error("engine has been disposed")]
    Disposed,

    #[error("invalid configuration patch: {0}")]
    Config(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Config(err.to_string())
    }
}

/// Validate a viewport size before any buffer is allocated.
pub fn check_dimensions(width: u32, height: u32) -> Result<(), EngineError> {
    let edge_ok = |v: u32| v > 0 && v <= MAX_GRID_EDGE;
    if edge_ok(width) && edge_ok(height) {
        Ok(())
    } else {
        Err(EngineError::InvalidDimensions { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_edges_are_rejected() {
        assert_eq!(
            check_dimensions(0, 10),
            Err(EngineError::InvalidDimensions { width: 0, height: 10 })
        );
        assert!(check_dimensions(10, 0).is_err());
    }

    #[test]
    fn oversized_edges_are_rejected() {
        assert!(check_dimensions(MAX_GRID_EDGE + 1, 4).is_err());
        assert!(check_dimensions(MAX_GRID_EDGE, 4).is_ok());
    }

    #[test]
    fn json_errors_become_config_errors() {
        let err: EngineError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, EngineError::Config(_)));
        assert!(err.to_string().starts_with("invalid configuration patch"));
    }
}
