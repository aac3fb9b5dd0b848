//! Core error types for diagram construction and output
//!
//! Building and rendering a diagram cannot fail for well-typed input. The
//! variants here cover caller-contract violations and the file boundary.

use std::path::PathBuf;

use thiserror::Error;

use super::ElementId;

/// Core error types for diagram construction and output
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Missing endpoint: link {from} -> {to} references {endpoint}, which is not part of this diagram")]
    MissingEndpoint {
        endpoint: ElementId,
        from: ElementId,
        to: ElementId,
    },

    #[error("Nesting too deep: subgraph at depth {depth} exceeds the maximum of {max}")]
    NestingTooDeep { depth: usize, max: usize },

    #[error("IO error writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DiagramError {
    /// Create a new missing endpoint error
    pub fn missing_endpoint(endpoint: ElementId, from: ElementId, to: ElementId) -> Self {
        Self::MissingEndpoint { endpoint, from, to }
    }

    /// Create a new nesting error
    pub fn nesting_too_deep(depth: usize, max: usize) -> Self {
        Self::NestingTooDeep { depth, max }
    }

    /// Create a new IO error tagged with the path that was being written
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_endpoint() {
        let error = DiagramError::missing_endpoint(
            ElementId::new("7"),
            ElementId::new("0"),
            ElementId::new("7"),
        );
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Missing endpoint"));
        assert!(error_msg.contains("0 -> 7"));
    }

    #[test]
    fn test_nesting_too_deep() {
        let error = DiagramError::nesting_too_deep(65, 64);
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Nesting too deep"));
        assert!(error_msg.contains("depth 65"));
        assert!(error_msg.contains("64"));
    }

    #[test]
    fn test_io_error_includes_path() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error = DiagramError::io_error("out/diagram.mmd", io_err);
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("out/diagram.mmd"));
        assert!(error_msg.contains("denied"));
    }
}
