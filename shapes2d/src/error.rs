/// Failures raised while building shapes or ingesting shape documents.
///
/// Finding no intersection is never an error; only structurally invalid input is.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// Fewer vertices than the polygon kind requires.
    TooFewVertices { min: usize, got: usize },
    /// A fixed-arity polygon (triangle, quadrilateral) got the wrong count.
    VertexCount { expected: usize, got: usize },
    /// Edges passed to `Polygon::from_edges` do not form a closed chain.
    DisconnectedEdges { index: usize },
    /// A document of one shape kind was given where another is required.
    UnexpectedKind { expected: &'static str, got: &'static str },
    /// A coordinate or extent is NaN or infinite.
    NonFinite(&'static str),
    /// A value is outside the accepted ingestion bounds.
    OutOfBounds { param: &'static str, got: f64 },
    /// Input exceeds a size cap.
    CapsExceeded { what: &'static str, max: usize, got: usize },
    /// The document could not be parsed or has the wrong shape.
    Json(String),
}

impl ShapeError {
    /// Stable machine-readable code, shared with the JS bindings.
    pub fn code(&self) -> &'static str {
        match self {
            ShapeError::TooFewVertices { .. }
            | ShapeError::VertexCount { .. }
            | ShapeError::DisconnectedEdges { .. }
            | ShapeError::UnexpectedKind { .. } => "invalid_structure",
            ShapeError::NonFinite(_) => "non_finite",
            ShapeError::OutOfBounds { .. } => "out_of_bounds",
            ShapeError::CapsExceeded { .. } => "caps_exceeded",
            ShapeError::Json(_) => "json_parse",
        }
    }
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeError::TooFewVertices { min, got } => {
                write!(f, "Minimum number of vertices is {} (got {})", min, got)
            }
            ShapeError::VertexCount { expected, got } => {
                write!(f, "Expected number of vertices is {} (got {})", expected, got)
            }
            ShapeError::DisconnectedEdges { index } => {
                write!(f, "Edge {} does not start where the previous edge ends", index)
            }
            ShapeError::UnexpectedKind { expected, got } => write!(f, "Expected a {} (got {})", expected, got),
            ShapeError::NonFinite(param) => write!(f, "Parameter '{}' must be finite", param),
            ShapeError::OutOfBounds { param, got } => {
                write!(f, "Parameter '{}' out of bounds: {}", param, got)
            }
            ShapeError::CapsExceeded { what, max, got } => {
                write!(f, "Too many {}: {} > {}", what, got, max)
            }
            ShapeError::Json(msg) => write!(f, "Invalid shape document: {}", msg),
        }
    }
}

impl std::error::Error for ShapeError {}

impl From<serde_json::Error> for ShapeError {
    fn from(e: serde_json::Error) -> Self { ShapeError::Json(e.to_string()) }
}

pub type ShapeResult<T> = Result<T, ShapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_and_codes() {
        let e = ShapeError::TooFewVertices { min: 3, got: 2 };
        assert_eq!(e.code(), "invalid_structure");
        assert!(e.to_string().starts_with("Minimum number of vertices is 3"));
        assert_eq!(ShapeError::NonFinite("x").code(), "non_finite");
    }
}
