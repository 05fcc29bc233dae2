use thiserror::Error;

/// Every way a vector input can be rejected.
///
/// The `Display` text is what the utilities print, so it is written for the
/// person at the prompt rather than for a log file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VectorError {
    #[error("All components must be numbers (int or float).")]
    NotNumeric,
    #[error("All vectors must have the same number of components.")]
    LengthMismatch,
    #[error("At least one vector is required.")]
    NoVectors,
    #[error("Both vectors must have exactly 3 components.")]
    NotThreeDimensional,
    #[error("The input must contain exactly 6 components to form two 3D vectors.")]
    WrongComponentCount,
    #[error("Please provide exactly two vectors.")]
    WrongVectorCount,
    #[error("The input must contain an even number of components to form two equal vectors.")]
    OddComponentCount,
    #[error("Magnitude of one or both vectors is zero. Cannot calculate the angle.")]
    ZeroMagnitude,
    #[error("The magnitude of vector_v is zero. Cannot project onto a zero vector.")]
    ZeroVector,
    #[error("The result is too large to represent.")]
    NotFinite,
    #[error("Invalid component '{0}'. Only numeric values or 'x' are allowed.")]
    InvalidComponent(String),
    #[error("No 'x' found in the components of either vector.")]
    MissingPlaceholder,
    #[error("Found {0} 'x' placeholders; exactly one component may be missing.")]
    MultiplePlaceholders(usize),
    #[error("The component paired with 'x' is zero; no value of 'x' makes the vectors orthogonal.")]
    ZeroCounterpart,
}

pub type Result<T> = std::result::Result<T, VectorError>;
