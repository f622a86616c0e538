//! Concrete operator used by the binary.

/// Implements every operator port over the infrastructure layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Operator;

impl Operator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}
