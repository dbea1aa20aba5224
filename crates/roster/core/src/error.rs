//! Validation errors raised before anything reaches a store.

/// Input rejected by the model.
///
/// These are never retried: the caller must change the input first.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Name is empty or whitespace only.
    #[error("Fighter name is required")]
    EmptyName,

    /// A stat could not be interpreted as a number (`NaN` or infinite).
    #[error("Stat value {value} is not a finite number")]
    NonFiniteStat { value: f64 },
}
