//! Store abstraction traits.
//!
//! [`FighterStore`] is the only contract the view layer depends on. Every
//! operation is a single round trip: nothing is retried, and each failure is
//! returned to the caller exactly once.

use async_trait::async_trait;
use roster_core::{Fighter, FighterId, FighterPatch, NewFighter, ValidationError};

// ============================================================================
// Error Types
// ============================================================================

/// The persistence call itself failed.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Store responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode store response: {0}")]
    Decode(String),

    #[error("Store returned an invalid record: {0}")]
    InvalidRecord(String),

    /// Failure injected by a test double.
    #[error("Injected failure: {0}")]
    Injected(String),
}

/// Errors surfaced by [`FighterStore`] operations.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// Rejected before any request was made.
    #[error("Invalid fighter: {0}")]
    Validation(#[from] ValidationError),

    #[error("Fighter not found: {0}")]
    NotFound(FighterId),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

// ============================================================================
// Store Facade
// ============================================================================

/// CRUD access to the fighter table.
///
/// Implementations must apply [`NewFighter::normalized`] on create and
/// [`FighterPatch::normalized`] on update before touching storage, so every
/// backend rejects the same input.
#[async_trait]
pub trait FighterStore: Send + Sync {
    /// All fighters, newest first.
    async fn list(&self) -> Result<Vec<Fighter>, StoreError>;

    /// A single fighter by id.
    async fn get(&self, id: &FighterId) -> Result<Fighter, StoreError>;

    /// Persists a new fighter and returns it with its assigned id.
    async fn create(&self, fighter: NewFighter) -> Result<Fighter, StoreError>;

    /// Overwrites the present fields of `patch` on the fighter with `id`.
    ///
    /// Last write wins; there is no revision check.
    async fn update(&self, id: &FighterId, patch: FighterPatch) -> Result<(), StoreError>;

    /// Removes the fighter with `id`.
    async fn delete(&self, id: &FighterId) -> Result<(), StoreError>;

    /// Short backend name for logs (e.g. "supabase", "memory").
    fn backend(&self) -> &str;
}
