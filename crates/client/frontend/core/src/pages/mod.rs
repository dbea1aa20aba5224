//! Per-page controllers.
//!
//! Each page owns its local state and turns user intents into store
//! [`Command`](crate::Command)s. Replies are fed back by the
//! [`AppController`](crate::AppController), which also decides where errors
//! surface.
mod create;
mod detail;
mod edit;
mod roster;

pub use create::CreatePage;
pub use detail::DetailPage;
pub use edit::EditPage;
pub use roster::RosterPage;
