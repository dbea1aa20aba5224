//! Cross-frontend primitives for presenting the roster.
//!
//! Houses routing, the fighter form builder, page controllers, the message
//! log, and view-model types that both the CLI and future graphical clients
//! can reuse. Nothing here touches a terminal or performs I/O other than the
//! store round trips issued through [`dispatch`].
pub mod command;
pub mod config;
pub mod controller;
pub mod form;
pub mod frontend;
pub mod message;
pub mod pages;
pub mod route;
pub mod view_model;

pub use command::{Command, Reply, Request, Response, Ticket, dispatch};
pub use config::{FrontendConfig, MessageConfig};
pub use controller::{AppController, Page};
pub use form::{FighterForm, FormEdit, FormField, FormMode};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use pages::{CreatePage, DetailPage, EditPage, RosterPage};
pub use route::{Route, RouteParseError};
pub use view_model::{FighterCardView, FighterDetailView, StatBarView};
