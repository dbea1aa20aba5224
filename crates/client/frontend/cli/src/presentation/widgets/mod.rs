//! Individual panels composed by [`ui`](super::ui).
pub mod detail;
pub mod footer;
pub mod form;
pub mod header;
pub mod messages;
pub mod roster;
