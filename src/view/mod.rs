//! Visibility state, the projection engine, and the report session that
//! binds them to a loaded document.

pub mod config;
pub mod projection;
pub mod session;
pub mod view_state;
