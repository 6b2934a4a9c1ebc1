//! Web layer for the subway network.
//!
//! Provides JSON endpoints for managing stations and lines and for querying
//! shortest paths.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
