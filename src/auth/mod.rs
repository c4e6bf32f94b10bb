//! Admin authentication
//!
//! A shared-secret bearer-token gate, not per-user identity: every
//! admin-only operation requires `Authorization: Bearer <token>` equal to
//! the configured admin token. There is no user or session concept.

mod middleware;

pub use middleware::require_admin;
