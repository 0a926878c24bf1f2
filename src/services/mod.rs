//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the user table and session bookkeeping so route
//! handlers can stay focused on request parsing, cookies and rendering.

pub mod session;
pub mod users;
