//! Interactive terminal client for a blog REST backend.
//!
//! ## Configuration
//!
//! Two environment variables, both optional:
//!
//! - `BLOG_CONSOLE_BASE_URL` overrides the backend base URL. The value is
//!   normalized to a single `/api` suffix.
//! - `BLOG_CONSOLE_STATE_DIR` overrides where the session state directory
//!   (`.blog_console/session/`) is created. Defaults to the current working
//!   directory.
//!
//! Blank values are ignored. Logging verbosity follows `RUST_LOG`.
//!
//! ## Session contract
//!
//! The persisted session is the pair of bearer token and serialized user,
//! hydrated once at startup without any network call. Login and register
//! replace the pair wholesale; logout clears it; `refresh` replaces only the
//! user. A partial or unreadable store degrades to signed-out.
//!
//! Authorization note: every role/ownership check in the shell is a UI
//! affordance only. Enforcement of who may mutate what belongs to the
//! backend, and the shell treats its own gating as non-authoritative.

pub mod commands;
pub mod config;
pub mod gateway;
pub mod pages;
pub mod render;
pub mod session;
pub mod shell;
