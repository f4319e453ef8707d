//! Protocol-level client for the RouterOS line-oriented management API.
//!
//! This crate owns the wire-facing vocabulary of the workspace:
//!
//! - **[`Command`]** — one protocol sentence: a command path plus
//!   attribute and filter words.
//! - **[`Reply`] / [`Record`]** — the result of executing a command:
//!   zero or more matched records plus one terminal record.
//! - **[`Connection`]** — the transport contract. Implementors own the
//!   socket, TLS, the login handshake, and sentence framing; this crate
//!   never opens a connection itself.
//! - **[`Client`]** — serializes command execution over one
//!   [`Connection`]. The protocol is strict request/reply with no
//!   pipelining, so at most one command may be in flight per connection.
//! - **[`Config`]** — connection parameters (address, credentials, TLS
//!   mode), validated here and handed to the transport unchanged.
//!
//! Resource semantics (typed descriptors, CRUD operations) live in
//! `rosly-core`, layered on top of this crate.

pub mod client;
pub mod command;
pub mod config;
pub mod connection;
pub mod error;
pub mod reply;

// ── Primary re-exports ──────────────────────────────────────────────
pub use client::Client;
pub use command::Command;
pub use config::{Config, TlsMode};
pub use connection::Connection;
pub use error::Error;
pub use reply::{RET_KEY, Record, Reply};
