//! Generic typed CRUD engine over the RouterOS management API.
//!
//! This crate layers resource semantics on top of `rosly-api`:
//!
//! - **[`Resource`]** — a declarative descriptor trait: one identity
//!   field, a static table of declared fields (attribute name, kind,
//!   required flag), and the four command paths. Implementations are
//!   pure data plus field accessors; see [`model`] for the shipped set.
//!
//! - **[`mapper`]** — the bidirectional bridge between a typed resource
//!   instance and the flat attribute maps the device speaks: typed
//!   coercion on the way in, stringification on the way out, and
//!   structural validation for identity-less instances.
//!
//! - **[`build_command`]** — assembles a protocol sentence from a path,
//!   an optional proplist, and an attribute set, in either mutate or
//!   query mode.
//!
//! - **[`Controller`]** — the five generic operations (create, read,
//!   update, delete, exists) over any [`Resource`]. Every mutating
//!   operation re-resolves identity against current device state
//!   immediately before acting; ambiguity is always surfaced, never
//!   silently resolved to "first match".

pub mod command;
pub mod controller;
pub mod error;
pub mod mapper;
pub mod model;
pub mod resource;

// ── Primary re-exports ──────────────────────────────────────────────
pub use command::{CommandMode, build_command};
pub use controller::Controller;
pub use error::Error;
pub use resource::{FieldKind, FieldSpec, FieldValue, Resource};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    DhcpServer, DhcpServerLease, DhcpServerNetwork, DhcpServerOption, DhcpServerOptionSet,
    DnsStaticRecord, InterfaceBridge,
};
