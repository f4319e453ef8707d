// ── Core error types ──
//
// The domain-level failure taxonomy. Transport failures from
// `rosly-api` are wrapped, never interpreted: no operation retries,
// and no error is swallowed into a default success.

use thiserror::Error;

use crate::resource::FieldKind;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum Error {
    // ── Structural validation ────────────────────────────────────────
    /// An identity-less resource failed its structural check (required
    /// field empty, or a formatted field with bad syntax).
    #[error("invalid {resource}: {message}")]
    Validation {
        resource: &'static str,
        message: String,
    },

    // ── Resolution ───────────────────────────────────────────────────
    /// Create found an existing match before writing.
    #[error("{resource} already exists")]
    AlreadyExists { resource: &'static str },

    /// Read/Update/Delete resolved zero matches.
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// A query meant to resolve one object matched two or more.
    #[error("ambiguous reply: {matches} objects match a single {resource}")]
    Ambiguous {
        resource: &'static str,
        matches: usize,
    },

    // ── Reply decoding ───────────────────────────────────────────────
    /// The device accepted a create command but returned no identity.
    #[error("unexpected empty reply from device: no creation id returned")]
    EmptyReply,

    /// A record value cannot be coerced into its declared field kind.
    #[error("cannot coerce attribute `{attr}` value `{value}` into {kind}")]
    Cast {
        attr: &'static str,
        value: String,
        kind: FieldKind,
    },

    // ── Transport (wrapped, not interpreted) ─────────────────────────
    #[error(transparent)]
    Api(#[from] rosly_api::Error),
}
