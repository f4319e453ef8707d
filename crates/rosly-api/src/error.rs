use thiserror::Error;

/// Top-level error type for the `rosly-api` crate.
///
/// Transport failures are carried opaquely: the [`Connection`]
/// implementor decides what can go wrong on the wire, and this crate
/// passes it through without interpretation. `rosly-core` maps these
/// into its domain taxonomy.
///
/// [`Connection`]: crate::connection::Connection
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// Opaque failure from the transport layer (connection refused,
    /// framing error, login rejected, timeout, ...).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    // ── Configuration ───────────────────────────────────────────────
    /// The device address is not a usable `ipv4:port` pair.
    #[error("invalid device address: {0}")]
    InvalidAddress(String),

    /// A required credential field is empty.
    #[error("missing credential: {0}")]
    MissingCredentials(&'static str),
}

impl Error {
    /// Wrap any transport-layer failure.
    ///
    /// Convenience for [`Connection`](crate::connection::Connection)
    /// implementors.
    pub fn transport(source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        Self::Transport(source.into())
    }

    /// Returns `true` if this error came from the transport layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
