// The consumed transport contract.
//
// Implementors own everything below the sentence level: the TCP
// socket, optional TLS, the login handshake, word encoding, and reply
// framing. Timeouts and cancellation are theirs too -- the layers
// above never retry and never inspect connection parameters.

use crate::command::Command;
use crate::error::Error;
use crate::reply::Reply;

/// A live, authenticated session with one device.
///
/// `execute` is inherently request/reply: the implementor must not
/// return until the terminal record for *this* command has arrived.
/// Serialization across callers is handled by
/// [`Client`](crate::Client), not here.
pub trait Connection {
    /// Execute one command and decode its reply.
    ///
    /// Failures are surfaced as [`Error::Transport`] and propagated to
    /// the caller unchanged.
    fn execute(&mut self, command: &Command) -> Result<Reply, Error>;

    /// Tear down the session. Called at most once per connection.
    fn close(&mut self);
}
