// Command execution serialized over one connection.
//
// The management protocol is strict request/reply with no pipelining
// and no request tags: issuing a second command before the first
// reply arrives would desynchronize reply matching. The mutex below
// exists for that reason alone; distinct clients (distinct
// connections) are fully independent.

use std::sync::Mutex;

use tracing::debug;

use crate::command::Command;
use crate::connection::Connection;
use crate::error::Error;
use crate::reply::Reply;

/// Owns one [`Connection`] and serializes all commands through it.
#[derive(Debug)]
pub struct Client<C> {
    conn: Mutex<C>,
}

impl<C: Connection> Client<C> {
    /// Wrap an already-established connection.
    pub fn new(conn: C) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Execute one command, holding the connection exclusively until
    /// its reply arrives. Transport errors propagate unchanged.
    pub fn run(&self, command: &Command) -> Result<Reply, Error> {
        let mut conn = self.conn.lock().expect("connection lock poisoned");

        debug!(command = %command, "->");
        let reply = conn.execute(command)?;
        debug!(records = reply.records.len(), "<-");

        Ok(reply)
    }

    /// Close the underlying connection.
    ///
    /// Safe to call once per client lifetime; the client is unusable
    /// afterwards and should be dropped.
    pub fn close(&self) {
        self.conn.lock().expect("connection lock poisoned").close();
    }
}
