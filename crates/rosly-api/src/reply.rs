// Reply envelope for one executed command.
//
// The device answers a command with zero or more `!re` sentences (one
// per matched object) followed by exactly one `!done` sentence. Only
// the attribute maps survive into this crate; sentence framing stays
// in the transport.

use std::collections::HashMap;

/// Attribute map of one matched object, as returned by the device.
pub type Record = HashMap<String, String>;

/// Reserved terminal-record key carrying the identity assigned to a
/// freshly created object.
pub const RET_KEY: &str = "ret";

/// The decoded result of executing one [`Command`](crate::Command).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    /// One record per matched object, in device order.
    pub records: Vec<Record>,
    /// The terminal record. Usually empty; carries [`RET_KEY`] after a
    /// successful `add`.
    pub done: Record,
}

impl Reply {
    /// Build a reply from matched records and a terminal record.
    pub fn new(records: Vec<Record>, done: Record) -> Self {
        Self { records, done }
    }

    /// The identity assigned by the device on creation, if the
    /// terminal record carries a non-empty one.
    pub fn created_id(&self) -> Option<&str> {
        self.done
            .get(RET_KEY)
            .map(String::as_str)
            .filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn created_id_reads_ret_key() {
        let reply = Reply::new(Vec::new(), Record::from([("ret".to_owned(), "*7".to_owned())]));
        assert_eq!(reply.created_id(), Some("*7"));
    }

    #[test]
    fn created_id_ignores_empty_value() {
        let reply = Reply::new(Vec::new(), Record::from([("ret".to_owned(), String::new())]));
        assert_eq!(reply.created_id(), None);
    }

    #[test]
    fn created_id_absent_on_plain_done() {
        let reply = Reply::default();
        assert_eq!(reply.created_id(), None);
    }
}
