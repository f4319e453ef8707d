// One protocol sentence, kept as an ordered word list.
//
// The wire dialect is line oriented: a command path word
// (`/ip/dhcp-server/lease/print`) followed by attribute words
// (`=address=10.0.0.1`), filter words (`?=name=dhcp1`), and at most
// one proplist word (`=.proplist=.id,name`). Keeping the words
// structured means the transport never has to re-split a flat string.

use std::fmt;

/// A single command sentence to execute on the device.
///
/// The first word is always the command path; every other word is a
/// directive appended by the caller. No escaping is performed beyond
/// literal concatenation -- malformed values are the caller's
/// responsibility, exactly as on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    words: Vec<String>,
}

impl Command {
    /// Start a command at the given path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            words: vec![path.into()],
        }
    }

    /// Append one directive word.
    pub fn push(&mut self, word: impl Into<String>) {
        self.words.push(word.into());
    }

    /// The command path (first word).
    pub fn path(&self) -> &str {
        self.words.first().map_or("", String::as_str)
    }

    /// All words in order, path included.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn path_is_first_word() {
        let mut cmd = Command::new("/interface/bridge/print");
        cmd.push("?=name=br0");
        assert_eq!(cmd.path(), "/interface/bridge/print");
    }

    #[test]
    fn display_joins_words_with_spaces() {
        let mut cmd = Command::new("/ip/dns/static/add");
        cmd.push("=name=host.example.tld");
        cmd.push("=address=169.254.169.254");
        assert_eq!(
            cmd.to_string(),
            "/ip/dns/static/add =name=host.example.tld =address=169.254.169.254"
        );
    }

    #[test]
    fn words_keep_insertion_order() {
        let mut cmd = Command::new("/ip/dhcp-server/print");
        cmd.push("=.proplist=.id");
        cmd.push("?=name=dhcp1");
        assert_eq!(
            cmd.words(),
            &["/ip/dhcp-server/print", "=.proplist=.id", "?=name=dhcp1"]
        );
    }
}
