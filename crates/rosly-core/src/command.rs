// ── Command building ──
//
// Assembles one protocol sentence from a path, an optional output
// restriction, and an attribute set. Attribute iteration order comes
// from a HashMap and is NOT deterministic; only the proplist keeps
// the order it was given. Callers and tests must not depend on
// directive ordering among attributes.

use rosly_api::Command;

use crate::mapper::Attributes;

/// Whether attribute words assign values or filter on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandMode {
    /// `=attr=value` assignment directives (add/set/remove).
    Mutate,
    /// `?=attr=value` equality-filter directives (print).
    Query,
}

/// Build a command sentence.
///
/// The path comes first. If `proplist` is given, a single
/// `=.proplist=a,b,c` word restricts the reply to the named
/// attributes. Every non-empty attribute then contributes one word in
/// the shape `mode` dictates.
pub fn build_command(
    path: &str,
    proplist: Option<&[&str]>,
    attrs: &Attributes,
    mode: CommandMode,
) -> Command {
    let mut command = Command::new(path);

    if let Some(props) = proplist {
        command.push(format!("=.proplist={}", props.join(",")));
    }

    for (attr, value) in attrs {
        if value.is_empty() {
            continue;
        }

        match mode {
            CommandMode::Mutate => command.push(format!("={attr}={value}")),
            CommandMode::Query => command.push(format!("?={attr}={value}")),
        }
    }

    command
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    fn word_set(command: &Command) -> HashSet<String> {
        command.words().iter().skip(1).cloned().collect()
    }

    #[test]
    fn mutate_mode_emits_assignments() {
        let command = build_command(
            "/interface/bridge/add",
            None,
            &attrs(&[("name", "br0"), ("disabled", "true")]),
            CommandMode::Mutate,
        );

        assert_eq!(command.path(), "/interface/bridge/add");
        // Attribute order is unspecified -- compare as a set.
        assert_eq!(
            word_set(&command),
            HashSet::from(["=name=br0".to_owned(), "=disabled=true".to_owned()])
        );
    }

    #[test]
    fn query_mode_emits_filters() {
        let command = build_command(
            "/interface/bridge/print",
            None,
            &attrs(&[("name", "br0")]),
            CommandMode::Query,
        );

        assert_eq!(command.words(), &["/interface/bridge/print", "?=name=br0"]);
    }

    #[test]
    fn proplist_is_first_directive_in_given_order() {
        let command = build_command(
            "/ip/dhcp-server/lease/print",
            Some(&[".id", "address"]),
            &attrs(&[("server", "dhcp1")]),
            CommandMode::Query,
        );

        assert_eq!(command.words()[1], "=.proplist=.id,address");
        assert!(word_set(&command).contains("?=server=dhcp1"));
    }

    #[test]
    fn empty_values_are_skipped() {
        let command = build_command(
            "/ip/dns/static/add",
            None,
            &attrs(&[("name", "host"), ("comment", "")]),
            CommandMode::Mutate,
        );

        assert_eq!(command.words(), &["/ip/dns/static/add", "=name=host"]);
    }

    #[test]
    fn bare_path_when_nothing_to_send() {
        let command = build_command("/system/reboot", None, &Attributes::new(), CommandMode::Mutate);
        assert_eq!(command.words(), &["/system/reboot"]);
    }
}
