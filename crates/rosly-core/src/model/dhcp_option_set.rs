use crate::resource::{FieldKind, FieldSpec, FieldValue, Resource};

/// Named set of DHCP options (`/ip/dhcp-server/option/sets`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DhcpServerOptionSet {
    pub id: String,
    pub name: String,
    /// Comma-joined option names, e.g. `next-server,bootfile`.
    pub options: String,
}

impl Resource for DhcpServerOptionSet {
    const NAME: &'static str = "dhcp option set";
    const CREATE_PATH: &'static str = "/ip/dhcp-server/option/sets/add";
    const READ_PATH: &'static str = "/ip/dhcp-server/option/sets/print";
    const UPDATE_PATH: &'static str = "/ip/dhcp-server/option/sets/set";
    const DELETE_PATH: &'static str = "/ip/dhcp-server/option/sets/remove";

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldKind::Str),
        FieldSpec::required("options", FieldKind::Str),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn get(&self, attr: &str) -> Option<FieldValue> {
        match attr {
            "name" => Some(FieldValue::Str(self.name.clone())),
            "options" => Some(FieldValue::Str(self.options.clone())),
            _ => None,
        }
    }

    fn set(&mut self, attr: &str, value: FieldValue) -> bool {
        match (attr, value) {
            ("name", FieldValue::Str(v)) => self.name = v,
            ("options", FieldValue::Str(v)) => self.options = v,
            _ => return false,
        }
        true
    }
}
