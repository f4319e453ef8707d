use crate::resource::{FieldKind, FieldSpec, FieldValue, Resource};

/// DHCP option definition (`/ip/dhcp-server/option`).
///
/// The device expects option *values* wrapped in single quotes:
/// `value: "'192.168.0.2'"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DhcpServerOption {
    pub id: String,
    /// Option code, e.g. 66 for next-server.
    pub code: i64,
    pub name: String,
    pub value: String,
}

impl Resource for DhcpServerOption {
    const NAME: &'static str = "dhcp option";
    const CREATE_PATH: &'static str = "/ip/dhcp-server/option/add";
    const READ_PATH: &'static str = "/ip/dhcp-server/option/print";
    const UPDATE_PATH: &'static str = "/ip/dhcp-server/option/set";
    const DELETE_PATH: &'static str = "/ip/dhcp-server/option/remove";

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("code", FieldKind::Int),
        FieldSpec::required("name", FieldKind::Str),
        FieldSpec::optional("value", FieldKind::Str),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn get(&self, attr: &str) -> Option<FieldValue> {
        match attr {
            "code" => Some(FieldValue::Int(self.code)),
            "name" => Some(FieldValue::Str(self.name.clone())),
            "value" => Some(FieldValue::Str(self.value.clone())),
            _ => None,
        }
    }

    fn set(&mut self, attr: &str, value: FieldValue) -> bool {
        match (attr, value) {
            ("code", FieldValue::Int(v)) => self.code = v,
            ("name", FieldValue::Str(v)) => self.name = v,
            ("value", FieldValue::Str(v)) => self.value = v,
            _ => return false,
        }
        true
    }
}
