use crate::resource::{FieldKind, FieldSpec, FieldValue, Resource};

/// DHCP server instance bound to one interface (`/ip/dhcp-server`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DhcpServer {
    pub id: String,
    pub disabled: bool,
    pub name: String,
    pub interface: String,
}

impl Resource for DhcpServer {
    const NAME: &'static str = "dhcp server";
    const CREATE_PATH: &'static str = "/ip/dhcp-server/add";
    const READ_PATH: &'static str = "/ip/dhcp-server/print";
    const UPDATE_PATH: &'static str = "/ip/dhcp-server/set";
    const DELETE_PATH: &'static str = "/ip/dhcp-server/remove";

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::optional("disabled", FieldKind::Bool),
        FieldSpec::optional("name", FieldKind::Str),
        FieldSpec::required("interface", FieldKind::Str),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn get(&self, attr: &str) -> Option<FieldValue> {
        match attr {
            "disabled" => Some(FieldValue::Bool(self.disabled)),
            "name" => Some(FieldValue::Str(self.name.clone())),
            "interface" => Some(FieldValue::Str(self.interface.clone())),
            _ => None,
        }
    }

    fn set(&mut self, attr: &str, value: FieldValue) -> bool {
        match (attr, value) {
            ("disabled", FieldValue::Bool(v)) => self.disabled = v,
            ("name", FieldValue::Str(v)) => self.name = v,
            ("interface", FieldValue::Str(v)) => self.interface = v,
            _ => return false,
        }
        true
    }
}
