use crate::resource::{FieldKind, FieldSpec, FieldValue, Resource};

/// Static DNS entry (`/ip/dns/static`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsStaticRecord {
    pub id: String,
    pub address: String,
    pub comment: String,
    pub disabled: bool,
    pub name: String,
    /// Record TTL, e.g. `1w` or `1d`.
    pub ttl: String,
}

impl Resource for DnsStaticRecord {
    const NAME: &'static str = "dns static record";
    const CREATE_PATH: &'static str = "/ip/dns/static/add";
    const READ_PATH: &'static str = "/ip/dns/static/print";
    const UPDATE_PATH: &'static str = "/ip/dns/static/set";
    const DELETE_PATH: &'static str = "/ip/dns/static/remove";

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("address", FieldKind::Ipv4),
        FieldSpec::optional("comment", FieldKind::Str),
        FieldSpec::optional("disabled", FieldKind::Bool),
        FieldSpec::required("name", FieldKind::Str),
        FieldSpec::optional("ttl", FieldKind::Str),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn get(&self, attr: &str) -> Option<FieldValue> {
        match attr {
            "address" => Some(FieldValue::Str(self.address.clone())),
            "comment" => Some(FieldValue::Str(self.comment.clone())),
            "disabled" => Some(FieldValue::Bool(self.disabled)),
            "name" => Some(FieldValue::Str(self.name.clone())),
            "ttl" => Some(FieldValue::Str(self.ttl.clone())),
            _ => None,
        }
    }

    fn set(&mut self, attr: &str, value: FieldValue) -> bool {
        match (attr, value) {
            ("address", FieldValue::Str(v)) => self.address = v,
            ("comment", FieldValue::Str(v)) => self.comment = v,
            ("disabled", FieldValue::Bool(v)) => self.disabled = v,
            ("name", FieldValue::Str(v)) => self.name = v,
            ("ttl", FieldValue::Str(v)) => self.ttl = v,
            _ => return false,
        }
        true
    }
}
