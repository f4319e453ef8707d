use crate::resource::{FieldKind, FieldSpec, FieldValue, Resource};

/// Bridge interface (`/interface/bridge`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceBridge {
    pub id: String,
    pub comment: String,
    pub disabled: bool,
    pub fast_forward: bool,
    /// Time spent in listening/learning state, e.g. `30s`.
    pub forward_delay: String,
    pub mtu: i64,
    pub name: String,
}

impl Resource for InterfaceBridge {
    const NAME: &'static str = "interface bridge";
    const CREATE_PATH: &'static str = "/interface/bridge/add";
    const READ_PATH: &'static str = "/interface/bridge/print";
    const UPDATE_PATH: &'static str = "/interface/bridge/set";
    const DELETE_PATH: &'static str = "/interface/bridge/remove";

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::optional("comment", FieldKind::Str),
        FieldSpec::optional("disabled", FieldKind::Bool),
        FieldSpec::optional("fast-forward", FieldKind::Bool),
        FieldSpec::optional("forward-delay", FieldKind::Str),
        FieldSpec::optional("mtu", FieldKind::Int),
        FieldSpec::required("name", FieldKind::Str),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn get(&self, attr: &str) -> Option<FieldValue> {
        match attr {
            "comment" => Some(FieldValue::Str(self.comment.clone())),
            "disabled" => Some(FieldValue::Bool(self.disabled)),
            "fast-forward" => Some(FieldValue::Bool(self.fast_forward)),
            "forward-delay" => Some(FieldValue::Str(self.forward_delay.clone())),
            "mtu" => Some(FieldValue::Int(self.mtu)),
            "name" => Some(FieldValue::Str(self.name.clone())),
            _ => None,
        }
    }

    fn set(&mut self, attr: &str, value: FieldValue) -> bool {
        match (attr, value) {
            ("comment", FieldValue::Str(v)) => self.comment = v,
            ("disabled", FieldValue::Bool(v)) => self.disabled = v,
            ("fast-forward", FieldValue::Bool(v)) => self.fast_forward = v,
            ("forward-delay", FieldValue::Str(v)) => self.forward_delay = v,
            ("mtu", FieldValue::Int(v)) => self.mtu = v,
            ("name", FieldValue::Str(v)) => self.name = v,
            _ => return false,
        }
        true
    }
}
