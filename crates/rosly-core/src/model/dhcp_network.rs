use crate::resource::{FieldKind, FieldSpec, FieldValue, Resource};

/// DHCP network definition (`/ip/dhcp-server/network`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DhcpServerNetwork {
    pub id: String,
    pub address: String,
    pub boot_file_name: String,
    pub comment: String,
    pub dhcp_option: String,
    pub dhcp_option_set: String,
    pub domain: String,
    pub dns_server: String,
    pub gateway: String,
    pub netmask: String,
    pub next_server: String,
    pub ntp_server: String,
    pub wins_server: String,
}

impl Resource for DhcpServerNetwork {
    const NAME: &'static str = "dhcp network";
    const CREATE_PATH: &'static str = "/ip/dhcp-server/network/add";
    const READ_PATH: &'static str = "/ip/dhcp-server/network/print";
    const UPDATE_PATH: &'static str = "/ip/dhcp-server/network/set";
    const DELETE_PATH: &'static str = "/ip/dhcp-server/network/remove";

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::optional("address", FieldKind::Str),
        FieldSpec::optional("boot-file-name", FieldKind::Str),
        FieldSpec::optional("comment", FieldKind::Str),
        FieldSpec::optional("dhcp-option", FieldKind::Str),
        FieldSpec::optional("dhcp-option-set", FieldKind::Str),
        FieldSpec::optional("domain", FieldKind::Domain),
        FieldSpec::optional("dns-server", FieldKind::Ipv4),
        FieldSpec::optional("gateway", FieldKind::Ipv4),
        FieldSpec::optional("netmask", FieldKind::Str),
        FieldSpec::optional("next-server", FieldKind::Ipv4),
        FieldSpec::optional("ntp-server", FieldKind::Ipv4),
        FieldSpec::optional("wins-server", FieldKind::Ipv4),
    ];

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn get(&self, attr: &str) -> Option<FieldValue> {
        let value = match attr {
            "address" => &self.address,
            "boot-file-name" => &self.boot_file_name,
            "comment" => &self.comment,
            "dhcp-option" => &self.dhcp_option,
            "dhcp-option-set" => &self.dhcp_option_set,
            "domain" => &self.domain,
            "dns-server" => &self.dns_server,
            "gateway" => &self.gateway,
            "netmask" => &self.netmask,
            "next-server" => &self.next_server,
            "ntp-server" => &self.ntp_server,
            "wins-server" => &self.wins_server,
            _ => return None,
        };
        Some(FieldValue::Str(value.clone()))
    }

    fn set(&mut self, attr: &str, value: FieldValue) -> bool {
        let FieldValue::Str(v) = value else {
            return false;
        };
        let slot = match attr {
            "address" => &mut self.address,
            "boot-file-name" => &mut self.boot_file_name,
            "comment" => &mut self.comment,
            "dhcp-option" => &mut self.dhcp_option,
            "dhcp-option-set" => &mut self.dhcp_option_set,
            "domain" => &mut self.domain,
            "dns-server" => &mut self.dns_server,
            "gateway" => &mut self.gateway,
            "netmask" => &mut self.netmask,
            "next-server" => &mut self.next_server,
            "ntp-server" => &mut self.ntp_server,
            "wins-server" => &mut self.wins_server,
            _ => return false,
        };
        *slot = v;
        true
    }
}
