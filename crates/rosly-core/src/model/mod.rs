// ── Resource descriptors ──
//
// Declarative per-entity-type data: attribute tables, kinds, required
// flags, and command paths. No logic lives here beyond the
// match-based field accessors; everything else is generic.

pub mod bridge;
pub mod dhcp_lease;
pub mod dhcp_network;
pub mod dhcp_option;
pub mod dhcp_option_set;
pub mod dhcp_server;
pub mod dns_record;

pub use bridge::InterfaceBridge;
pub use dhcp_lease::DhcpServerLease;
pub use dhcp_network::DhcpServerNetwork;
pub use dhcp_option::DhcpServerOption;
pub use dhcp_option_set::DhcpServerOptionSet;
pub use dhcp_server::DhcpServer;
pub use dns_record::DnsStaticRecord;
