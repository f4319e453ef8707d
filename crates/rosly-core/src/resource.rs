// ── Resource descriptor trait ──
//
// A resource is a typed entity mirrored between this client and the
// device, addressed either by the opaque identity the device assigned
// on creation, or -- while no identity is known -- by exact match over
// all of its non-empty fields.
//
// Descriptors are pure data: a static field table plus match-based
// accessors. There is no runtime type introspection and no central
// registry of known resource types; the `Default` bound is the factory
// that produces a blank instance of the concrete type when a matched
// record needs to be decoded.

use std::fmt;

/// The semantic kind of a declared field.
///
/// `Ipv4`, `Mac`, and `Domain` travel as strings on the wire but carry
/// a syntax check during structural validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form string.
    Str,
    /// Protocol boolean (`true`/`false`, the device also prints `yes`/`no`).
    Bool,
    /// Decimal integer.
    Int,
    /// Dotted-quad IPv4 address.
    Ipv4,
    /// Colon-separated MAC address.
    Mac,
    /// DNS hostname.
    Domain,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Str => "string",
            Self::Bool => "boolean",
            Self::Int => "integer",
            Self::Ipv4 => "IPv4 address",
            Self::Mac => "MAC address",
            Self::Domain => "domain name",
        };
        write!(f, "{name}")
    }
}

/// One entry in a resource's declared field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Attribute name from the device's point of view (e.g. `mac-address`).
    pub attr: &'static str,
    /// Semantic kind, driving coercion and validation.
    pub kind: FieldKind,
    /// Whether structural validation requires a non-empty value.
    pub required: bool,
}

impl FieldSpec {
    /// A field that must be non-empty on identity-less instances.
    pub const fn required(attr: &'static str, kind: FieldKind) -> Self {
        Self {
            attr,
            kind,
            required: true,
        }
    }

    /// A field that may stay at its zero value.
    pub const fn optional(attr: &'static str, kind: FieldKind) -> Self {
        Self {
            attr,
            kind,
            required: false,
        }
    }
}

/// A typed field value in transit between a resource and the mapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Str(String),
    Bool(bool),
    Int(i64),
}

impl FieldValue {
    /// Zero values are omitted from outgoing requests: the empty
    /// string, `false`, and `0` all mean "not set".
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Str(s) => s.is_empty(),
            Self::Bool(b) => !b,
            Self::Int(i) => *i == 0,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
        }
    }
}

/// Declarative descriptor for one remote entity type.
///
/// Implementations supply data only; all CRUD logic lives in
/// [`Controller`](crate::Controller) and [`mapper`](crate::mapper).
pub trait Resource: Clone + Default + fmt::Debug {
    /// Human-readable entity name for diagnostics (`"dhcp lease"`).
    const NAME: &'static str;

    /// Attribute carrying the device-assigned identity.
    const ID_ATTR: &'static str = ".id";

    /// Command path that creates an object of this type.
    const CREATE_PATH: &'static str;
    /// Command path that lists/queries objects of this type.
    const READ_PATH: &'static str;
    /// Command path that mutates an existing object.
    const UPDATE_PATH: &'static str;
    /// Command path that removes an existing object.
    const DELETE_PATH: &'static str;

    /// The declared non-identity fields, in declaration order.
    const FIELDS: &'static [FieldSpec];

    /// The opaque identity; empty means unresolved/new.
    fn id(&self) -> &str;

    /// Overwrite the identity (used when repopulating from a match).
    fn set_id(&mut self, id: String);

    /// Current value of the field declared under `attr`, or `None` if
    /// the attribute is not declared for this type.
    fn get(&self, attr: &str) -> Option<FieldValue>;

    /// Store a coerced value into the field declared under `attr`.
    ///
    /// Returns `false` when the field cannot be written (unknown
    /// attribute or kind mismatch); the mapper treats that as a
    /// non-fatal, logged condition.
    fn set(&mut self, attr: &str, value: FieldValue) -> bool;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn zero_values() {
        assert!(FieldValue::Str(String::new()).is_zero());
        assert!(FieldValue::Bool(false).is_zero());
        assert!(FieldValue::Int(0).is_zero());

        assert!(!FieldValue::Str("x".to_owned()).is_zero());
        assert!(!FieldValue::Bool(true).is_zero());
        assert!(!FieldValue::Int(-1).is_zero());
    }

    #[test]
    fn display_matches_wire_literals() {
        assert_eq!(FieldValue::Bool(true).to_string(), "true");
        assert_eq!(FieldValue::Int(1500).to_string(), "1500");
        assert_eq!(FieldValue::Str("br0".to_owned()).to_string(), "br0");
    }
}
