// ── Field mapping ──
//
// The bridge between a typed resource instance and the flat
// attribute maps the device speaks. Three jobs:
//
//   to_attributes  -- typed instance -> outgoing attribute set
//   from_record    -- matched record -> freshly populated instance
//   validate       -- structural check for identity-less instances
//
// Two conditions are tolerated and logged instead of failing: a reply
// record missing a declared attribute (the field keeps its zero
// value), and a declared field the concrete type cannot store.

use std::collections::HashMap;
use std::net::Ipv4Addr;

use tracing::warn;

use rosly_api::Record;

use crate::error::Error;
use crate::resource::{FieldKind, FieldSpec, FieldValue, Resource};

/// Outgoing attribute set: attribute name -> stringified value.
pub type Attributes = HashMap<String, String>;

/// Flatten a resource into the attribute set for an outgoing request.
///
/// Zero-valued fields (empty string, `false`, `0`) are omitted; the
/// identity attribute is included when the resource carries one. A
/// field whose accessor disagrees with its declared kind is a mapping
/// error.
pub fn to_attributes<R: Resource>(resource: &R) -> Result<Attributes, Error> {
    let mut attrs = Attributes::new();

    if !resource.id().is_empty() {
        attrs.insert(R::ID_ATTR.to_owned(), resource.id().to_owned());
    }

    for spec in R::FIELDS {
        let Some(value) = resource.get(spec.attr) else {
            warn!(attr = spec.attr, "declared field has no accessor, skipping");
            continue;
        };

        if value.is_zero() {
            continue;
        }

        if !kind_matches(spec.kind, &value) {
            return Err(Error::Cast {
                attr: spec.attr,
                value: value.to_string(),
                kind: spec.kind,
            });
        }

        attrs.insert(spec.attr.to_owned(), value.to_string());
    }

    Ok(attrs)
}

/// Populate a blank instance of `R` from one matched record.
///
/// Attributes absent or empty in the record leave the field at its
/// zero value; that is observable but not an error. Coercion failures
/// (non-boolean text, integer overflow) are fatal.
pub fn from_record<R: Resource>(record: &Record) -> Result<R, Error> {
    let mut resource = R::default();

    if let Some(id) = record.get(R::ID_ATTR).filter(|id| !id.is_empty()) {
        resource.set_id(id.clone());
    }

    for spec in R::FIELDS {
        let Some(raw) = record.get(spec.attr).filter(|raw| !raw.is_empty()) else {
            warn!(attr = spec.attr, "attribute has no value in reply, keeping zero value");
            continue;
        };

        let value = coerce(spec, raw)?;

        if !resource.set(spec.attr, value) {
            warn!(attr = spec.attr, "field is not settable, ignoring");
        }
    }

    Ok(resource)
}

/// Structural validation, applied only to identity-less resources.
///
/// A resource with a non-empty identity is fully addressable by that
/// identity alone and may carry partial fields.
pub fn validate<R: Resource>(resource: &R) -> Result<(), Error> {
    if !resource.id().is_empty() {
        return Ok(());
    }

    for spec in R::FIELDS {
        let value = resource.get(spec.attr);
        let empty = value.as_ref().is_none_or(FieldValue::is_zero);

        if spec.required && empty {
            return Err(Error::Validation {
                resource: R::NAME,
                message: format!("required attribute `{}` is empty", spec.attr),
            });
        }

        if empty {
            continue;
        }

        if let Some(FieldValue::Str(text)) = &value {
            check_format(spec, text).map_err(|message| Error::Validation {
                resource: R::NAME,
                message,
            })?;
        }
    }

    Ok(())
}

// ── Coercion ────────────────────────────────────────────────────────

fn kind_matches(kind: FieldKind, value: &FieldValue) -> bool {
    match kind {
        FieldKind::Bool => matches!(value, FieldValue::Bool(_)),
        FieldKind::Int => matches!(value, FieldValue::Int(_)),
        FieldKind::Str | FieldKind::Ipv4 | FieldKind::Mac | FieldKind::Domain => {
            matches!(value, FieldValue::Str(_))
        }
    }
}

fn coerce(spec: &FieldSpec, raw: &str) -> Result<FieldValue, Error> {
    match spec.kind {
        FieldKind::Bool => match raw {
            "true" | "yes" => Ok(FieldValue::Bool(true)),
            "false" | "no" => Ok(FieldValue::Bool(false)),
            _ => Err(Error::Cast {
                attr: spec.attr,
                value: raw.to_owned(),
                kind: spec.kind,
            }),
        },
        // i64 parse rejects overflow outright -- never silent truncation.
        FieldKind::Int => raw.parse::<i64>().map(FieldValue::Int).map_err(|_| Error::Cast {
            attr: spec.attr,
            value: raw.to_owned(),
            kind: spec.kind,
        }),
        FieldKind::Str | FieldKind::Ipv4 | FieldKind::Mac | FieldKind::Domain => {
            Ok(FieldValue::Str(raw.to_owned()))
        }
    }
}

// ── Format checks ───────────────────────────────────────────────────

fn check_format(spec: &FieldSpec, text: &str) -> Result<(), String> {
    let ok = match spec.kind {
        FieldKind::Ipv4 => text.parse::<Ipv4Addr>().is_ok(),
        FieldKind::Mac => is_mac(text),
        FieldKind::Domain => is_hostname(text),
        FieldKind::Str | FieldKind::Bool | FieldKind::Int => true,
    };

    if ok {
        Ok(())
    } else {
        Err(format!(
            "attribute `{}`: `{text}` is not a valid {}",
            spec.attr, spec.kind
        ))
    }
}

fn is_mac(text: &str) -> bool {
    let sep = if text.contains('-') { '-' } else { ':' };
    let groups: Vec<&str> = text.split(sep).collect();

    groups.len() == 6
        && groups
            .iter()
            .all(|g| g.len() == 2 && g.bytes().all(|b| b.is_ascii_hexdigit()))
}

fn is_hostname(text: &str) -> bool {
    if text.is_empty() || text.len() > 253 {
        return false;
    }

    text.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
            && !label.starts_with('-')
            && !label.ends_with('-')
    })
}
