//! Evaluator name decorations.
//!
//! A row name can carry up to three decorations:
//!
//! ```text
//! Phalanx: Evaluator 12: [Jacobian] Gather Solution: Tangent
//! └──── ordinal ───────┘ └─ tag ──┘ └─ base ──────┘ └ qualifier
//! ```
//!
//! Each transform here is total: a name without the decoration it
//! handles is returned unchanged.

use crate::utils::config::{COMPONENT_PREFIX, ORDINAL_PREFIX, QUALIFIER_SEPARATOR};

/// Strip the `"Phalanx: Evaluator <N>: "` bookkeeping prefix
///
/// **Public** - applied to every parsed row name
///
/// `N` must be one or more ASCII digits and be followed by exactly `": "`.
pub fn strip_ordinal_prefix(name: &str) -> &str {
    let Some(rest) = name.strip_prefix(ORDINAL_PREFIX) else {
        return name;
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return name;
    }

    rest[digits..].strip_prefix(QUALIFIER_SEPARATOR).unwrap_or(name)
}

/// Strip a bare `"Phalanx"` namespace prefix
///
/// **Public** - applied after strip_ordinal_prefix
///
/// Removes the prefix plus any `:` and whitespace right after it, so both
/// `"PhalanxFoo"` and `"Phalanx: Foo"` become `"Foo"`. A name that would
/// end up empty is returned unchanged.
pub fn strip_namespace_prefix(name: &str) -> &str {
    match name.strip_prefix(COMPONENT_PREFIX) {
        Some(rest) => {
            let rest = rest.trim_start_matches(|c: char| c == ':' || c.is_whitespace());
            if rest.is_empty() {
                name
            } else {
                rest
            }
        }
        None => name,
    }
}

/// Canonical component name for a raw row name
///
/// **Public** - ordinal prefix first, then namespace prefix
pub fn component_name(raw: &str) -> &str {
    strip_namespace_prefix(strip_ordinal_prefix(raw))
}

/// Base name: everything before the first `": "`
///
/// **Public** - key function for aggregation by base name
///
/// Exactly one level is stripped at the *first* boundary, so
/// `"Foo: bar: baz"` becomes `"Foo"`. Names without the boundary, or
/// with nothing in front of it, are returned unchanged.
pub fn base_name(name: &str) -> &str {
    match name.split_once(QUALIFIER_SEPARATOR) {
        Some((base, _)) if !base.is_empty() => base,
        _ => name,
    }
}

/// Drop a leading `"[Tag] "` evaluation-type tag
///
/// **Public** - key function for aggregation by evaluation type
///
/// The name must start with `[`, the first `]` must be followed by a
/// single space, and the remainder must be non-empty.
pub fn strip_eval_type(name: &str) -> &str {
    if !name.starts_with('[') {
        return name;
    }

    match name.find(']') {
        Some(close) => match name[close + 1..].strip_prefix(' ') {
            Some(rest) if !rest.is_empty() => rest,
            _ => name,
        },
        None => name,
    }
}
