//! Naming conventions
//!
//! Generic identifier utilities consumed by the validators and by the
//! downstream emitter. These are deliberate heuristics reproduced exactly;
//! they transform less than a full case-normalization or pluralization
//! library would, because the generated artifacts are diffed against
//! earlier output.

use crate::model::{Command, Property};

/// Pascal → camel: only the first character's case changes
pub fn to_camel_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// camel → Pascal: only the first character's case changes
pub fn to_pascal_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Turn a plural-looking name singular: strip one trailing `s`, or append
/// `Item` when there is none to strip.
pub fn singular(name: &str) -> String {
    match name.strip_suffix('s') {
        Some(stripped) => stripped.to_string(),
        None => format!("{}Item", name),
    }
}

/// Human-readable display name for an identifier.
///
/// An all-uppercase identifier is treated as an acronym and returned
/// unchanged; otherwise a single space is inserted before every uppercase
/// character except the first.
pub fn display_name(ident: &str) -> String {
    if !ident.is_empty() && ident.chars().all(|c| c.is_uppercase()) {
        return ident.to_string();
    }

    let mut out = String::with_capacity(ident.len() + 4);
    for (i, c) in ident.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Whether `command` is the setter for `property`: its name is
/// `"Set" + property name`, it has exactly one parameter, and that
/// parameter's data kind structurally equals the property's.
pub fn is_setter_for(command: &Command, property: &Property) -> bool {
    command.name == format!("Set{}", property.name)
        && command.parameters.len() == 1
        && command.parameters[0].data_type == property.data_type
}
