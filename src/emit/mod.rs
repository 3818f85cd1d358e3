//! Code emission helpers
//!
//! Stateless utilities consumed by the validators and by the downstream
//! emitter: naming conventions (`names`) and structured documentation
//! composition. The documentation block layout is part of the
//! generated-artifact contract downstream tools parse against, so the
//! separator and wrapping rules here are reproduced exactly.

pub mod names;

pub use names::{display_name, is_setter_for, singular, to_camel_case, to_pascal_case};

use crate::model::Command;

/// Compose a documentation block from an optional summary, parameter
/// descriptions (in order), and optional returns text.
///
/// Layout rules:
/// - sections appear in summary, params, returns order; empty sections are
///   skipped entirely
/// - the first section written has no leading separator; every later
///   section is preceded by a blank line
/// - a section with multiple input lines, and the summary always, is
///   block-wrapped: opening tag, one indented line per non-blank input
///   line, closing tag
/// - a single-line non-summary section is rendered inline
pub fn compose_documentation(
    summary: Option<&str>,
    params: &[(&str, &str)],
    returns: Option<&str>,
) -> String {
    let mut out = String::new();

    if let Some(text) = summary {
        write_section(&mut out, "<summary>", "</summary>", text, true);
    }
    for (name, description) in params {
        let open = format!("<param name=\"{}\">", name);
        write_section(&mut out, &open, "</param>", description, false);
    }
    if let Some(text) = returns {
        write_section(&mut out, "<returns>", "</returns>", text, false);
    }

    out
}

fn write_section(out: &mut String, open: &str, close: &str, text: &str, force_block: bool) {
    // Blank input lines are stripped; a section with no content is skipped
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        return;
    }

    if !out.is_empty() {
        out.push_str("\n\n");
    }

    if force_block || lines.len() > 1 {
        out.push_str(open);
        for line in lines {
            out.push('\n');
            out.push_str("    ");
            out.push_str(line.trim());
        }
        out.push('\n');
        out.push_str(close);
    } else {
        out.push_str(open);
        out.push_str(lines[0].trim());
        out.push_str(close);
    }
}

/// Documentation block for a generated command member, from its description
/// and parameter descriptions
pub fn command_documentation(command: &Command) -> String {
    let params: Vec<(&str, &str)> = command
        .parameters
        .iter()
        .filter_map(|p| {
            p.description
                .as_deref()
                .map(|d| (p.name.as_str(), d))
        })
        .collect();

    let returns = command
        .responses
        .first()
        .and_then(|r| r.description.as_deref());

    compose_documentation(command.description.as_deref(), &params, returns)
}
