//! Application service — interactive parameter resolution.
//!
//! Imports only from `crate::domain`. Reading and prompting go through
//! injected `BufRead`/`Write` seams so tests drive the dialog with plain
//! buffers.

use std::io::{BufRead, Write};

use crate::domain::{ParameterDecl, ResolvedParameter, StackError};

/// Resolve every declared parameter to a final value.
///
/// For each declaration, one prompt line is written to `prompt` and one
/// line is read from `input`. A non-blank line (after trimming) is the
/// value; a blank line selects the template's default. End of input counts
/// as a blank line, so piped input may stop early and fall through to
/// defaults.
///
/// # Errors
///
/// Returns [`StackError::MissingParameter`] when a blank line meets a
/// declaration without a default, and [`StackError::Input`] if reading or
/// prompting fails.
pub fn resolve_parameters(
    input: &mut impl BufRead,
    prompt: &mut impl Write,
    declared: &[ParameterDecl],
) -> Result<Vec<ResolvedParameter>, StackError> {
    let mut resolved = Vec::with_capacity(declared.len());

    for decl in declared {
        write!(prompt, "{}", prompt_line(decl))?;
        prompt.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;

        let entered = line.trim();
        let value = if entered.is_empty() {
            decl.default_value
                .clone()
                .ok_or_else(|| StackError::MissingParameter {
                    key: decl.key.clone(),
                })?
        } else {
            entered.to_string()
        };

        resolved.push(ResolvedParameter {
            key: decl.key.clone(),
            value,
        });
    }

    Ok(resolved)
}

/// One prompt line per declaration: description (when present), quoted key,
/// and the default in parentheses. Sensitive defaults are never echoed.
fn prompt_line(decl: &ParameterDecl) -> String {
    let default = match (&decl.default_value, decl.sensitive) {
        (Some(_), true) => "[hidden]",
        (Some(value), false) => value.as_str(),
        (None, _) => "",
    };
    match &decl.description {
        Some(desc) => format!("{desc} - '{}' ({default}): ", decl.key),
        None => format!("'{}' ({default}): ", decl.key),
    }
}
