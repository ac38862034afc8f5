//! `--explain`: describe an error code.

use scv_diagnostic::ErrorCode;

/// The text printed for `scv --explain <code>`, or an error message if the
/// code is not one the compiler emits.
pub fn explain(code_str: &str) -> Result<String, String> {
    let Ok(code) = code_str.trim().parse::<ErrorCode>() else {
        return Err(format!(
            "Unknown error code: {code_str}\n\n\
             Codes have the format EXXXX where X is a digit.\n\
             Examples: E0001, E1001, E2001, E3001"
        ));
    };

    let phase = if code.is_lexer_error() {
        "lexer"
    } else if code.is_parser_error() {
        "parser"
    } else if code.is_semantic_error() {
        "semantic check"
    } else {
        "file I/O"
    };
    Ok(format!("{code}: {} ({phase} error)", code.description()))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
