//! Command handlers: `lex` and `parse` debug dumps plus `explain` for
//! error-code documentation.

use mc_diagnostic::ErrorCode;
use tracing::debug;

use crate::input::read_source;

/// Feed a file through the tokenizer alone and print the token stream,
/// one `KIND:text (line,column)` entry per line, EOF included.
pub fn lex_file(path: &str) {
    let source = read_source(path);
    debug!(path, bytes = source.len(), "lexing");
    print!("{}", mc_lexer::dump_tokens(&source));
}

/// Parse a file and print the AST dump, or the diagnostic on failure.
pub fn parse_file(path: &str) {
    let source = read_source(path);
    debug!(path, bytes = source.len(), "parsing");
    match mc_parse::parse_source(&source) {
        Ok(program) => print!("{program}"),
        Err(err) => {
            eprintln!("{}", err.to_diagnostic());
            std::process::exit(1);
        }
    }
}

/// Display the documentation for an error code string.
pub fn explain_error(code_str: &str) {
    let Some(code) = ErrorCode::parse(code_str) else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Example: mcc explain E1001");
        std::process::exit(1);
    };
    println!("{}: {}", code, code.explanation());
}
