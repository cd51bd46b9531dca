//! Input acquisition: the whole source buffer is read up front, before
//! any scanning starts. `-` selects stdin.

use std::io::Read;

/// Read the entire source into memory, exiting with a message on
/// failure. The returned buffer outlives every lexer and parser built
/// over it.
pub fn read_source(path: &str) -> Vec<u8> {
    if path == "-" {
        let mut buf = Vec::new();
        if let Err(e) = std::io::stdin().read_to_end(&mut buf) {
            eprintln!("error: cannot read stdin: {e}");
            std::process::exit(1);
        }
        return buf;
    }
    match std::fs::read(path) {
        Ok(buf) => buf,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                _ => format!("cannot read '{path}': {e}"),
            };
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}
