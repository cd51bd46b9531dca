use std::fmt;

/// Error codes for all front-end diagnostics.
///
/// Format: E#### where the first digit indicates the phase. The lexer
/// never fails (unrecognized bytes become UNKNOWN tokens), so all codes
/// are currently parser errors (E1xxx).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Expected a specific token, found something else
    E1001,
    /// Unexpected token in expression position
    E1002,
    /// Unexpected end of input (unterminated block or group)
    E1003,
    /// Expected identifier
    E1004,
    /// Invalid assignment target
    E1005,
    /// Invalid top-level item
    E1006,
    /// Integer literal out of range
    E1007,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
        }
    }

    /// Parse a user-supplied code string (`mcc explain E1005`).
    pub fn parse(text: &str) -> Option<ErrorCode> {
        match text.to_ascii_uppercase().as_str() {
            "E1001" => Some(ErrorCode::E1001),
            "E1002" => Some(ErrorCode::E1002),
            "E1003" => Some(ErrorCode::E1003),
            "E1004" => Some(ErrorCode::E1004),
            "E1005" => Some(ErrorCode::E1005),
            "E1006" => Some(ErrorCode::E1006),
            "E1007" => Some(ErrorCode::E1007),
            _ => None,
        }
    }

    /// One-paragraph explanation of the error class.
    pub fn explanation(self) -> &'static str {
        match self {
            ErrorCode::E1001 => {
                "The parser expected a specific token here (such as a `;` after a \
                 statement or a `)` closing a group) but found a different one. \
                 The parse stops at the first such mismatch."
            }
            ErrorCode::E1002 => {
                "An expression was required at this position, but the token found \
                 cannot begin one. Expressions start with a number, an identifier, \
                 or a parenthesized subexpression."
            }
            ErrorCode::E1003 => {
                "The input ended while a block or parenthesized group was still \
                 open. Check for a missing `}` or `)`."
            }
            ErrorCode::E1004 => {
                "An identifier was required here, for example a function or \
                 variable name after `int`."
            }
            ErrorCode::E1005 => {
                "Only a plain identifier may appear on the left of `=`. \
                 Expressions such as `1 = 2` or `(a + b) = c` are rejected."
            }
            ErrorCode::E1006 => {
                "Top-level items must begin with `int`: either a function \
                 definition `int name() { ... }` or a declaration ending in `;`."
            }
            ErrorCode::E1007 => {
                "The integer literal does not fit in the native integer range."
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(ErrorCode::E1001.to_string(), "E1001");
        assert_eq!(ErrorCode::E1007.to_string(), "E1007");
    }

    #[test]
    fn parse_round_trips_and_ignores_case() {
        for code in [
            ErrorCode::E1001,
            ErrorCode::E1002,
            ErrorCode::E1003,
            ErrorCode::E1004,
            ErrorCode::E1005,
            ErrorCode::E1006,
            ErrorCode::E1007,
        ] {
            assert_eq!(ErrorCode::parse(code.as_str()), Some(code));
            assert_eq!(ErrorCode::parse(&code.as_str().to_lowercase()), Some(code));
        }
        assert_eq!(ErrorCode::parse("E9999"), None);
        assert_eq!(ErrorCode::parse(""), None);
    }

    #[test]
    fn every_code_has_an_explanation() {
        for code in [
            ErrorCode::E1001,
            ErrorCode::E1002,
            ErrorCode::E1003,
            ErrorCode::E1004,
            ErrorCode::E1005,
            ErrorCode::E1006,
            ErrorCode::E1007,
        ] {
            assert!(!code.explanation().is_empty());
        }
    }
}
