//! Keyword recognition.

use mc_ir::TokenKind;

/// Map an identifier lexeme to its keyword kind, if it is one.
pub(crate) fn keyword_kind(text: &str) -> Option<TokenKind> {
    match text {
        "int" => Some(TokenKind::Int),
        "return" => Some(TokenKind::Return),
        "if" => Some(TokenKind::If),
        "else" => Some(TokenKind::Else),
        "while" => Some(TokenKind::While),
        "for" => Some(TokenKind::For),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_all_keywords() {
        assert_eq!(keyword_kind("int"), Some(TokenKind::Int));
        assert_eq!(keyword_kind("return"), Some(TokenKind::Return));
        assert_eq!(keyword_kind("if"), Some(TokenKind::If));
        assert_eq!(keyword_kind("else"), Some(TokenKind::Else));
        assert_eq!(keyword_kind("while"), Some(TokenKind::While));
        assert_eq!(keyword_kind("for"), Some(TokenKind::For));
    }

    #[test]
    fn near_misses_are_identifiers() {
        assert_eq!(keyword_kind("Int"), None);
        assert_eq!(keyword_kind("integer"), None);
        assert_eq!(keyword_kind("returns"), None);
        assert_eq!(keyword_kind(""), None);
    }
}
