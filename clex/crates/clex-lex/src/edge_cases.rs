//! Edge case tests for clex-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, LexerConfig, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        let (mut tokens, _) = tokenize(source, &LexerConfig::default())
            .unwrap()
            .into_parts();
        assert!(tokens.pop().is_some_and(|t| t.is_eof()));
        tokens
    }

    fn messages(source: &str) -> Vec<String> {
        tokenize(source, &LexerConfig::default()).unwrap().messages()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(lex_all("x"), vec![Token::new(TokenKind::Identifier, "x", 1, 1)]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("int {} = 1;", name));
        assert!(t.contains(&Token::new(TokenKind::Identifier, name.as_str(), 1, 5)));
        assert_eq!(t[2].column(), 10006);
    }

    #[test]
    fn test_edge_keywords_are_case_sensitive() {
        let t = lex_all("If INT Return");
        assert!(t.iter().all(|t| t.kind() == TokenKind::Identifier));
    }

    #[test]
    fn test_edge_keyword_prefix_is_identifier() {
        let t = lex_all("integer do_ while2");
        assert!(t.iter().all(|t| t.kind() == TokenKind::Identifier));
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let t = lex_all("a\r\nb\r\n");
        assert_eq!(t[1], Token::new(TokenKind::Identifier, "b", 2, 1));
    }

    #[test]
    fn test_edge_string_with_carriage_return_is_not_terminated_by_it() {
        let t = lex_all("\"a\rb\"");
        assert_eq!(t[0], Token::new(TokenKind::StringLiteral, "a\rb", 1, 1));
    }

    #[test]
    fn test_edge_unterminated_string_before_newline_keeps_line() {
        let t = lex_all("\"abc\n\"def\"");
        assert_eq!(t[0], Token::new(TokenKind::Error, "abc", 1, 1));
        assert_eq!(t[1], Token::new(TokenKind::StringLiteral, "def", 2, 1));
    }

    #[test]
    fn test_edge_multiline_comment_then_string() {
        let t = lex_all("/*\n\n*/\"s\"");
        assert_eq!(t[0], Token::new(TokenKind::StringLiteral, "s", 3, 3));
    }

    #[test]
    fn test_edge_comment_marker_after_operator_run() {
        // A comment opener inside an operator run belongs to the run
        let t = lex_all("a +// c\nb");
        assert_eq!(t[1], Token::new(TokenKind::Error, "+//", 1, 3));
    }

    #[test]
    fn test_edge_literal_nul_is_unexpected() {
        let t = lex_all("a\0b");
        assert_eq!(t[1], Token::new(TokenKind::Error, "\0", 1, 2));
        assert_eq!(messages("a\0b"), vec!["unexpected character '\\0' at line 1, column 2"]);
    }

    #[test]
    fn test_edge_multibyte_unexpected_character() {
        let t = lex_all("x€y");
        assert_eq!(t[1], Token::new(TokenKind::Error, "€", 1, 2));
        assert_eq!(t[2], Token::new(TokenKind::Identifier, "y", 1, 3));
    }

    #[test]
    fn test_edge_every_unexpected_char_is_one_error() {
        let t = lex_all("@$`\\'");
        assert_eq!(t.len(), 5);
        assert!(t.iter().all(|t| t.is_error() && t.lexeme().chars().count() == 1));
        assert_eq!(messages("@$`\\'").len(), 5);
    }

    #[test]
    fn test_edge_arrow_and_member_access() {
        let t = lex_all("p->next.value");
        let lexemes: Vec<_> = t.iter().map(|t| t.lexeme()).collect();
        assert_eq!(lexemes, vec!["p", "->", "next", ".", "value"]);
    }

    #[test]
    fn test_edge_number_then_dot_method() {
        let t = lex_all("1.5.x");
        assert_eq!(t[0], Token::new(TokenKind::Error, "1.5", 1, 1));
        assert_eq!(t[1], Token::new(TokenKind::Operator, ".", 1, 4));
    }

    #[test]
    fn test_edge_shift_assign_sequence() {
        let t = lex_all("a<<=b>>=c");
        let ops: Vec<_> = t
            .iter()
            .filter(|t| t.kind() == TokenKind::Operator)
            .map(|t| t.lexeme())
            .collect();
        assert_eq!(ops, vec!["<<=", ">>="]);
    }

    #[test]
    fn test_edge_comment_kind_never_emitted() {
        let t = lex_all("/* a */ x // b");
        assert!(t.iter().all(|t| t.kind() != TokenKind::Comment));
    }
}
