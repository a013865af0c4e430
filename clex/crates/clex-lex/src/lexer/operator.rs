//! Operator and separator lexing.

use clex_util::DiagnosticCode;

use crate::config::OperatorMatching;
use crate::token::TokenKind;
use crate::Lexer;

use super::Scanned;

impl<'a> Lexer<'a> {
    /// Lexes an operator.
    ///
    /// The candidate is the run of operator characters at the cursor, at
    /// most as long as the longest operator in the table.
    pub(crate) fn scan_operator(&mut self) -> Scanned {
        let run = self.operator_run();

        match self.config.operator_matching {
            OperatorMatching::AllOrNothing => {
                self.cursor.advance_n(run.chars().count());
                if self.config.operators.contains(run) {
                    return Scanned::ok(self.token(TokenKind::Operator, run));
                }
                let prefix = self.longest_operator_prefix(run);
                self.unknown_operator(run, prefix)
            },
            OperatorMatching::LongestPrefix => match self.longest_operator_prefix(run) {
                Some(op) => {
                    self.cursor.advance_n(op.chars().count());
                    Scanned::ok(self.token(TokenKind::Operator, op))
                },
                None => {
                    self.cursor.advance();
                    let text = self.token_text();
                    self.unknown_operator(text, None)
                },
            },
        }
    }

    /// Lexes a single-character separator.
    pub(crate) fn scan_separator(&mut self) -> Scanned {
        let c = self.cursor.advance();
        Scanned::ok(self.token(TokenKind::Separator, c.to_string()))
    }

    /// The operator-character run at the cursor, capped at the table's
    /// window length. Does not move the cursor.
    fn operator_run(&self) -> &'a str {
        let rest = self.cursor.remaining();
        let operators = &self.config.operators;
        let end = rest
            .char_indices()
            .take(operators.max_len())
            .take_while(|&(_, c)| operators.is_operator_char(c))
            .last()
            .map_or(0, |(i, c)| i + c.len_utf8());
        &rest[..end]
    }

    /// Longest prefix of `run` that is an operator.
    fn longest_operator_prefix(&self, run: &'a str) -> Option<&'a str> {
        run.char_indices()
            .rev()
            .map(|(i, c)| &run[..i + c.len_utf8()])
            .find(|prefix| self.config.operators.contains(prefix))
    }

    fn unknown_operator(&self, text: &str, prefix: Option<&str>) -> Scanned {
        let message = format!("unknown operator '{}' {}", text, self.location());
        let mut builder = self.error_builder(DiagnosticCode::E_LEXER_UNKNOWN_OPERATOR, message);
        if let Some(prefix) = prefix {
            builder = builder.help(format!(
                "'{}' is an operator; separate the rest with whitespace",
                prefix
            ));
        }
        Scanned::error(self.token(TokenKind::Error, text), builder.build())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{OperatorMatching, OperatorTable};
    use crate::token::{Token, TokenKind};
    use crate::{Lexer, LexerConfig};
    use pretty_assertions::assert_eq;

    fn lex_with(source: &str, config: LexerConfig) -> (Vec<Token>, Vec<String>) {
        let stream = Lexer::with_config(source, config).tokenize().unwrap();
        (stream.tokens().to_vec(), stream.messages())
    }

    fn lex(source: &str) -> (Vec<Token>, Vec<String>) {
        lex_with(source, LexerConfig::default())
    }

    fn longest_prefix() -> LexerConfig {
        LexerConfig::default().with_operator_matching(OperatorMatching::LongestPrefix)
    }

    fn lexemes(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.lexeme()).collect()
    }

    #[test]
    fn test_every_table_operator() {
        for op in crate::config::C_OPERATORS {
            let (tokens, messages) = lex(op);
            assert_eq!(tokens[0], Token::new(TokenKind::Operator, *op, 1, 1), "{op}");
            assert!(messages.is_empty(), "{op}");
        }
    }

    #[test]
    fn test_three_char_operator() {
        let (tokens, messages) = lex("a<<=b");
        assert_eq!(lexemes(&tokens), vec!["a", "<<=", "b", ""]);
        assert_eq!(tokens[1].kind(), TokenKind::Operator);
        assert!(messages.is_empty());
    }

    #[test]
    fn test_unknown_run_is_one_error() {
        let (tokens, messages) = lex("x=-1");
        assert_eq!(tokens[1], Token::new(TokenKind::Error, "=-", 1, 2));
        assert_eq!(tokens[2], Token::new(TokenKind::Number, "1", 1, 4));
        assert_eq!(messages, vec!["unknown operator '=-' at line 1, column 2".to_string()]);
    }

    #[test]
    fn test_unknown_run_suggests_prefix() {
        let stream = Lexer::new("=-").tokenize().unwrap();
        let diagnostic = &stream.diagnostics()[0];
        assert_eq!(diagnostic.helps.len(), 1);
        assert!(diagnostic.helps[0].starts_with("'='"));
    }

    #[test]
    fn test_run_is_capped_at_window() {
        let (tokens, messages) = lex("++++");
        assert_eq!(tokens[0], Token::new(TokenKind::Error, "+++", 1, 1));
        assert_eq!(tokens[1], Token::new(TokenKind::Operator, "+", 1, 4));
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn test_bang_alone_is_unknown() {
        let (tokens, messages) = lex("!x");
        assert_eq!(tokens[0], Token::new(TokenKind::Error, "!", 1, 1));
        assert_eq!(messages.len(), 1);
        let (tokens, _) = lex("!=x");
        assert_eq!(tokens[0], Token::new(TokenKind::Operator, "!=", 1, 1));
    }

    #[test]
    fn test_longest_prefix_splits_run() {
        let (tokens, messages) = lex_with("x=-1", longest_prefix());
        assert_eq!(lexemes(&tokens), vec!["x", "=", "-", "1", ""]);
        assert!(messages.is_empty());

        let (tokens, _) = lex_with("+++", longest_prefix());
        assert_eq!(lexemes(&tokens), vec!["++", "+", ""]);
    }

    #[test]
    fn test_longest_prefix_single_char_error() {
        let (tokens, messages) = lex_with("!!", longest_prefix());
        assert_eq!(tokens[0], Token::new(TokenKind::Error, "!", 1, 1));
        assert_eq!(tokens[1], Token::new(TokenKind::Error, "!", 1, 2));
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn test_conditional_operators() {
        let (tokens, _) = lex("a ?: b ? c : d");
        let ops: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind() == TokenKind::Operator)
            .map(|t| t.lexeme())
            .collect();
        assert_eq!(ops, vec!["?:", "?", ":"]);
    }

    #[test]
    fn test_custom_operator_table() {
        let config = LexerConfig::default()
            .with_operators(OperatorTable::c_family().try_with_operator("::").unwrap());
        let (tokens, messages) = lex_with("std::cout", config);
        assert_eq!(lexemes(&tokens), vec!["std", "::", "cout", ""]);
        assert!(messages.is_empty());

        let (tokens, _) = lex("std::cout");
        assert_eq!(tokens[1], Token::new(TokenKind::Error, "::", 1, 4));
    }

    #[test]
    fn test_separators() {
        let (tokens, messages) = lex("(){}[];,#");
        assert!(messages.is_empty());
        assert_eq!(tokens.len(), 10);
        for (i, token) in tokens.iter().take(9).enumerate() {
            assert_eq!(token.kind(), TokenKind::Separator);
            assert_eq!(token.column(), i as u32 + 1);
        }
    }

    #[test]
    fn test_directive_is_only_separated() {
        let (tokens, _) = lex("#include");
        assert_eq!(tokens[0], Token::new(TokenKind::Separator, "#", 1, 1));
        assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "include", 1, 2));
    }

    #[test]
    fn test_extended_table_keeps_separators_and_identifiers() {
        let operators = OperatorTable::c_family()
            .try_with_operator("->*")
            .unwrap()
            .try_with_operator("@@")
            .unwrap();
        let config = LexerConfig::default().with_operators(operators);
        let (tokens, messages) = lex_with("#a->*b@@c;", config);
        assert!(messages.is_empty(), "{messages:?}");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Separator, "#", 1, 1),
                Token::new(TokenKind::Identifier, "a", 1, 2),
                Token::new(TokenKind::Operator, "->*", 1, 3),
                Token::new(TokenKind::Identifier, "b", 1, 6),
                Token::new(TokenKind::Operator, "@@", 1, 7),
                Token::new(TokenKind::Identifier, "c", 1, 9),
                Token::new(TokenKind::Separator, ";", 1, 10),
                Token::end_of_stream(1, 11),
            ]
        );
    }
}
