//! Diagnostic codes for categorizing scanner errors.
//!
//! Every diagnostic the scanner can raise carries one of the `E1xxx` codes
//! below so that tools and tests can match on the category instead of the
//! message text.
//!
//! # Examples
//!
//! ```
//! use clex_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNEXPECTED_CHAR;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "E1001");
//! ```

/// A unique code identifying a diagnostic message
///
/// Codes follow the format `{prefix}{number}` where `number` is zero-padded
/// to four digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E")
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use clex_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("E", 1001);
    /// assert_eq!(code.as_str(), "E1001");
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // SCANNER ERROR CODES (E1001-E1099)
    // =========================================================================

    /// E1001: A character no scanner accepts
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// E1002: String literal reached a newline or end of input
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// E1003: Number with more than one decimal point
    pub const E_LEXER_MALFORMED_NUMBER: Self = Self::new("E", 1003);
    /// E1004: Run of operator characters with no full-length table match
    pub const E_LEXER_UNKNOWN_OPERATOR: Self = Self::new("E", 1004);
    /// E1005: Digit run directly followed by an identifier character
    pub const E_LEXER_INVALID_IDENTIFIER: Self = Self::new("E", 1005);
    /// E1006: Block comment reached end of input
    pub const E_LEXER_UNTERMINATED_COMMENT: Self = Self::new("E", 1006);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_padding() {
        assert_eq!(DiagnosticCode::new("E", 1).as_str(), "E0001");
        assert_eq!(DiagnosticCode::new("E", 12).as_str(), "E0012");
        assert_eq!(DiagnosticCode::new("E", 1001).as_str(), "E1001");
    }

    #[test]
    fn test_display_and_debug() {
        let code = DiagnosticCode::E_LEXER_UNKNOWN_OPERATOR;
        assert_eq!(format!("{}", code), "E1004");
        assert_eq!(format!("{:?}", code), "DiagnosticCode(E1004)");
    }

    #[test]
    fn test_scanner_codes_are_distinct() {
        let codes = [
            DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            DiagnosticCode::E_LEXER_MALFORMED_NUMBER,
            DiagnosticCode::E_LEXER_UNKNOWN_OPERATOR,
            DiagnosticCode::E_LEXER_INVALID_IDENTIFIER,
            DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
