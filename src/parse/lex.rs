use crate::parse::{ParseError, SrcLoc};
use logos::{self, Logos};

//===========================================================================//

#[derive(Clone, Debug, Default, PartialEq)]
enum LexerError {
    #[default]
    InvalidToken,
    ParseError(ParseError),
}

impl std::convert::From<ParseError> for LexerError {
    fn from(value: ParseError) -> LexerError {
        LexerError::ParseError(value)
    }
}

//===========================================================================//

struct LexerState {
    line: u32,
    start_of_line: usize,
    linebreak_column: usize,
    backslash: Option<SrcLoc>,
}

impl Default for LexerState {
    fn default() -> LexerState {
        LexerState {
            line: 1,
            start_of_line: 0,
            linebreak_column: 0,
            backslash: None,
        }
    }
}

//===========================================================================//

fn backslash_callback(
    lexer: &mut logos::Lexer<TokenKind>,
) -> Result<logos::Skip, ParseError> {
    if let Some(location) = lexer.extras.backslash {
        let message = "unexpected backslash before backslash".to_string();
        Err(ParseError { location, message })
    } else {
        lexer.extras.backslash = Some(TokenKind::lexer_location(lexer));
        Ok(logos::Skip)
    }
}

fn parse_digits(
    lexer: &logos::Lexer<TokenKind>,
    prefix_len: usize,
    radix: u32,
) -> Result<u32, ParseError> {
    lexer.slice()[prefix_len..]
        .iter()
        .try_fold(0u32, |value, &chr| {
            let digit = char::from(chr).to_digit(radix)?;
            value.checked_mul(radix)?.checked_add(digit)
        })
        .ok_or_else(|| {
            let location = TokenKind::lexer_location(lexer);
            let message = format!(
                "integer literal is too large: {}",
                lexer.slice().escape_ascii()
            );
            ParseError { location, message }
        })
}

fn decimal_literal_callback(
    lexer: &mut logos::Lexer<TokenKind>,
) -> Result<u32, ParseError> {
    parse_digits(lexer, 0, 10)
}

fn dollar_hex_literal_callback(
    lexer: &mut logos::Lexer<TokenKind>,
) -> Result<u32, ParseError> {
    parse_digits(lexer, 1, 16)
}

fn prefixed_hex_literal_callback(
    lexer: &mut logos::Lexer<TokenKind>,
) -> Result<u32, ParseError> {
    parse_digits(lexer, 2, 16)
}

fn newline_callback(lexer: &mut logos::Lexer<TokenKind>) -> logos::Filter<()> {
    lexer.extras.linebreak_column =
        lexer.span().start - lexer.extras.start_of_line;
    lexer.extras.line += 1;
    lexer.extras.start_of_line = lexer.span().end;
    if lexer.extras.backslash.is_some() {
        lexer.extras.backslash = None;
        logos::Filter::Skip
    } else {
        logos::Filter::Emit(())
    }
}

#[derive(Debug, Eq, Logos, PartialEq)]
#[logos(error = LexerError)]
#[logos(extras = LexerState)]
#[logos(skip r"[ \t\r]+")] // whitespace
#[logos(skip r";[^\n]*")] // comments
#[logos(source = [u8])]
enum TokenKind {
    #[token("\\", backslash_callback)]
    Backslash,
    #[regex(r"[_A-Za-z][_A-Za-z0-9]*")]
    Identifier,
    #[regex(r"[0-9]+", decimal_literal_callback)]
    #[regex(r"\$[0-9A-Fa-f]+", dollar_hex_literal_callback)]
    #[regex(r"0[xX][0-9A-Fa-f]+", prefixed_hex_literal_callback)]
    IntLiteral(u32),
    #[regex(r"\n", newline_callback)]
    Linebreak,
}

impl TokenKind {
    fn lexer_location(lexer: &logos::Lexer<TokenKind>) -> SrcLoc {
        SrcLoc {
            line: lexer.extras.line,
            column: lexer.span().start - lexer.extras.start_of_line,
        }
    }

    fn location(&self, lexer: &logos::Lexer<TokenKind>) -> SrcLoc {
        if let &TokenKind::Linebreak = self {
            SrcLoc {
                line: lexer.extras.line - 1,
                column: lexer.extras.linebreak_column,
            }
        } else {
            TokenKind::lexer_location(lexer)
        }
    }

    fn into_token(
        self,
        lexer: &logos::Lexer<TokenKind>,
    ) -> Result<Token, ParseError> {
        let start = self.location(lexer);
        let value = match self {
            TokenKind::Backslash => {
                let message = "unexpected backslash".to_string();
                return Err(ParseError { location: start, message });
            }
            TokenKind::Identifier => TokenValue::Identifier(
                String::from_utf8_lossy(lexer.slice()).into_owned(),
            ),
            TokenKind::IntLiteral(int) => TokenValue::IntLiteral(int),
            TokenKind::Linebreak => TokenValue::Linebreak,
        };
        if let Some(location) = lexer.extras.backslash {
            let message =
                format!("unexpected backslash before {}", value.name());
            return Err(ParseError { location, message });
        }
        Ok(Token { start, value })
    }
}

//===========================================================================//

/// The contents of a single lexical token.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TokenValue {
    /// An identifier or keyword.
    Identifier(String),
    /// An integer literal.
    IntLiteral(u32),
    /// A linebreak (that wasn't suppressed, e.g. by a backslash).
    Linebreak,
}

impl TokenValue {
    /// Returns the human-readable name for this kind of token.
    pub fn name(&self) -> &str {
        match &self {
            TokenValue::Identifier(_) => "identifier",
            TokenValue::IntLiteral(_) => "int literal",
            TokenValue::Linebreak => "linebreak",
        }
    }
}

//===========================================================================//

/// A single lexical token, including location information.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    /// The location in the file of the start of the token.
    pub start: SrcLoc,
    /// The contents of the token.
    pub value: TokenValue,
}

//===========================================================================//

/// A lexer for tokenizing a stimulus script.
pub struct TokenLexer<'a> {
    lexer: logos::Lexer<'a, TokenKind>,
}

impl<'a> TokenLexer<'a> {
    /// Constructs a new lexer in its initial state.
    pub fn new(input: &'a [u8]) -> TokenLexer<'a> {
        TokenLexer { lexer: TokenKind::lexer(input) }
    }
}

impl Iterator for TokenLexer<'_> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Result<Token, ParseError>> {
        match self.lexer.next() {
            None => {
                if let Some(location) = self.lexer.extras.backslash {
                    self.lexer.extras.backslash = None;
                    let message =
                        "unexpected backslash before EOF".to_string();
                    Some(Err(ParseError { location, message }))
                } else {
                    None
                }
            }
            Some(Err(LexerError::ParseError(error))) => Some(Err(error)),
            Some(Err(LexerError::InvalidToken)) => {
                let location = TokenKind::lexer_location(&self.lexer);
                let message = format!(
                    "invalid character: {}",
                    self.lexer.slice().escape_ascii()
                );
                Some(Err(ParseError { location, message }))
            }
            Some(Ok(kind)) => Some(kind.into_token(&self.lexer)),
        }
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{ParseError, Token, TokenLexer, TokenValue};
    use crate::parse::SrcLoc;

    fn token(line: u32, column: usize, value: TokenValue) -> Token {
        Token { start: SrcLoc { line, column }, value }
    }

    fn ident(name: &str) -> TokenValue {
        TokenValue::Identifier(name.to_string())
    }

    fn error(line: u32, column: usize, message: &str) -> ParseError {
        ParseError {
            location: SrcLoc { line, column },
            message: message.to_string(),
        }
    }

    fn read_all(input: &[u8]) -> Vec<Token> {
        TokenLexer::new(input).collect::<Result<_, _>>().unwrap()
    }

    fn expect_error(input: &[u8]) -> ParseError {
        for result in TokenLexer::new(input) {
            if let Err(error) = result {
                return error;
            }
        }
        panic!("no error occurred");
    }

    #[test]
    fn empty_input() {
        assert_eq!(read_all(b""), vec![]);
    }

    #[test]
    fn comment() {
        assert_eq!(read_all(b";;; Hello, world!"), vec![]);
    }

    #[test]
    fn linebreak() {
        assert_eq!(read_all(b"\n"), vec![token(1, 0, TokenValue::Linebreak)]);
    }

    #[test]
    fn integer_literals() {
        assert_eq!(
            read_all(b"12345 $ff 0x1F 0XFFFF0"),
            vec![
                token(1, 0, TokenValue::IntLiteral(12345)),
                token(1, 6, TokenValue::IntLiteral(0xff)),
                token(1, 10, TokenValue::IntLiteral(0x1f)),
                token(1, 15, TokenValue::IntLiteral(0xffff0)),
            ]
        );
    }

    #[test]
    fn statement_line() {
        assert_eq!(
            read_all(b"iow $be 0x20 ; start\nmemr 4\n"),
            vec![
                token(1, 0, ident("iow")),
                token(1, 4, TokenValue::IntLiteral(0xbe)),
                token(1, 8, TokenValue::IntLiteral(0x20)),
                token(1, 20, TokenValue::Linebreak),
                token(2, 0, ident("memr")),
                token(2, 5, TokenValue::IntLiteral(4)),
                token(2, 6, TokenValue::Linebreak),
            ]
        );
    }

    #[test]
    fn backslash_before_linebreak() {
        assert_eq!(
            read_all(b"memw 4 \\  \n 42"),
            vec![
                token(1, 0, ident("memw")),
                token(1, 5, TokenValue::IntLiteral(4)),
                token(2, 1, TokenValue::IntLiteral(42)),
            ]
        );
    }

    #[test]
    fn literal_too_large() {
        assert_eq!(
            expect_error(b"  $100000000"),
            error(1, 2, "integer literal is too large: $100000000")
        );
    }

    #[test]
    fn backslash_before_backslash() {
        assert_eq!(
            expect_error(b"\\ \\ \n"),
            error(1, 0, "unexpected backslash before backslash")
        );
    }

    #[test]
    fn backslash_before_eof() {
        assert_eq!(
            expect_error(b"  \\ "),
            error(1, 2, "unexpected backslash before EOF")
        );
    }

    #[test]
    fn backslash_before_identifier() {
        assert_eq!(
            expect_error(b"  \\ foo"),
            error(1, 2, "unexpected backslash before identifier")
        );
    }

    #[test]
    fn invalid_token() {
        assert_eq!(
            expect_error(b" `foo\n"),
            error(1, 1, "invalid character: `")
        );
    }
}

//===========================================================================//
