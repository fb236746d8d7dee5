use logos::Logos;

/// Represents a lexical token kind in the source input.
///
/// The scanner is table-driven: each variant's pattern describes the exact
/// text that produces it. The `Eof` and `Illegal` variants carry no pattern;
/// they are synthesized by [`Lexer`] at end of input and for unmatched text.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// Identifier tokens; names such as `x` or `square`.
    #[regex(r"[A-Za-z_]+")]
    Ident,
    /// Integer literal tokens, such as `42`. No decimals, no sign, no
    /// underscores; the numeric value is produced later by the parser.
    #[regex(r"[0-9]+")]
    Int,
    /// String literal tokens, such as `"hello"`. May span lines.
    #[regex(r#""[^"]*""#)]
    String,
    /// A string literal that never closes before end of input. Loses the
    /// longest-match race against [`TokenKind::String`] whenever a closing
    /// quote exists; surfaced to callers as [`TokenKind::Illegal`] carrying
    /// the partial contents.
    #[regex(r#""[^"]*"#)]
    UnterminatedString,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `&&` (a lone `&` matches nothing and lexes as `Illegal`)
    #[token("&&")]
    And,
    /// `||` (a lone `|` matches nothing and lexes as `Illegal`)
    #[token("||")]
    Or,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// End of input. Emitted indefinitely once the source is exhausted.
    Eof,
    /// Any text no pattern matches.
    Illegal,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::String => "STRING",
            Self::Assign => "ASSIGN",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Bang => "BANG",
            Self::Asterisk => "ASTERISK",
            Self::Slash => "SLASH",
            Self::Lt => "LT",
            Self::Gt => "GT",
            Self::Eq => "EQ",
            Self::NotEq => "NOT_EQ",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::Colon => "COLON",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::LBrace => "LBRACE",
            Self::RBrace => "RBRACE",
            Self::LBracket => "LBRACKET",
            Self::RBracket => "RBRACKET",
            Self::Eof => "EOF",
            Self::UnterminatedString | Self::Illegal => "ILLEGAL",
        };
        write!(f, "{name}")
    }
}

/// A source location: 1-based line and 1-based byte column of a token's
/// first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// The line number, starting at 1.
    pub line:   usize,
    /// The byte column within the line, starting at 1.
    pub column: usize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A single token: its kind, the exact text that produced it, and the source
/// position of its first character.
///
/// String literals carry their contents without the surrounding quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token's kind.
    pub kind:     TokenKind,
    /// The text that produced the token.
    pub literal:  String,
    /// Where the token begins in the source.
    pub position: Position,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "token{{type: {}, literal: {:?}}}", self.kind, self.literal)
    }
}

/// Produces [`Token`]s from source text, one call at a time.
///
/// The scanner never fails: text no pattern matches becomes an
/// [`TokenKind::Illegal`] token carrying the offending characters, a NUL
/// byte ends the input, and once the input is exhausted every further call
/// returns an [`TokenKind::Eof`] token.
///
/// # Example
/// ```
/// use quill::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("let five = 5;");
///
/// let token = lexer.next_token();
/// assert_eq!(token.kind, TokenKind::Let);
/// assert_eq!(token.literal, "let");
/// assert_eq!((token.position.line, token.position.column), (1, 1));
/// ```
pub struct Lexer<'a> {
    source:     &'a str,
    tokens:     logos::Lexer<'a, TokenKind>,
    line:       usize,
    line_start: usize,
    scanned:    usize,
    finished:   bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over the given source text.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { source,
               tokens: TokenKind::lexer(source),
               line: 1,
               line_start: 0,
               scanned: 0,
               finished: false }
    }

    /// Returns the next token, skipping whitespace.
    ///
    /// Whitespace is `space`, `tab`, `\n`, and `\r`; newlines advance the
    /// line counter and reset the column. Each token records the position of
    /// its first character.
    pub fn next_token(&mut self) -> Token {
        if self.finished {
            return self.eof_token();
        }

        let Some(result) = self.tokens.next() else {
            self.track_newlines(self.source.len());
            self.finished = true;
            return self.eof_token();
        };

        let span = self.tokens.span();
        self.track_newlines(span.start);

        let position = Position { line:   self.line,
                                  column: span.start - self.line_start + 1, };
        let slice = self.tokens.slice();

        match result {
            Ok(TokenKind::String) => Token { kind: TokenKind::String,
                                             literal: slice[1..slice.len() - 1].to_string(),
                                             position },
            Ok(TokenKind::UnterminatedString) => Token { kind: TokenKind::Illegal,
                                                         literal: slice[1..].to_string(),
                                                         position },
            Ok(kind) => Token { kind,
                                literal: slice.to_string(),
                                position },
            Err(()) => {
                if slice.starts_with('\0') {
                    self.finished = true;
                    return Token { kind: TokenKind::Eof,
                                   literal: String::new(),
                                   position };
                }
                Token { kind: TokenKind::Illegal,
                        literal: slice.to_string(),
                        position }
            },
        }
    }

    /// Counts the newlines between the last processed offset and `offset`,
    /// keeping `line` and `line_start` accurate. Newlines inside a previous
    /// token (a multi-line string) are accounted for here as well.
    fn track_newlines(&mut self, offset: usize) {
        for (index, byte) in self.source[self.scanned..offset].bytes().enumerate() {
            if byte == b'\n' {
                self.line += 1;
                self.line_start = self.scanned + index + 1;
            }
        }
        self.scanned = offset;
    }

    fn eof_token(&self) -> Token {
        Token { kind:     TokenKind::Eof,
                literal:  String::new(),
                position: Position { line:   self.line,
                                     column: self.source.len() - self.line_start + 1, }, }
    }
}
