use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{Parser, Precedence, precedence_of},
    },
};

impl Parser<'_> {
    /// Dispatches the prefix parse function for the current token.
    ///
    /// Every expression starts here. A token no expression can begin with
    /// records a `NoPrefixParseFunction` error and yields `None`; this is
    /// also how `ILLEGAL` tokens from the lexer surface as parse errors.
    pub fn parse_prefix(&mut self) -> Option<Expr> {
        match self.cur_token.kind {
            TokenKind::Ident => Some(self.parse_identifier()),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::String => Some(self.parse_string_literal()),
            TokenKind::True | TokenKind::False => Some(self.parse_boolean()),
            TokenKind::Bang | TokenKind::Minus => self.parse_unary_op(),
            TokenKind::LParen => self.parse_grouped(),
            TokenKind::If => self.parse_if(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::LBracket => self.parse_array_literal(),
            TokenKind::LBrace => self.parse_hash_literal(),
            kind => {
                self.errors.push(ParseError::NoPrefixParseFunction { kind,
                                                                     position:
                                                                         self.cur_token.position, });
                None
            },
        }
    }

    /// Parses an identifier expression from the current token.
    pub fn parse_identifier(&mut self) -> Expr {
        Expr::Identifier { name:     self.cur_token.literal.clone(),
                           position: self.cur_token.position, }
    }

    /// Parses an integer literal via a base-10 64-bit parse.
    ///
    /// A literal that does not fit `i64` records an error and is absent.
    pub fn parse_integer_literal(&mut self) -> Option<Expr> {
        let position = self.cur_token.position;

        match self.cur_token.literal.parse::<i64>() {
            Ok(value) => Some(Expr::IntegerLiteral { value, position }),
            Err(_) => {
                self.errors.push(ParseError::InvalidIntegerLiteral { literal:
                                                                         self.cur_token
                                                                             .literal
                                                                             .clone(),
                                                                     position });
                None
            },
        }
    }

    /// Parses a string literal from the current token.
    pub fn parse_string_literal(&mut self) -> Expr {
        Expr::StringLiteral { value:    self.cur_token.literal.clone(),
                              position: self.cur_token.position, }
    }

    /// Parses a `true` or `false` literal from the current token.
    pub fn parse_boolean(&mut self) -> Expr {
        Expr::BooleanLiteral { value:    self.cur_token_is(TokenKind::True),
                               position: self.cur_token.position, }
    }

    /// Parses a unary operation; the operand binds at `Prefix` power.
    pub fn parse_unary_op(&mut self) -> Option<Expr> {
        let position = self.cur_token.position;
        let op = UnaryOperator::from_token(self.cur_token.kind)?;

        self.next_token();
        let right = Box::new(self.parse_expression(Precedence::Prefix)?);

        Some(Expr::UnaryOp { op, right, position })
    }

    /// Parses a parenthesized expression; the parentheses only group.
    pub fn parse_grouped(&mut self) -> Option<Expr> {
        self.next_token();

        let expr = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(expr)
    }

    /// Parses `if ( condition ) { consequence }` with an optional
    /// `else { alternative }`.
    pub fn parse_if(&mut self) -> Option<Expr> {
        let position = self.cur_token.position;

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }

        self.next_token();
        let condition = Box::new(self.parse_expression(Precedence::Lowest)?);

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }

        let consequence = self.parse_block();

        let alternative = if self.peek_token_is(TokenKind::Else) {
            self.next_token();

            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }

            Some(self.parse_block())
        } else {
            None
        };

        Some(Expr::IfExpr { condition,
                            consequence,
                            alternative,
                            position })
    }

    /// Parses `fn ( parameters ) { body }`.
    pub fn parse_function_literal(&mut self) -> Option<Expr> {
        let position = self.cur_token.position;

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }

        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }

        let body = self.parse_block();

        Some(Expr::FunctionLiteral { parameters,
                                     body,
                                     position })
    }

    /// Parses a possibly empty, comma-separated identifier list terminated
    /// by `)`.
    pub fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_token_is(TokenKind::RParen) {
            self.next_token();
            return Some(parameters);
        }

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        parameters.push(self.cur_token.literal.clone());

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();

            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            parameters.push(self.cur_token.literal.clone());
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(parameters)
    }

    /// Parses `[ elements ]`.
    pub fn parse_array_literal(&mut self) -> Option<Expr> {
        let position = self.cur_token.position;
        let elements = self.parse_expression_list(TokenKind::RBracket)?;

        Some(Expr::ArrayLiteral { elements, position })
    }

    /// Parses a possibly empty, comma-separated expression list terminated
    /// by `end`. Used for array literals and call arguments; a trailing
    /// comma is not accepted.
    pub fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expr>> {
        let mut list = Vec::new();

        if self.peek_token_is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(list)
    }

    /// Parses `{ key : value, ... }`. Pairs keep their source order; an
    /// empty `{}` is a valid hash and a trailing comma is not accepted.
    pub fn parse_hash_literal(&mut self) -> Option<Expr> {
        let position = self.cur_token.position;
        let mut pairs = Vec::new();

        if self.peek_token_is(TokenKind::RBrace) {
            self.next_token();
            return Some(Expr::HashLiteral { pairs, position });
        }

        self.next_token();
        pairs.push(self.parse_hash_pair()?);

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            pairs.push(self.parse_hash_pair()?);
        }

        if !self.expect_peek(TokenKind::RBrace) {
            return None;
        }

        Some(Expr::HashLiteral { pairs, position })
    }

    /// Parses one `key : value` pair of a hash literal.
    pub fn parse_hash_pair(&mut self) -> Option<(Expr, Expr)> {
        let key = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::Colon) {
            return None;
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        Some((key, value))
    }

    /// Parses a binary operation continuing `left`; the right-hand side
    /// binds at the operator's own precedence (left-associative).
    pub fn parse_binary_op(&mut self, left: Expr) -> Option<Expr> {
        let position = self.cur_token.position;
        let op = BinaryOperator::from_token(self.cur_token.kind)?;
        let precedence = precedence_of(self.cur_token.kind);

        self.next_token();
        let right = Box::new(self.parse_expression(precedence)?);

        Some(Expr::BinaryOp { left: Box::new(left),
                              op,
                              right,
                              position })
    }

    /// Parses the argument list of a call expression continuing `left`.
    pub fn parse_function_call(&mut self, left: Expr) -> Option<Expr> {
        let position = self.cur_token.position;
        let arguments = self.parse_expression_list(TokenKind::RParen)?;

        Some(Expr::FunctionCall { function: Box::new(left),
                                  arguments,
                                  position })
    }

    /// Parses the single index expression continuing `left`.
    pub fn parse_index(&mut self, left: Expr) -> Option<Expr> {
        let position = self.cur_token.position;

        self.next_token();
        let index = Box::new(self.parse_expression(Precedence::Lowest)?);

        if !self.expect_peek(TokenKind::RBracket) {
            return None;
        }

        Some(Expr::Index { collection: Box::new(left),
                           index,
                           position })
    }
}
