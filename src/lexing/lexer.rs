use super::token::*;
use crate::source::Source;
use log::trace;

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    read_position: usize,
    character: Option<char>,
}

impl Lexer {
    pub fn new(source: &Source) -> Self {
        let mut lexer = Lexer {
            input: source.chars(),
            position: 0,
            read_position: 0,
            character: None,
        };
        lexer.read_char();
        lexer
    }

    /// Drains the lexer, returning every token up to and including `EOF`.
    pub fn lex(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::EOF;
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let character = match self.character {
            Some(character) => character,
            None => return Token::new(TokenKind::EOF, ""),
        };

        let token = match character {
            '=' => self.conditional_make_token('=', TokenKind::EqualEqual, TokenKind::Assign),
            '!' => self.conditional_make_token('=', TokenKind::BangEqual, TokenKind::Bang),
            ';' => self.make_token(TokenKind::Semicolon),
            ',' => self.make_token(TokenKind::Comma),
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            '{' => self.make_token(TokenKind::LeftBrace),
            '}' => self.make_token(TokenKind::RightBrace),
            '+' => self.make_token(TokenKind::Plus),
            '-' => self.make_token(TokenKind::Minus),
            '*' => self.make_token(TokenKind::Star),
            '/' => self.make_token(TokenKind::Slash),
            '<' => self.make_token(TokenKind::Less),
            '>' => self.make_token(TokenKind::Greater),
            c if is_letter(c) => return self.identifier(),
            c if c.is_ascii_digit() => return self.number(),
            _ => self.make_token(TokenKind::Illegal),
        };

        self.read_char();
        token
    }

    fn identifier(&mut self) -> Token {
        let word = self.read_while(is_letter);
        let token = Token::new(TokenKind::lookup_identifier(&word), &word);
        trace!(target: "lexer", "{}", token);
        token
    }

    fn number(&mut self) -> Token {
        let digits = self.read_while(|c| c.is_ascii_digit());
        let token = Token::new(TokenKind::Int, &digits);
        trace!(target: "lexer", "{}", token);
        token
    }

    fn read_while<F>(&mut self, predicate: F) -> String
    where
        F: Fn(char) -> bool,
    {
        let start = self.position;
        while self.character.map_or(false, &predicate) {
            self.read_char();
        }
        self.input[start..self.position].iter().collect()
    }

    // Leaves the peeked character unread when it doesn't complete the pair.
    fn conditional_make_token(
        &mut self,
        next: char,
        paired: TokenKind,
        single: TokenKind,
    ) -> Token {
        if self.peek_char() == Some(next) {
            let start = self.position;
            self.read_char();
            let literal: String = self.input[start..=self.position].iter().collect();
            let token = Token::new(paired, &literal);
            trace!(target: "lexer", "{}", token);
            token
        } else {
            self.make_token(single)
        }
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        let literal = self.character.map(String::from).unwrap_or_default();
        let token = Token { kind, literal };
        trace!(target: "lexer", "{}", token);
        token
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ') | Some('\t') | Some('\n') | Some('\r') = self.character {
            self.read_char();
        }
    }

    fn read_char(&mut self) {
        self.character = self.input.get(self.read_position).copied();
        self.position = self.read_position;
        if self.read_position < self.input.len() {
            self.read_position += 1;
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input.get(self.read_position).copied()
    }
}

fn is_letter(character: char) -> bool {
    character.is_ascii_alphabetic() || character == '_'
}
