use std::iter::Peekable;
use std::str::Chars;

use super::{Instruction, Token, TokenKind};

#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /** Human Readable positions in file */
    pub cur_line: usize,
    pub cur_col: usize,

    chars: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(chars: &'a str) -> Lexer<'a> {
        Lexer {
            cur_col: 1,
            cur_line: 1,

            chars: chars.chars().peekable(),
        }
    }

    fn transform_to_type(&mut self, c: char) -> TokenKind {
        if c == '\n' {
            return TokenKind::Newline;
        }

        if let Some(instruction) = Instruction::from_char(c) {
            return TokenKind::Instruction(instruction);
        }

        // Simplify the comment stream down to strings
        let mut comment = String::from(c);
        while let Some(&next) = self.chars.peek() {
            if next == '\n' || Instruction::from_char(next).is_some() {
                break;
            }
            self.consume_char();
            comment.push(next);
        }

        TokenKind::Comment(comment)
    }

    fn consume_char(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.cur_col += 1;
        if c == '\n' {
            self.cur_line += 1;
            self.cur_col = 1;
        }
        Some(c)
    }

    pub fn next_token(&mut self) -> Option<Token> {
        let (line, col) = (self.cur_line, self.cur_col);
        let c = self.consume_char()?;

        Some(Token {
            kind: self.transform_to_type(c),
            line,
            col,
        })
    }

    pub fn collect_tokens(&mut self) -> Vec<Token> {
        self.by_ref().collect()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}
