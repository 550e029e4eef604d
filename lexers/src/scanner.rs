#![deny(warnings)]

use std::iter::Peekable;

static WHITE: &str = " \t\r\n";

// A lazy cursor over a stream of chars. Consumed chars accumulate into
// a pending lexeme until the caller extracts or ignores them.
pub struct Scanner<I: Iterator<Item = char>> {
    src: Peekable<I>,
    lexeme: String,
    offset: usize,
}

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn new(source: I) -> Scanner<I> {
        Scanner {
            src: source.peekable(),
            lexeme: String::new(),
            offset: 0,
        }
    }

    // chars consumed so far, ie: the position of the next unconsumed char
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn peek(&mut self) -> Option<char> {
        self.src.peek().copied()
    }

    pub fn at_end(&mut self) -> bool {
        self.src.peek().is_none()
    }

    pub fn advance(&mut self) -> Option<char> {
        let next = self.src.next()?;
        self.offset += 1;
        self.lexeme.push(next);
        Some(next)
    }

    // Advance the scanner only on an exact match
    pub fn accept(&mut self, what: char) -> bool {
        match self.peek() {
            Some(next) if next == what => self.advance().is_some(),
            _ => false,
        }
    }

    // Advance the scanner only if the next char is in the 'any' set,
    // returning the matched char
    pub fn accept_any(&mut self, any: &str) -> Option<char> {
        match self.peek() {
            Some(next) if any.contains(next) => self.advance(),
            _ => None,
        }
    }

    // Skip over the 'over' set, result is if the scanner was advanced
    pub fn skip_all(&mut self, over: &str) -> bool {
        let mut advanced = false;
        while self.accept_any(over).is_some() {
            advanced = true;
        }
        advanced
    }

    // Take the pending lexeme, leaving the scanner clear for the next token
    pub fn extract(&mut self) -> String {
        std::mem::take(&mut self.lexeme)
    }

    // Drop the pending lexeme
    pub fn ignore(&mut self) {
        self.lexeme.clear();
    }

    // Skip whitespace between tokens, dropping it from the lexeme,
    // result is if the scanner was advanced
    pub fn ignore_ws(&mut self) -> bool {
        let advanced = self.skip_all(WHITE);
        self.ignore();
        advanced
    }
}
