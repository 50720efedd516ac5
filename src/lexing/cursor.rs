use regex::Regex;

/// A read position within the source text, handed to matchers.
///
/// Matchers are always given a fork of the lexer's cursor. The lexer only adopts the fork's
/// position if the matcher reports success, so a matcher that reads ahead and then gives up never
/// has to rewind anything.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'s> {
    source: &'s str,
    start: usize,
    index: usize,
}

impl<'s> Cursor<'s> {
    pub fn new(source: &'s str) -> Cursor<'s> {
        Cursor {
            source,
            start: 0,
            index: 0,
        }
    }

    /// A copy of this cursor whose `consumed()` text starts at the current position.
    pub fn fork(&self) -> Cursor<'s> {
        Cursor {
            source: self.source,
            start: self.index,
            index: self.index,
        }
    }

    /// Adopt the position of a fork.
    pub fn commit(&mut self, fork: Cursor<'s>) {
        debug_assert!(fork.index >= self.index, "commit moved backwards");
        self.index = fork.index;
    }

    /// Byte offset from the start of the source.
    pub fn offset(&self) -> usize {
        self.index
    }

    pub fn remaining(&self) -> &'s str {
        &self.source[self.index..]
    }

    pub fn is_at_end(&self) -> bool {
        self.index == self.source.len()
    }

    /// Everything read since this cursor was forked.
    pub fn consumed(&self) -> &'s str {
        &self.source[self.start..self.index]
    }

    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.index += ch.len_utf8();
        Some(ch)
    }

    /// Consume `want` if it is the next character.
    pub fn eat_char(&mut self, want: char) -> bool {
        self.eat_if(|ch| ch == want)
    }

    pub fn eat_str(&mut self, want: &str) -> bool {
        if self.remaining().starts_with(want) {
            self.index += want.len();
            true
        } else {
            false
        }
    }

    fn eat_if(&mut self, pred: impl Fn(char) -> bool) -> bool {
        match self.peek() {
            Some(ch) if pred(ch) => {
                self.index += ch.len_utf8();
                true
            }
            _ => false,
        }
    }

    /// Consume the longest run of characters satisfying `pred`. Returns whether anything was
    /// consumed.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> bool {
        let before = self.index;
        while self.eat_if(&pred) {}
        self.index > before
    }

    /// Consume the longest run of characters in `from..=to`.
    pub fn eat_range(&mut self, from: char, to: char) -> bool {
        self.eat_while(|ch| (from..=to).contains(&ch))
    }

    /// Consume the longest run of characters that appear in `chars`.
    pub fn eat_any_of(&mut self, chars: &[char]) -> bool {
        self.eat_while(|ch| chars.contains(&ch))
    }

    /// Consume a match of `regex` that starts exactly at the current position.
    pub fn eat_regex(&mut self, regex: &Regex) -> bool {
        match regex.find(self.remaining()) {
            Some(matched) if matched.start() == 0 => {
                self.index += matched.end();
                true
            }
            _ => false,
        }
    }

    /// Consume an integer or decimal number: `[0-9]+(\.[0-9]*)?`. A trailing dot with no digits
    /// after it is part of the number, so `5.` reads as `5.0`.
    pub fn eat_number(&mut self) -> bool {
        if !self.eat_range('0', '9') {
            return false;
        }
        if self.eat_char('.') {
            self.eat_range('0', '9');
        }
        true
    }
}

#[test]
fn test_cursor_fork_and_commit() {
    let mut cursor = Cursor::new("12.5+x");
    let mut fork = cursor.fork();
    assert!(fork.eat_number());
    assert_eq!(fork.consumed(), "12.5");
    assert_eq!(cursor.offset(), 0);
    cursor.commit(fork);
    assert_eq!(cursor.offset(), 4);

    let mut fork = cursor.fork();
    assert!(fork.eat_char('+'));
    assert!(!fork.eat_number());
    assert_eq!(fork.consumed(), "+");
    assert_eq!(cursor.remaining(), "+x");
}

#[test]
fn test_cursor_trailing_dot() {
    let mut cursor = Cursor::new("7.)");
    assert!(cursor.eat_number());
    assert_eq!(cursor.consumed(), "7.");
    assert_eq!(cursor.peek(), Some(')'));

    let mut cursor = Cursor::new(".5");
    assert!(!cursor.eat_number());
    assert_eq!(cursor.offset(), 0);
}

#[test]
fn test_cursor_unicode() {
    let mut cursor = Cursor::new("λ+");
    assert_eq!(cursor.bump(), Some('λ'));
    assert_eq!(cursor.offset(), 2);
    assert!(cursor.eat_any_of(&['+', '-']));
    assert!(cursor.is_at_end());
    assert_eq!(cursor.bump(), None);
}
