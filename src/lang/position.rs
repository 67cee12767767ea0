use std::sync::Arc;

/// A location in source text.
///
/// `index` counts characters (not bytes) and starts at -1 before the
/// first character has been entered. `line` and `col` are 1-based once
/// the cursor sits on a character.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Position {
    pub index: isize,
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(index: isize, line: usize, col: usize) -> Position {
        Position { index, line, col }
    }

    pub fn start() -> Position {
        Position::new(-1, 1, 0)
    }

    /// Step forward, leaving `previous` behind.
    pub fn next(&mut self, previous: Option<char>) {
        self.index += 1;
        if previous == Some('\n') {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
    }

    /// Exact inverse of `next` for the same `text`.
    pub fn prev(&mut self, text: &[char]) {
        if self.index < 0 {
            return;
        }
        self.index -= 1;
        if self.index < 0 {
            self.line = 1;
            self.col = 0;
            return;
        }
        let index = self.index as usize;
        if text.get(index) == Some(&'\n') {
            self.line -= 1;
            self.col = column_of(text, index);
        } else {
            self.col -= 1;
        }
    }

    fn after(&self, current: Option<char>) -> Position {
        let mut pos = *self;
        pos.next(current);
        pos
    }
}

fn column_of(text: &[char], index: usize) -> usize {
    text[..index].iter().rev().take_while(|&&c| c != '\n').count() + 1
}

/// A start-inclusive, end-exclusive span of `text`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PositionRange {
    pub start: Position,
    pub end: Position,
    pub text: Arc<str>,
}

impl PositionRange {
    pub fn new(start: Position, end: Position, text: Arc<str>) -> PositionRange {
        let mut range = PositionRange { start, end, text };
        if range.start.col < 1 {
            range.start.next(None);
            range.end.next(None);
        }
        range
    }

    /// From the start of `self` to the end of `other`.
    pub fn to(&self, other: &PositionRange) -> PositionRange {
        PositionRange {
            start: self.start,
            end: other.end,
            text: self.text.clone(),
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.start.line != self.end.line
    }

    /// The characters covered by this range.
    pub fn slice(&self) -> String {
        let start = self.start.index.max(0) as usize;
        let end = self.end.index.max(0) as usize;
        self.text
            .chars()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect()
    }

    /// The full source line the range starts on.
    pub fn line_text(&self) -> &str {
        self.text
            .split('\n')
            .nth(self.start.line.saturating_sub(1))
            .unwrap_or("")
    }
}

/// A bidirectional cursor over characters.
///
/// Lookahead never moves the cursor. Every movement is explicit so
/// that scanning a maximal run can step one character past it and
/// back up again.
pub struct Cursor {
    chars: Vec<char>,
    pos: Position,
}

impl Cursor {
    pub fn new(text: &str) -> Cursor {
        let mut cursor = Cursor {
            chars: text.chars().collect(),
            pos: Position::start(),
        };
        cursor.advance();
        cursor
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    /// Position just past the current character.
    pub fn position_after(&self) -> Position {
        self.pos.after(self.current())
    }

    pub fn current(&self) -> Option<char> {
        self.char_at(self.pos.index)
    }

    fn char_at(&self, index: isize) -> Option<char> {
        if index < 0 {
            return None;
        }
        self.chars.get(index as usize).copied()
    }

    pub fn advance(&mut self) {
        let current = self.current();
        self.pos.next(current);
    }

    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    pub fn retreat(&mut self) {
        self.pos.prev(&self.chars);
    }

    pub fn rewind(&mut self) {
        self.pos = Position::start();
        self.advance();
    }

    /// Up to `n` characters starting `offset` characters from the current one.
    pub fn peek_at(&self, offset: usize, n: usize) -> String {
        (0..n)
            .filter_map(|i| self.char_at(self.pos.index + (offset + i) as isize))
            .collect()
    }

    /// Up to `n` characters starting at the current one.
    pub fn peek(&self, n: usize) -> String {
        self.peek_at(0, n)
    }

    pub fn looking_at(&self, s: &str) -> bool {
        self.peek(s.chars().count()) == s
    }
}
