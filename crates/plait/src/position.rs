use std::cmp::Ordering;

/// A cursor into the original input, tracking line and column for diagnostics.
///
/// Lines start at 1, columns at 0. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Position reached after consuming `consumed` from `self`.
    ///
    /// Each embedded `\n` moves to the next line; the column is then the
    /// length of the text after the last line break. Without a line break the
    /// column grows by the consumed length.
    pub fn advance(self, consumed: &str) -> Self {
        match consumed.rfind('\n') {
            Some(last_break) => Self {
                line: self.line + consumed.matches('\n').count(),
                column: consumed[last_break + 1..].chars().count(),
            },
            None => Self {
                line: self.line,
                column: self.column + consumed.chars().count(),
            },
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 0 }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then(self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_start_of_input() {
        assert_eq!(Position::default(), Position::new(1, 0));
    }

    #[test]
    fn test_advance_single_line() {
        assert_eq!(Position::default().advance("abc"), Position::new(1, 3));
        assert_eq!(Position::new(3, 4).advance("xy"), Position::new(3, 6));
    }

    #[test]
    fn test_advance_across_line_break() {
        assert_eq!(Position::default().advance("a\nb"), Position::new(2, 1));
        assert_eq!(Position::new(2, 7).advance("\n\nabcd"), Position::new(4, 4));
    }

    #[test]
    fn test_advance_trailing_line_break_resets_column() {
        assert_eq!(Position::new(1, 5).advance("x\n"), Position::new(2, 0));
    }

    #[test]
    fn test_advance_empty_is_identity() {
        let position = Position::new(4, 2);
        assert_eq!(position.advance(""), position);
    }

    #[test]
    fn test_advance_counts_characters_not_bytes() {
        assert_eq!(Position::default().advance("héllo"), Position::new(1, 5));
    }

    #[test]
    fn test_ordering_line_then_column() {
        assert!(Position::new(2, 0) > Position::new(1, 9));
        assert!(Position::new(1, 5) > Position::new(1, 2));
        assert_eq!(
            Position::new(3, 3).cmp(&Position::new(3, 3)),
            Ordering::Equal
        );
    }
}
