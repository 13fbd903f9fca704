//! Text diagram of a position.

use std::fmt;

use super::{Board, Square};

impl fmt::Display for Board {
    /// Rank 8 at the top, White pieces upper-case, empty squares as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for row in 0..8 {
            write!(f, "{} |", 8 - row)?;
            for col in 0..8 {
                let ch = self
                    .piece_at(Square::at(row, col))
                    .map_or('.', |(color, piece)| piece.to_display_char(color));
                write!(f, " {ch} |")?;
            }
            writeln!(f, "\n  +---+---+---+---+---+---+---+---+")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;

    #[test]
    fn test_initial_diagram() {
        let text = Board::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 18);
        assert_eq!(lines[1], "8 | r | n | b | q | k | b | n | r |");
        assert_eq!(lines[9], "4 | . | . | . | . | . | . | . | . |");
        assert_eq!(lines[15], "1 | R | N | B | Q | K | B | N | R |");
        assert_eq!(lines[17], "    a   b   c   d   e   f   g   h");
    }
}
