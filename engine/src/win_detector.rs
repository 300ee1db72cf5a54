use crate::types::{Cell, Move, Side};

const fn line(a: (usize, usize), b: (usize, usize), c: (usize, usize)) -> [Move; 3] {
    [Move::new(a.0, a.1), Move::new(b.0, b.1), Move::new(c.0, c.1)]
}

/// Rows, then columns, then the two diagonals.
pub const LINES: [[Move; 3]; 8] = [
    line((0, 0), (0, 1), (0, 2)),
    line((1, 0), (1, 1), (1, 2)),
    line((2, 0), (2, 1), (2, 2)),
    line((0, 0), (1, 0), (2, 0)),
    line((0, 1), (1, 1), (2, 1)),
    line((0, 2), (1, 2), (2, 2)),
    line((0, 0), (1, 1), (2, 2)),
    line((0, 2), (1, 1), (2, 0)),
];

pub fn check_win_with_line(cells: &[[Cell; 3]; 3], side: Side) -> Option<[Move; 3]> {
    let target = Cell::Occupied(side);
    LINES
        .iter()
        .find(|line| line.iter().all(|mv| cells[mv.row][mv.col] == target))
        .copied()
}

pub fn check_win(cells: &[[Cell; 3]; 3], side: Side) -> bool {
    check_win_with_line(cells, side).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    const U: Cell = Cell::Occupied(Side::User);
    const A: Cell = Cell::Occupied(Side::Agent);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let mut cells = [[E; 3]; 3];
            for mv in line {
                cells[mv.row][mv.col] = A;
            }
            assert_eq!(check_win_with_line(&cells, Side::Agent), Some(line));
            assert!(!check_win(&cells, Side::User));
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let cells = [[U, U, A], [E, E, E], [E, E, E]];
        assert!(!check_win(&cells, Side::User));
        assert!(!check_win(&cells, Side::Agent));
    }

    #[test]
    fn test_anti_diagonal() {
        let cells = [[E, E, U], [E, U, A], [U, A, A]];
        assert_eq!(
            check_win_with_line(&cells, Side::User),
            Some([Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)])
        );
    }
}
