use tictactoe_engine::Board;

use crate::config::MarkerConfig;

const SEPARATOR: &str = "---------------";

pub fn render_board(board: &Board, markers: &MarkerConfig) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(SEPARATOR);
    out.push('\n');
    for row in board.rows() {
        for &cell in row {
            out.push_str(&format!("| {} |", markers.symbol(cell)));
        }
        out.push('\n');
        out.push_str(SEPARATOR);
        out.push('\n');
    }
    out
}

/// Keypad layout shown once so the player knows which number is which cell.
pub fn render_keypad_help() -> String {
    let mut out = String::from("Cells are numbered like a phone keypad:\n");
    for row in 0..3 {
        let keys: Vec<String> = (1..=3).map(|col| (row * 3 + col).to_string()).collect();
        out.push_str(&format!(" {}\n", keys.join(" ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_uses_markers() {
        let board: Board = "X.O/.../..X".parse().unwrap();
        let rendered = render_board(&board, &MarkerConfig::default());
        let expected = "\n---------------\n\
                        | X ||   || O |\n---------------\n\
                        |   ||   ||   |\n---------------\n\
                        |   ||   || X |\n---------------\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_custom_markers() {
        let board: Board = "XO./.../...".parse().unwrap();
        let markers = MarkerConfig {
            user: 'U',
            agent: 'A',
            empty: '.',
        };
        let rendered = render_board(&board, &markers);
        assert!(rendered.contains("| U || A || . |"));
    }

    #[test]
    fn test_keypad_help() {
        assert_eq!(
            render_keypad_help(),
            "Cells are numbered like a phone keypad:\n 1 2 3\n 4 5 6\n 7 8 9\n"
        );
    }
}
