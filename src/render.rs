use itertools::Itertools;

use crate::life::{Board, Point};

pub const ALIVE: char = '\u{25A3}';
pub const DEAD: char = '\u{25A2}';

pub fn print_cell(pt: &Point, board: &Board) -> char {
    if board.contains(pt) {
        return ALIVE;
    }
    DEAD
}

// Rows run from the highest y down, so the grid reads with y pointing up.
pub fn print_cells(board: &Board) -> String {
    let bounds = board.corners();
    (0..bounds.height())
        .map(|row| {
            let y = bounds.top_right.y - row;
            (0..bounds.width())
                .map(|col| {
                    print_cell(
                        &Point {
                            x: bounds.bottom_left.x + col,
                            y,
                        },
                        board,
                    )
                })
                .join(" ")
        })
        .join("\n")
}
