use rayon::prelude::*;

use crate::life::{Board, Point};

pub fn will_be_alive(board: &Board, pt: &Point) -> bool {
    let living = board.living_neighbors(pt).len();
    let alive = board[*pt];
    (alive && living == 2) || living == 3
}

pub fn calculate_next(board: &Board) -> Board {
    // Anything that can change state lies within one cell of the current bounds.
    let mut bounds = board.corners();
    bounds.grow(1);
    let candidates: Vec<Point> = bounds.points().collect();
    let next: Vec<Point> = candidates
        .into_par_iter()
        .filter(|pt| will_be_alive(board, pt))
        .collect();
    Board::seed(next)
}

pub fn iterate(board: Board, iterations: u64) -> Vec<Board> {
    let mut states = Vec::with_capacity(iterations as usize + 1);
    let mut current = board;
    for _ in 0..iterations {
        let next = calculate_next(&current);
        states.push(current);
        current = next;
    }
    states.push(current);
    states
}
