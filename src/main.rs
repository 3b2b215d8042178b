use std::env;
use std::process;
use std::time::Instant;

use crossterm::style::Stylize;
use eight_puzzle::{LogObserver, PuzzleState, Solver, Strategy, DEFAULT_SHUFFLE_MOVES};
use rand::thread_rng;

fn main() {
    env_logger::init();

    // Solve the given encoding, or a fresh scramble if none was passed
    let puzzle = match env::args().nth(1) {
        Some(encoding) => match encoding.parse::<PuzzleState>() {
            Ok(puzzle) => puzzle,
            Err(err) => {
                eprintln!("{}", err.to_string().red());
                process::exit(1);
            }
        },
        None => {
            let mut puzzle = PuzzleState::new();
            puzzle.shuffle(&mut thread_rng(), DEFAULT_SHUFFLE_MOVES);
            puzzle
        }
    };

    println!("Puzzle {}:\n{}", puzzle.encode().bold(), puzzle);
    println!(
        "hamming {} manhattan {} nilsson {} inversions {}\n",
        puzzle.hamming_distance(),
        puzzle.total_manhattan_distance(),
        puzzle.nilsson_score(),
        puzzle.count_inversions()
    );

    for strategy in Strategy::ALL {
        let mut solver = Solver::with_observer(strategy, LogObserver);
        let started = Instant::now();

        match solver.solve(&puzzle.encode()) {
            Ok(report) => println!(
                "{:<18} {} moves, {} nodes visited in {:?}\n  {}",
                strategy.to_string().green(),
                report.depth,
                report.visited,
                started.elapsed(),
                report.move_string()
            ),
            Err(err) => {
                eprintln!("{:<18} {}", strategy.to_string().red(), err);
                process::exit(1);
            }
        }
    }
}
