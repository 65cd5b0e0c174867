// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![allow(unknown_lints)] // necessary because rustc doesn't know about clippy
#![warn(clippy::all)]

pub mod board;
pub mod board_formatter;
pub mod config;
pub mod data;
pub mod moves;
pub mod parser;
pub mod puzzle;
pub mod quadrant;
pub mod robots;
pub mod slide;
pub mod solution_formatter;
pub mod solver;

mod fs;

use std::error::Error;
use std::path::Path;

use crate::config::SearchConfig;
use crate::puzzle::Puzzle;
use crate::solver::{SolverErr, SolverOk};

pub trait LoadPuzzle {
    fn load_puzzle(&self) -> Result<Puzzle, Box<dyn Error>>;
}

impl<P: AsRef<Path> + ?Sized> LoadPuzzle for P {
    fn load_puzzle(&self) -> Result<Puzzle, Box<dyn Error>> {
        let text = fs::read_file(self)?;
        Ok(text.parse()?)
    }
}

pub trait Solve {
    fn solve(&self, config: SearchConfig, print_status: bool) -> Result<SolverOk, SolverErr>;
}
