mod config;
mod guard;
mod puzzles;
