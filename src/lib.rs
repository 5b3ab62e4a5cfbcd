pub mod agent;
pub mod algorithms;
pub mod config;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod heuristics;
pub mod problem;
pub mod problems;
pub mod statistics;
