pub mod accumulator;
pub mod engine;
pub mod payoffs;
pub mod pricer;
