#![cfg_attr(not(test), no_std)]

pub mod commands;

pub use commands::{Board, COMMANDS};
