//! Word Scramble: find words hidden in a random root word.
//!
//! The player types candidate words; each one is checked for originality,
//! for being drawable from the root word's letters, for length, for not being
//! the root word itself and for being a real English word. Accepted words
//! score their length, most rejections cost it.

pub mod app;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod models;
pub mod notify;
pub mod utils;
pub mod words;
