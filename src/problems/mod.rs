//! One module per solved problem.
//!
//! Each module exposes `solve`, which reads the judge input and writes the
//! answer, and a plain function doing the actual computation.

pub mod team;
pub mod theatre_square;
pub mod watermelon;
pub mod way_too_long_words;
pub mod young_physicist;
