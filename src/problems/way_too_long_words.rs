//! 71A. Way Too Long Words
//!
//! Words longer than ten letters are written as a numeronym:
//! first letter, count of letters between, last letter.

use scanner::Scanner;
use std::io::{self, Write};

const MAX_PLAIN_LEN: usize = 10;

pub fn abbreviate(word: &str) -> String {
    let len = word.chars().count();
    if len <= MAX_PLAIN_LEN {
        return word.to_owned();
    }

    let mut chars = word.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) => format!("{}{}{}", first, len - 2, last),
        _ => word.to_owned(),
    }
}

pub fn solve(sc: &mut Scanner, out: &mut dyn Write) -> io::Result<()> {
    let n = sc.read::<usize>()?;

    for _ in 0..n {
        let word = sc.read::<String>()?;
        writeln!(out, "{}", abbreviate(&word))?;
    }
    Ok(())
}
