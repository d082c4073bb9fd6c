//! Token reader for judge input.

use std::io::{self, Read};
use std::str::FromStr;
use std::vec;

/// Splits the whole input on whitespace and hands out tokens in order.
/// Line breaks carry no meaning.
pub struct Scanner {
    words: vec::IntoIter<String>,
}

impl Scanner {
    pub fn new(text: &str) -> Self {
        let words = text
            .split_whitespace()
            .map(|s| s.to_owned())
            .collect::<Vec<_>>();
        Scanner {
            words: words.into_iter(),
        }
    }

    /// Reads everything from `reader` up front.
    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Scanner::new(&text))
    }

    pub fn read<T: FromStr>(&mut self) -> io::Result<T> {
        let word = match self.words.next() {
            Some(word) => word,
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "unexpected end of input",
                ))
            }
        };

        word.parse().map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("cannot parse token {:?}", word),
            )
        })
    }
}
