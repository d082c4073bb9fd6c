//! Registry of solved problems.

use problems::{team, theatre_square, watermelon, way_too_long_words, young_physicist};
use scanner::Scanner;
use std::io::{self, Write};

pub type Solver = fn(&mut Scanner, &mut dyn Write) -> io::Result<()>;

/// Example test from a problem statement.
#[derive(Debug)]
pub struct Sample {
    pub input: &'static str,
    pub answer: &'static str,
}

#[derive(Debug)]
pub struct Problem {
    /// Contest id followed by problem letter, e.g. `71A`.
    pub name: &'static str,
    pub title: &'static str,
    pub solve: Solver,
    pub samples: &'static [Sample],
}

static PROBLEMS: [Problem; 5] = [
    Problem {
        name: "1A",
        title: "Theatre Square",
        solve: theatre_square::solve,
        samples: &[Sample {
            input: "6 6 4\n",
            answer: "4\n",
        }],
    },
    Problem {
        name: "4A",
        title: "Watermelon",
        solve: watermelon::solve,
        samples: &[Sample {
            input: "8\n",
            answer: "YES\n",
        }],
    },
    Problem {
        name: "69A",
        title: "Young Physicist",
        solve: young_physicist::solve,
        samples: &[
            Sample {
                input: "3\n4 1 7\n-2 4 -1\n1 -5 -3\n",
                answer: "NO\n",
            },
            Sample {
                input: "3\n3 -1 7\n-5 2 -4\n2 -1 -3\n",
                answer: "YES\n",
            },
        ],
    },
    Problem {
        name: "71A",
        title: "Way Too Long Words",
        solve: way_too_long_words::solve,
        samples: &[Sample {
            input: "4\nword\nlocalization\ninternationalization\n\
                    pneumonoultramicroscopicsilicovolcanoconiosis\n",
            answer: "word\nl10n\ni18n\np43s\n",
        }],
    },
    Problem {
        name: "231A",
        title: "Team",
        solve: team::solve,
        samples: &[
            Sample {
                input: "3\n1 1 0\n1 1 1\n1 0 0\n",
                answer: "2\n",
            },
            Sample {
                input: "2\n1 0 0\n0 1 1\n",
                answer: "1\n",
            },
        ],
    },
];

pub fn all() -> &'static [Problem] {
    &PROBLEMS
}

/// Looks a problem up by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Problem> {
    let name = name.trim();
    all().iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Splits `1900A` into contest id `1900` and problem letter `A`.
pub fn parse_problem_name(name: &str) -> Option<(String, String)> {
    if name.chars().count() < 2 {
        return None;
    }

    // Digits end right after the last digit.
    let split = match name.rfind(|c: char| c.is_ascii_digit()) {
        Some(i) => i + 1,
        None => return None,
    };
    if split == name.len() {
        return None;
    }

    let (contest_id, letter) = name.split_at(split);
    Some((contest_id.to_owned(), letter.to_uppercase()))
}

impl Problem {
    pub fn contest_id(&self) -> &'static str {
        self.name.trim_end_matches(|c: char| c.is_ascii_alphabetic())
    }

    pub fn letter(&self) -> &'static str {
        &self.name[self.contest_id().len()..]
    }

    /// Directory-style group label, `A-set` for every `xxxA` problem.
    pub fn set(&self) -> String {
        format!("{}-set", self.letter())
    }

    pub fn url(&self) -> String {
        format!(
            "https://codeforces.com/contest/{}/problem/{}",
            self.contest_id(),
            self.letter()
        )
    }

    /// Runs the solver on an in-memory input.
    pub fn run(&self, input: &str) -> io::Result<String> {
        let mut sc = Scanner::new(input);
        let mut out = Vec::new();
        (self.solve)(&mut sc, &mut out)?;
        String::from_utf8(out).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
