//! Runs a solution against sample cases and compares answers.

use problem::Problem;
use samples::SampleCase;
use std::io::{self, Write};

#[derive(Debug, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed { expected: String, actual: String },
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub passed: usize,
    pub failed: usize,
}

impl Report {
    pub fn is_ok(&self) -> bool {
        self.failed == 0
    }
}

/// Surrounding whitespace is not significant on either side.
pub fn check(problem: &Problem, case: &SampleCase) -> Verdict {
    let actual = match problem.run(&case.input) {
        Ok(output) => output.trim().to_owned(),
        Err(err) => {
            debug!("{} test {}: {}", problem.name, case.num, err);
            format!("Error: {}", err)
        }
    };
    let expected = case.answer.trim().to_owned();

    if actual == expected {
        Verdict::Passed
    } else {
        Verdict::Failed { expected, actual }
    }
}

fn one_line(text: &str) -> String {
    text.replace('\n', "\\n")
}

pub fn run<W: Write>(problem: &Problem, cases: &[SampleCase], out: &mut W) -> io::Result<Report> {
    let mut report = Report::default();

    for case in cases {
        match check(problem, case) {
            Verdict::Passed => {
                writeln!(out, "Test {}: PASSED", case.num)?;
                report.passed += 1;
            }
            Verdict::Failed { expected, actual } => {
                writeln!(out, "Test {}: FAILED", case.num)?;
                writeln!(out, "  Expected: {}", one_line(&expected))?;
                writeln!(out, "  Got:      {}", one_line(&actual))?;
                report.failed += 1;
            }
        }
    }

    writeln!(
        out,
        "\nResults: {} passed, {} failed",
        report.passed, report.failed
    )?;
    Ok(report)
}
