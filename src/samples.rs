//! Sample tests kept on disk as `<root>/<NAME>/in<k>.txt` and `ans<k>.txt`.

use glob::{glob, Pattern};
use problem::Problem;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq, Eq)]
pub struct SampleCase {
    pub num: usize,
    pub input: String,
    pub answer: String,
}

pub fn sample_dir(root: &Path, problem: &Problem) -> PathBuf {
    root.join(problem.name)
}

fn input_path(dir: &Path, num: usize) -> PathBuf {
    dir.join(format!("in{}.txt", num))
}

fn answer_path(dir: &Path, num: usize) -> PathBuf {
    dir.join(format!("ans{}.txt", num))
}

/// `in12.txt` -> 12
fn case_num(path: &Path) -> Option<usize> {
    let stem = path.file_stem()?.to_str()?;
    if !stem.starts_with("in") {
        return None;
    }
    stem[2..].parse().ok()
}

fn builtin(problem: &Problem) -> Vec<SampleCase> {
    problem
        .samples
        .iter()
        .enumerate()
        .map(|(i, sample)| SampleCase {
            num: i + 1,
            input: sample.input.to_owned(),
            answer: sample.answer.to_owned(),
        })
        .collect()
}

fn to_io_error<E: ToString>(err: E) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err.to_string())
}

/// Reads sample cases from disk, falling back to the examples of the
/// problem statement when the directory has none.
/// Cases with an empty input file are placeholders and are skipped.
pub fn load(root: &Path, problem: &Problem, only: Option<usize>) -> io::Result<Vec<SampleCase>> {
    let dir = sample_dir(root, problem);

    let pat = Path::new(&Pattern::escape(&dir.display().to_string()))
        .join("in*.txt")
        .display()
        .to_string();
    trace!("collecting {}", pat);

    let mut cases = Vec::new();
    for entry in glob(&pat).map_err(to_io_error)? {
        let in_path = entry.map_err(to_io_error)?;
        let num = match case_num(&in_path) {
            Some(num) => num,
            None => {
                trace!("Ignore {:?}", in_path);
                continue;
            }
        };

        let ans_path = answer_path(&dir, num);
        if !ans_path.is_file() {
            warn!("Test {}: {:?} not found", num, ans_path);
            continue;
        }

        let input = fs::read_to_string(&in_path)?;
        if input.trim().is_empty() {
            warn!("Test {}: {:?} is empty, skipped", num, in_path);
            continue;
        }

        cases.push(SampleCase {
            num,
            input,
            answer: fs::read_to_string(&ans_path)?,
        });
    }

    if cases.is_empty() {
        debug!("no samples under {:?}, using built-in examples", dir);
        cases = builtin(problem);
    }

    cases.sort_by_key(|case| case.num);
    if let Some(num) = only {
        cases.retain(|case| case.num == num);
    }
    Ok(cases)
}

/// Creates empty `in<k>.txt`/`ans<k>.txt` pairs for `1..=count`.
/// Existing files are left alone.
pub fn create(root: &Path, problem: &Problem, count: usize) -> io::Result<PathBuf> {
    let dir = sample_dir(root, problem);
    fs::create_dir_all(&dir)?;

    for num in 1..count + 1 {
        for path in &[input_path(&dir, num), answer_path(&dir, num)] {
            if path.exists() {
                debug!("keep {:?}", path);
                continue;
            }
            fs::write(path, "")?;
        }
    }

    Ok(dir)
}
