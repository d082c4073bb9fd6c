//! 231A. Team
//!
//! Three friends solve a problem when at least two of them are sure of it.

use scanner::Scanner;
use std::io::{self, Write};

pub fn is_accepted(p: u8, v: u8, t: u8) -> bool {
    p + v + t >= 2
}

pub fn solve(sc: &mut Scanner, out: &mut dyn Write) -> io::Result<()> {
    let n = sc.read::<usize>()?;

    let mut count = 0;
    for _ in 0..n {
        let p = sc.read::<u8>()?;
        let v = sc.read::<u8>()?;
        let t = sc.read::<u8>()?;
        if is_accepted(p, v, t) {
            count += 1;
        }
    }
    debug!("{} of {} problems accepted", count, n);

    writeln!(out, "{}", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> String {
        let mut sc = Scanner::new(input);
        let mut out = Vec::new();
        solve(&mut sc, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_is_accepted() {
        assert!(is_accepted(1, 1, 0));
        assert!(is_accepted(0, 1, 1));
        assert!(is_accepted(1, 1, 1));
        assert!(!is_accepted(1, 0, 0));
        assert!(!is_accepted(0, 0, 0));
    }

    #[test]
    fn test_solve() {
        assert_eq!("2\n", run("3\n1 1 0\n1 1 1\n1 0 0\n"));
        assert_eq!("1\n", run("2\n1 0 0\n0 1 1\n"));
        assert_eq!("0\n", run("1\n0 0 0\n"));
    }
}
