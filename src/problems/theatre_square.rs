//! 1A. Theatre Square
//!
//! How many `a x a` flagstones cover an `n x m` square, overhang allowed.

use scanner::Scanner;
use std::io::{self, Write};

fn div_ceil(x: u64, y: u64) -> u64 {
    (x + y - 1) / y
}

/// Number of tiles along each side, multiplied.
/// All of `n`, `m`, `a` are at most 10^9, so the product fits in `u64`.
pub fn flagstones(n: u64, m: u64, a: u64) -> u64 {
    div_ceil(n, a) * div_ceil(m, a)
}

pub fn solve(sc: &mut Scanner, out: &mut dyn Write) -> io::Result<()> {
    let n = sc.read::<u64>()?;
    let m = sc.read::<u64>()?;
    let a = sc.read::<u64>()?;
    trace!("n={} m={} a={}", n, m, a);

    writeln!(out, "{}", flagstones(n, m, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flagstones() {
        assert_eq!(1, flagstones(2, 2, 3));
        assert_eq!(1, flagstones(2, 3, 4));
        assert_eq!(16, flagstones(10, 10, 3));
        assert_eq!(4, flagstones(6, 6, 4));
        assert_eq!(4, flagstones(6, 6, 3));
        assert_eq!(1, flagstones(1, 1, 1));
    }

    #[test]
    fn test_large() {
        let big = 1_000_000_000;
        assert_eq!(1_000_000_000_000_000_000, flagstones(big, big, 1));
        assert_eq!(1, flagstones(big, big, big));
        assert_eq!(4, flagstones(big, big, big - 1));
    }

    #[test]
    fn test_solve() {
        let mut sc = Scanner::new("6 6 4\n");
        let mut out = Vec::new();
        solve(&mut sc, &mut out).unwrap();
        assert_eq!("4\n", String::from_utf8(out).unwrap());
    }
}
