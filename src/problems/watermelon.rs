//! 4A. Watermelon

use scanner::Scanner;
use std::io::{self, Write};

/// Whether `w` splits into two positive even parts.
pub fn can_split(w: u32) -> bool {
    w > 2 && w % 2 == 0
}

pub fn solve(sc: &mut Scanner, out: &mut dyn Write) -> io::Result<()> {
    let w = sc.read::<u32>()?;
    writeln!(out, "{}", if can_split(w) { "YES" } else { "NO" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_split() {
        assert!(can_split(8));
        assert!(can_split(4));
        assert!(can_split(100));
        assert!(!can_split(1));
        assert!(!can_split(2));
        assert!(!can_split(3));
        assert!(!can_split(99));
    }

    #[test]
    fn test_solve() {
        let mut out = Vec::new();
        solve(&mut Scanner::new("8\n"), &mut out).unwrap();
        solve(&mut Scanner::new("2\n"), &mut out).unwrap();
        assert_eq!("YES\nNO\n", String::from_utf8(out).unwrap());
    }
}
