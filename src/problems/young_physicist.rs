//! 69A. Young Physicist
//!
//! A body stays idle when the forces applied to it sum to the zero vector.

use scanner::Scanner;
use std::io::{self, Write};

/// Component-wise sum of force vectors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Resultant {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Resultant {
    pub fn add(&mut self, dx: i64, dy: i64, dz: i64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0 && self.z == 0
    }
}

pub fn solve(sc: &mut Scanner, out: &mut dyn Write) -> io::Result<()> {
    let n = sc.read::<usize>()?;

    let mut sum = Resultant::default();
    for _ in 0..n {
        let dx = sc.read::<i64>()?;
        let dy = sc.read::<i64>()?;
        let dz = sc.read::<i64>()?;
        sum.add(dx, dy, dz);
    }
    debug!("resultant {:?}", sum);

    writeln!(out, "{}", if sum.is_zero() { "YES" } else { "NO" })
}
