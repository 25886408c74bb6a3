//! Complete truth tables over a fixed number of variables.
//!
//! Row `r` of a table over `n` variables is the assignment obtained by
//! reading `r` as an `n`-digit binary number, variable `0` being the most
//! significant digit. Over variables `a, b` the rows are therefore
//! `ab = 00, 01, 10, 11`. Rows are stored in a [`BitVec`] of width `2^n`.

use std::fmt::{Debug, Display, Formatter};
use std::ops::{BitAnd, BitOr, Not};

use crate::bits::BitVec;

/// Largest supported number of variables.
pub const MAX_VARS: usize = 24;

#[derive(Clone, Eq, PartialEq, Hash)]
pub struct TruthTable {
    num_vars: usize,
    bits: BitVec,
}

impl TruthTable {
    pub fn zero(num_vars: usize) -> Self {
        assert!(num_vars <= MAX_VARS, "Too many variables: {}", num_vars);
        Self {
            num_vars,
            bits: BitVec::zeros(1 << num_vars),
        }
    }

    pub fn one(num_vars: usize) -> Self {
        !Self::zero(num_vars)
    }

    /// Projection onto variable `var`.
    pub fn nth_var(num_vars: usize, var: usize) -> Self {
        assert!(var < num_vars, "Variable {} out of range 0..{}", var, num_vars);
        let mut tt = Self::zero(num_vars);
        for row in 0..tt.num_rows() {
            if row >> (num_vars - 1 - var) & 1 != 0 {
                tt.bits.set(row, true);
            }
        }
        tt
    }

    pub fn from_bits(num_vars: usize, bits: BitVec) -> Self {
        assert_eq!(bits.len(), 1 << num_vars, "Truth table width mismatch");
        Self { num_vars, bits }
    }
}

impl TruthTable {
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn num_rows(&self) -> usize {
        1 << self.num_vars
    }

    pub fn bits(&self) -> &BitVec {
        &self.bits
    }

    /// Value of the function under the assignment encoded by `row`.
    pub fn get(&self, row: usize) -> bool {
        self.bits.get(row).unwrap_or(false)
    }

    pub fn set(&mut self, row: usize, value: bool) {
        self.bits.set(row, value);
    }

    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn is_zero(&self) -> bool {
        self.bits.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.bits.count_ones() == self.num_rows()
    }

    pub fn and(&self, other: &TruthTable) -> TruthTable {
        assert_eq!(self.num_vars, other.num_vars, "Truth tables over different variables");
        TruthTable {
            num_vars: self.num_vars,
            bits: &self.bits & &other.bits,
        }
    }

    pub fn or(&self, other: &TruthTable) -> TruthTable {
        assert_eq!(self.num_vars, other.num_vars, "Truth tables over different variables");
        TruthTable {
            num_vars: self.num_vars,
            bits: &self.bits | &other.bits,
        }
    }
}

impl BitAnd for &TruthTable {
    type Output = TruthTable;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for &TruthTable {
    type Output = TruthTable;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl Not for &TruthTable {
    type Output = TruthTable;

    fn not(self) -> Self::Output {
        TruthTable {
            num_vars: self.num_vars,
            bits: !&self.bits,
        }
    }
}

impl Not for TruthTable {
    type Output = TruthTable;

    fn not(self) -> Self::Output {
        !&self
    }
}

/// Rows are printed in ascending order, row `0` first.
impl Display for TruthTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.bits, f)
    }
}

impl Debug for TruthTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "TruthTable({}: {})", self.num_vars, self.bits)
    }
}
