//! Fixed-width bit vectors for pattern and word-level simulation.
//!
//! Bits are stored little-endian in `u64` words: bit `i` lives in word
//! `i / 64` at offset `i % 64`. Bits beyond `len` in the last word are always
//! kept clear so that word-wise comparison and popcount stay exact.

use std::fmt::{Debug, Display, Formatter};
use std::ops::{BitAnd, BitOr, Not};
use std::str::FromStr;

#[derive(Clone, Eq, PartialEq, Hash)]
pub struct BitVec {
    words: Vec<u64>,
    len: usize,
}

impl BitVec {
    const BITS_PER_WORD: usize = 64;

    /// Creates an all-zero vector of `len` bits.
    pub fn zeros(len: usize) -> Self {
        Self {
            words: vec![0; Self::num_words(len)],
            len,
        }
    }

    /// Creates an all-one vector of `len` bits.
    pub fn ones(len: usize) -> Self {
        let mut v = Self {
            words: vec![u64::MAX; Self::num_words(len)],
            len,
        };
        v.trim();
        v
    }

    pub fn from_bools(bits: impl IntoIterator<Item = bool>) -> Self {
        let bits: Vec<bool> = bits.into_iter().collect();
        let mut v = Self::zeros(bits.len());
        for (i, b) in bits.into_iter().enumerate() {
            v.set(i, b);
        }
        v
    }

    /// Creates a vector of `len` bits from the low bits of `value`.
    pub fn from_u64(value: u64, len: usize) -> Self {
        let mut v = Self::zeros(len);
        if len > 0 {
            v.words[0] = value;
            v.trim();
        }
        v
    }

    fn num_words(len: usize) -> usize {
        (len + Self::BITS_PER_WORD - 1) / Self::BITS_PER_WORD
    }

    #[inline]
    fn word_and_bit(index: usize) -> (usize, usize) {
        (index / Self::BITS_PER_WORD, index % Self::BITS_PER_WORD)
    }

    fn trim(&mut self) {
        let rem = self.len % Self::BITS_PER_WORD;
        if rem != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << rem) - 1;
            }
        }
    }
}

impl BitVec {
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the bit at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        let (w, b) = Self::word_and_bit(index);
        Some(self.words[w] >> b & 1 != 0)
    }

    /// Sets the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub fn set(&mut self, index: usize, value: bool) {
        assert!(index < self.len, "Bit index {} out of range 0..{}", index, self.len);
        let (w, b) = Self::word_and_bit(index);
        if value {
            self.words[w] |= 1 << b;
        } else {
            self.words[w] &= !(1 << b);
        }
    }

    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| {
            let (w, b) = Self::word_and_bit(i);
            self.words[w] >> b & 1 != 0
        })
    }

    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Bitwise AND of two vectors of equal width.
    ///
    /// # Panics
    ///
    /// Panics if the widths differ.
    pub fn and(&self, other: &BitVec) -> BitVec {
        assert_eq!(self.len, other.len, "Bit vectors of different width");
        BitVec {
            words: self.words.iter().zip(&other.words).map(|(a, b)| a & b).collect(),
            len: self.len,
        }
    }

    pub fn or(&self, other: &BitVec) -> BitVec {
        assert_eq!(self.len, other.len, "Bit vectors of different width");
        BitVec {
            words: self.words.iter().zip(&other.words).map(|(a, b)| a | b).collect(),
            len: self.len,
        }
    }

    pub fn not(&self) -> BitVec {
        let mut v = BitVec {
            words: self.words.iter().map(|w| !w).collect(),
            len: self.len,
        };
        v.trim();
        v
    }
}

impl BitAnd for &BitVec {
    type Output = BitVec;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for &BitVec {
    type Output = BitVec;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl Not for &BitVec {
    type Output = BitVec;

    fn not(self) -> Self::Output {
        BitVec::not(self)
    }
}

impl Not for BitVec {
    type Output = BitVec;

    fn not(self) -> Self::Output {
        BitVec::not(&self)
    }
}

/// Bit `0` is printed first.
impl Display for BitVec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for b in self.iter() {
            write!(f, "{}", if b { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl Debug for BitVec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "BitVec({})", self)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParseBitVecError(pub char);

impl Display for ParseBitVecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid bit character {:?}", self.0)
    }
}

impl std::error::Error for ParseBitVecError {}

/// Parses a string of `0`/`1` characters, bit `0` first.
impl FromStr for BitVec {
    type Err = ParseBitVecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(ParseBitVecError(c)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(BitVec::from_bools(bits))
    }
}
