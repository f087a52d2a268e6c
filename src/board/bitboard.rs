//! Bitboard implementation for fast disc counting and set operations

use std::ops::{BitAnd, BitOr, Not};

/// One bit per cell, indexed by [`Dimensions::index`](super::Dimensions::index).
/// A single `u128` covers every supported grid (9x7 uses 63 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u128,
}

impl Bitboard {
    /// Number of addressable cells
    pub const CAPACITY: usize = 128;

    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Bitboard with the lowest `cells` bits set.
    pub const fn full(cells: usize) -> Self {
        let bits = if cells >= Self::CAPACITY {
            u128::MAX
        } else {
            (1u128 << cells) - 1
        };
        Self { bits }
    }

    #[inline]
    pub const fn from_bits(bits: u128) -> Self {
        Self { bits }
    }

    #[inline]
    pub const fn bits(self) -> u128 {
        self.bits
    }

    /// Set a bit at index
    #[inline]
    pub fn set(&mut self, idx: usize) {
        self.bits |= 1u128 << idx;
    }

    /// Clear a bit at index
    #[inline]
    pub fn clear(&mut self, idx: usize) {
        self.bits &= !(1u128 << idx);
    }

    /// Check if bit is set at index
    #[inline]
    pub fn get(self, idx: usize) -> bool {
        (self.bits >> idx) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Iterate over set bit indices in ascending order
    pub fn iter_ones(self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard::from_bits(self.bits | rhs.bits)
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard::from_bits(self.bits & rhs.bits)
    }
}

impl Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Self::Output {
        Bitboard::from_bits(!self.bits)
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u128,
}

impl Iterator for BitboardIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;
        Some(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut bb = Bitboard::new();
        bb.set(0);
        bb.set(62);
        bb.set(127);
        assert!(bb.get(0) && bb.get(62) && bb.get(127));
        assert_eq!(bb.count(), 3);

        bb.clear(62);
        assert!(!bb.get(62));
        assert_eq!(bb.count(), 2);
    }

    #[test]
    fn test_full_mask() {
        assert_eq!(Bitboard::full(63).count(), 63);
        assert_eq!(Bitboard::full(128).count(), 128);
        assert!(Bitboard::full(0).is_empty());
    }

    #[test]
    fn test_iter_ones_ascending() {
        let mut bb = Bitboard::new();
        for idx in [70, 3, 64, 9] {
            bb.set(idx);
        }
        let ones: Vec<usize> = bb.iter_ones().collect();
        assert_eq!(ones, vec![3, 9, 64, 70]);
    }

    #[test]
    fn test_set_ops() {
        let a = Bitboard::from_bits(0b1100);
        let b = Bitboard::from_bits(0b1010);
        assert_eq!((a | b).bits(), 0b1110);
        assert_eq!((a & b).bits(), 0b1000);
        assert_eq!((!a & Bitboard::full(4)).bits(), 0b0011);
    }
}
