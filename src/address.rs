use crate::error::{Error, Result};

/// Computes the number of words of `word_width` bits needed to store
/// `bit_count` bits.
///
/// # Examples
/// ```
/// use light_bitstore::word_count;
///
/// assert_eq!(word_count(10, 8), 2);
/// assert_eq!(word_count(32, 32), 1);
/// assert_eq!(word_count(33, 32), 2);
/// ```
pub const fn word_count(bit_count: usize, word_width: usize) -> usize {
    bit_count.div_ceil(word_width)
}

/// Location of a single bit inside a word array.
///
/// `offset` counts from the most significant bit of the word: offset 0 is bit
/// `word_width - 1` of the integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitAddress {
    /// Index of the word holding the bit.
    pub word_idx: usize,
    /// Position of the bit within that word, `0 <= offset < word_width`.
    pub offset: usize,
}

impl BitAddress {
    /// Splits a global bit index into a word index and an in-word offset.
    ///
    /// `capacity` is the number of addressable bits; any index at or past it
    /// is rejected, so padding bits in the last word are never addressable.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `idx >= capacity`.
    ///
    /// # Examples
    /// ```
    /// use light_bitstore::BitAddress;
    ///
    /// let addr = BitAddress::locate(14, 8, 16).unwrap();
    /// assert_eq!((addr.word_idx, addr.offset), (1, 6));
    /// assert!(BitAddress::locate(16, 8, 16).is_err());
    /// ```
    #[inline]
    pub const fn locate(idx: usize, word_width: usize, capacity: usize) -> Result<Self> {
        if idx >= capacity {
            return Err(Error::IndexOutOfRange {
                index: idx,
                capacity,
            });
        }
        Ok(Self {
            word_idx: idx / word_width,
            offset: idx % word_width,
        })
    }

    /// Shift that moves this bit into the least significant position of its
    /// word.
    #[inline]
    pub const fn shift(&self, word_width: usize) -> usize {
        word_width - 1 - self.offset
    }
}
