use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};
use core::iter::FusedIterator;
use core::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

use crate::address::{BitAddress, word_count};
use crate::error::{Error, Result};
use crate::word::Word;

/// A fixed-capacity array of bits packed into words of type `W`.
///
/// `capacity` is the number of addressable bits. They are stored in
/// `word_count(capacity, W::BITS)` words; bit `i` lives in word
/// `i / W::BITS` at offset `i % W::BITS`, where offset 0 is the most
/// significant bit of the word.
///
/// Bits in the last word past `capacity` are padding. Bulk operations work
/// on whole words, so padding may hold any value, but it is never observable
/// through [`get`], iteration, [`count_ones`] or equality.
///
/// [`get`]: BitStore::get
/// [`count_ones`]: BitStore::count_ones
#[derive(Clone)]
pub struct BitStore<W: Word = u32> {
    len: usize,
    words: Box<[W]>,
}

impl<W: Word> BitStore<W> {
    /// Creates a store of `capacity` bits, all unset.
    ///
    /// # Panics
    /// Panics if `capacity == 0`. Use [`try_new`] for a fallible variant.
    ///
    /// # Examples
    /// ```
    /// use light_bitstore::BitStore;
    ///
    /// let store = BitStore::<u8>::new(10);
    /// assert_eq!(store.word_count(), 2);
    /// assert_eq!(store.count_ones(), 0);
    /// ```
    ///
    /// [`try_new`]: BitStore::try_new
    pub fn new(capacity: usize) -> Self {
        assert_ne!(capacity, 0, "capacity must be greater than zero");
        Self::zeroed(capacity)
    }

    /// Creates a store of `capacity` bits, all unset.
    ///
    /// # Errors
    /// Returns [`Error::ZeroCapacity`] if `capacity == 0`.
    ///
    /// # Examples
    /// ```
    /// use light_bitstore::{BitStore, Error};
    ///
    /// assert_eq!(BitStore::<u32>::try_new(0).unwrap_err(), Error::ZeroCapacity);
    /// assert_eq!(BitStore::<u32>::try_new(40).unwrap().word_count(), 2);
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(Self::zeroed(capacity))
    }

    fn zeroed(capacity: usize) -> Self {
        let count = word_count(capacity, W::BITS);
        log::trace!(
            "allocating {count} words of {} bits for {capacity} bits",
            W::BITS
        );
        Self {
            len: capacity,
            words: vec![W::ZERO; count].into_boxed_slice(),
        }
    }

    /// Creates a store of `capacity` bits, all set.
    ///
    /// # Panics
    /// Panics if `capacity == 0`.
    ///
    /// # Examples
    /// ```
    /// use light_bitstore::BitStore;
    ///
    /// let store = BitStore::<u16>::with_all_set(20);
    /// assert_eq!(store.count_ones(), 20);
    /// ```
    pub fn with_all_set(capacity: usize) -> Self {
        let mut store = Self::new(capacity);
        store.fill(true);
        store
    }

    /// Wraps existing words as a store of `capacity` bits.
    ///
    /// Words are interpreted most significant bit first: bit 0 of the store is
    /// the top bit of `words[0]`.
    ///
    /// # Errors
    /// Returns [`Error::ZeroCapacity`] if `capacity == 0` and
    /// [`Error::SizeMismatch`] if the number of words is not
    /// `word_count(capacity, W::BITS)`.
    ///
    /// # Examples
    /// ```
    /// use light_bitstore::BitStore;
    ///
    /// let store = BitStore::<u8>::from_words(16, [0b1000_0000, 0b0000_0001]).unwrap();
    /// assert!(store.get(0).unwrap());
    /// assert!(store.get(15).unwrap());
    /// assert_eq!(store.count_ones(), 2);
    /// ```
    pub fn from_words(capacity: usize, words: impl Into<Box<[W]>>) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        let words = words.into();
        let expected = word_count(capacity, W::BITS);
        if words.len() != expected {
            log::debug!(
                "rejecting {} words for {capacity} bits, expected {expected}",
                words.len()
            );
            return Err(Error::SizeMismatch {
                expected,
                found: words.len(),
            });
        }
        Ok(Self {
            len: capacity,
            words,
        })
    }

    /// Constructs a store from a boolean slice, where `true` means set. The
    /// capacity is the slice length.
    ///
    /// # Panics
    /// Panics if the slice is empty.
    ///
    /// # Examples
    /// ```
    /// use light_bitstore::BitStore;
    ///
    /// let store = BitStore::<u8>::from_slice(&[true, false, true]);
    /// assert_eq!(store.iter().collect::<Vec<_>>(), [true, false, true]);
    /// ```
    pub fn from_slice(bits: &[bool]) -> Self {
        let mut store = Self::new(bits.len());
        for (word, chunk) in store.words.iter_mut().zip(bits.chunks(W::BITS)) {
            for (offset, bit) in chunk.iter().enumerate() {
                if *bit {
                    *word = *word | W::msb_mask(offset);
                }
            }
        }
        store
    }

    /// Constructs a store of `capacity` bits with only the given indices set.
    ///
    /// # Errors
    /// Returns [`Error::ZeroCapacity`] if `capacity == 0` and
    /// [`Error::IndexOutOfRange`] on the first index `>= capacity`.
    ///
    /// # Examples
    /// ```
    /// use light_bitstore::BitStore;
    ///
    /// let store = BitStore::<u32>::from_ones_iter(5, [0, 2, 4]).unwrap();
    /// assert_eq!(store.iter_ones().collect::<Vec<_>>(), [0, 2, 4]);
    /// assert!(BitStore::<u32>::from_ones_iter(5, [5]).is_err());
    /// ```
    pub fn from_ones_iter<I: IntoIterator<Item = usize>>(capacity: usize, iter: I) -> Result<Self> {
        let mut store = Self::try_new(capacity)?;
        for idx in iter {
            store.set(idx, true)?;
        }
        Ok(store)
    }

    /// Number of addressable bits.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.len
    }

    /// Width of one backing word in bits.
    #[inline]
    pub const fn word_width(&self) -> usize {
        W::BITS
    }

    /// Number of backing words.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Total size of the backing words in bytes.
    ///
    /// # Examples
    /// ```
    /// use light_bitstore::BitStore;
    ///
    /// assert_eq!(BitStore::<u8>::new(10).bytes(), 2);
    /// assert_eq!(BitStore::<u32>::new(100).bytes(), 16);
    /// ```
    #[inline]
    pub fn bytes(&self) -> usize {
        self.words.len() * (W::BITS / 8)
    }

    /// The backing words, padding included.
    #[inline]
    pub fn words(&self) -> &[W] {
        &self.words
    }

    /// Returns `true` if the bit at `idx` is set.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `idx >= capacity`.
    ///
    /// # Examples
    /// ```
    /// use light_bitstore::BitStore;
    ///
    /// let mut store = BitStore::<u8>::new(10);
    /// store.set(9, true).unwrap();
    /// assert!(store.get(9).unwrap());
    /// assert!(!store.get(8).unwrap());
    /// assert!(store.get(10).is_err());
    /// ```
    #[inline]
    pub fn get(&self, idx: usize) -> Result<bool> {
        let addr = BitAddress::locate(idx, W::BITS, self.len)?;
        Ok(self.words[addr.word_idx] >> addr.shift(W::BITS) & W::one() == W::one())
    }

    /// Sets (`true`) or clears (`false`) the bit at `idx`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `idx >= capacity`; the store is
    /// left unchanged.
    ///
    /// # Examples
    /// ```
    /// use light_bitstore::BitStore;
    ///
    /// let mut store = BitStore::<u16>::new(3);
    /// store.set(1, true).unwrap();
    /// assert!(store.get(1).unwrap());
    /// store.set(1, false).unwrap();
    /// assert!(!store.get(1).unwrap());
    /// ```
    #[inline]
    pub fn set(&mut self, idx: usize, bit: bool) -> Result<()> {
        let addr = BitAddress::locate(idx, W::BITS, self.len)?;
        let mask = W::msb_mask(addr.offset);
        let word = &mut self.words[addr.word_idx];
        if bit {
            *word = *word | mask;
        } else {
            *word = *word & !mask;
        }
        Ok(())
    }

    /// Flips the bit at `idx` and returns its previous value.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `idx >= capacity`.
    ///
    /// # Examples
    /// ```
    /// use light_bitstore::BitStore;
    ///
    /// let mut store = BitStore::<u8>::new(8);
    /// assert_eq!(store.toggle(4).unwrap(), false);
    /// assert_eq!(store.toggle(4).unwrap(), true);
    /// ```
    #[inline]
    pub fn toggle(&mut self, idx: usize) -> Result<bool> {
        let addr = BitAddress::locate(idx, W::BITS, self.len)?;
        let mask = W::msb_mask(addr.offset);
        let word = &mut self.words[addr.word_idx];
        let previous = *word & mask != W::ZERO;
        *word = *word ^ mask;
        Ok(previous)
    }

    fn check_size(&self, other: &Self) -> Result<()> {
        if self.words.len() != other.words.len() {
            log::debug!(
                "bulk operation on mismatched stores: {} words vs {} words",
                self.words.len(),
                other.words.len()
            );
            return Err(Error::SizeMismatch {
                expected: self.words.len(),
                found: other.words.len(),
            });
        }
        Ok(())
    }

    fn expect_same_size(&self, other: &Self) {
        if let Err(err) = self.check_size(other) {
            panic!("{err}");
        }
    }

    #[inline]
    fn zip_words(&mut self, other: &Self, op: impl Fn(W, W) -> W) {
        for (word, other_word) in self.words.iter_mut().zip(other.words.iter()) {
            *word = op(*word, *other_word);
        }
    }

    #[inline]
    fn map_words(&mut self, op: impl Fn(W) -> W) {
        for word in self.words.iter_mut() {
            *word = op(*word);
        }
    }

    /// In-place bitwise AND with `other`, word by word.
    ///
    /// Operands must have the same word count; their capacities may differ
    /// inside that constraint. Returns `self` for chaining.
    ///
    /// # Errors
    /// Returns [`Error::SizeMismatch`] if the word counts differ. Nothing is
    /// modified in that case.
    ///
    /// # Examples
    /// ```
    /// use light_bitstore::BitStore;
    ///
    /// let mut a = BitStore::<u8>::from_slice(&[true, false, true, false]);
    /// let b = BitStore::<u8>::from_slice(&[false, true, true, false]);
    /// a.and(&b).unwrap();
    /// assert_eq!(a, BitStore::from_slice(&[false, false, true, false]));
    /// ```
    pub fn and(&mut self, other: &Self) -> Result<&mut Self> {
        self.check_size(other)?;
        self.zip_words(other, |a, b| a & b);
        Ok(self)
    }

    /// In-place bitwise OR with `other`, word by word.
    ///
    /// # Errors
    /// Returns [`Error::SizeMismatch`] if the word counts differ. Nothing is
    /// modified in that case.
    ///
    /// # Examples
    /// ```
    /// use light_bitstore::BitStore;
    ///
    /// let mut a = BitStore::<u8>::from_slice(&[true, false, true, false]);
    /// let b = BitStore::<u8>::from_slice(&[false, true, true, false]);
    /// a.or(&b).unwrap();
    /// assert_eq!(a, BitStore::from_slice(&[true, true, true, false]));
    /// ```
    pub fn or(&mut self, other: &Self) -> Result<&mut Self> {
        self.check_size(other)?;
        self.zip_words(other, |a, b| a | b);
        Ok(self)
    }

    /// In-place bitwise XOR with `other`, word by word.
    ///
    /// # Errors
    /// Returns [`Error::SizeMismatch`] if the word counts differ. Nothing is
    /// modified in that case.
    ///
    /// # Examples
    /// ```
    /// use light_bitstore::BitStore;
    ///
    /// let mut a = BitStore::<u8>::from_slice(&[true, false, true, false]);
    /// let b = BitStore::<u8>::from_slice(&[false, true, true, false]);
    /// a.xor(&b).unwrap();
    /// assert_eq!(a, BitStore::from_slice(&[true, true, false, false]));
    /// ```
    pub fn xor(&mut self, other: &Self) -> Result<&mut Self> {
        self.check_size(other)?;
        self.zip_words(other, |a, b| a ^ b);
        Ok(self)
    }

    /// Inverts every word in place, padding included. Returns `self` for
    /// chaining.
    ///
    /// # Examples
    /// ```
    /// use light_bitstore::BitStore;
    ///
    /// let mut a = BitStore::<u8>::from_slice(&[false, false, true]);
    /// a.not();
    /// assert_eq!(a, BitStore::from_slice(&[true, true, false]));
    /// ```
    pub fn not(&mut self) -> &mut Self {
        self.map_words(|w| !w);
        self
    }

    /// Shifts every word left by `num` positions, filling with zeros.
    ///
    /// Each word is shifted on its own: bits leaving a word are dropped and
    /// never carried into the neighbouring word. Since offset 0 is the most
    /// significant bit, a left shift moves bits toward lower indices within
    /// their word. A shift of `W::BITS` or more clears every word.
    ///
    /// # Examples
    /// ```
    /// use light_bitstore::BitStore;
    ///
    /// let mut store = BitStore::<u8>::from_words(16, [0b0000_0001, 0b1000_0000]).unwrap();
    /// store.lshift(1);
    /// assert_eq!(store.words(), [0b0000_0010, 0b0000_0000]);
    /// ```
    pub fn lshift(&mut self, num: usize) -> &mut Self {
        if num >= W::BITS {
            self.words.fill(W::ZERO);
        } else {
            self.map_words(|w| w << num);
        }
        self
    }

    /// Shifts every word right by `num` positions, filling with zeros.
    ///
    /// Like [`lshift`], no bits cross word boundaries. A shift of `W::BITS`
    /// or more clears every word.
    ///
    /// # Examples
    /// ```
    /// use light_bitstore::BitStore;
    ///
    /// let mut store = BitStore::<u8>::from_words(16, [0b0000_0001, 0b1000_0000]).unwrap();
    /// store.rshift(1);
    /// assert_eq!(store.words(), [0b0000_0000, 0b0100_0000]);
    /// ```
    ///
    /// [`lshift`]: BitStore::lshift
    pub fn rshift(&mut self, num: usize) -> &mut Self {
        if num >= W::BITS {
            self.words.fill(W::ZERO);
        } else {
            self.map_words(|w| w >> num);
        }
        self
    }

    /// Returns an independent deep copy of the store.
    ///
    /// # Examples
    /// ```
    /// use light_bitstore::BitStore;
    ///
    /// let original = BitStore::<u32>::new(5);
    /// let mut copy = original.copy();
    /// copy.set(0, true).unwrap();
    /// assert!(!original.get(0).unwrap());
    /// ```
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Sets every bit (`true`) or clears every bit (`false`), padding
    /// included. Returns `self` for chaining.
    ///
    /// # Examples
    /// ```
    /// use light_bitstore::BitStore;
    ///
    /// let mut store = BitStore::<u8>::new(10);
    /// assert_eq!(store.fill(true).count_ones(), 10);
    /// assert_eq!(store.fill(false).count_ones(), 0);
    /// ```
    pub fn fill(&mut self, bit: bool) -> &mut Self {
        self.words.fill(if bit { W::ONES } else { W::ZERO });
        self
    }

    /// Mask of the addressable bits in the last word.
    #[inline]
    fn tail_mask(&self) -> W {
        match self.len % W::BITS {
            0 => W::ONES,
            used => W::ONES << (W::BITS - used),
        }
    }

    /// The backing words with padding bits cleared.
    fn logical_words(&self) -> impl Iterator<Item = W> + '_ {
        let last = self.words.len() - 1;
        let tail_mask = self.tail_mask();
        self.words
            .iter()
            .enumerate()
            .map(move |(i, w)| if i == last { *w & tail_mask } else { *w })
    }

    /// Returns the number of set bits.
    ///
    /// # Examples
    /// ```
    /// use light_bitstore::BitStore;
    ///
    /// let store = BitStore::<u8>::from_slice(&[true, false, true, false]);
    /// assert_eq!(store.count_ones(), 2);
    /// ```
    pub fn count_ones(&self) -> usize {
        self.logical_words().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns the index of the lowest set bit, or `None` if no bit is set.
    ///
    /// # Examples
    /// ```
    /// use light_bitstore::BitStore;
    ///
    /// let mut store = BitStore::<u8>::new(12);
    /// assert_eq!(store.first_set_bit(), None);
    /// store.set(9, true).unwrap();
    /// assert_eq!(store.first_set_bit(), Some(9));
    /// ```
    pub fn first_set_bit(&self) -> Option<usize> {
        self.logical_words()
            .enumerate()
            .find(|(_, w)| *w != W::ZERO)
            .map(|(i, w)| i * W::BITS + w.leading_zeros() as usize)
    }

    /// Returns an iterator over all bits as `bool`, in index order.
    ///
    /// The iterator yields exactly `capacity` items. Each call starts again
    /// at index 0.
    ///
    /// # Examples
    /// ```
    /// use light_bitstore::BitStore;
    ///
    /// let mut store = BitStore::<u32>::new(3);
    /// store.set(0, true).unwrap();
    /// store.set(2, true).unwrap();
    /// assert_eq!(store.iter().collect::<Vec<_>>(), [true, false, true]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, W> {
        Iter {
            words: &self.words,
            word_idx: 0,
            offset: 0,
            remaining: self.len,
        }
    }

    /// Returns an iterator over the indices of set bits, in ascending order.
    ///
    /// Skips whole zero words, so a sparse store is walked in roughly
    /// O(set bits + words).
    ///
    /// # Examples
    /// ```
    /// use light_bitstore::BitStore;
    ///
    /// let store = BitStore::<u8>::from_slice(&[true, false, true, false, true]);
    /// assert_eq!(store.iter_ones().collect::<Vec<_>>(), [0, 2, 4]);
    /// ```
    #[inline]
    pub fn iter_ones(&self) -> IterOnes<'_, W> {
        let mut iter = IterOnes {
            words: &self.words,
            tail_mask: self.tail_mask(),
            word_idx: 0,
            current: W::ZERO,
        };
        iter.current = iter.load(0);
        iter
    }
}

impl<W: Word> PartialEq for BitStore<W> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.logical_words().eq(other.logical_words())
    }
}

impl<W: Word> Eq for BitStore<W> {}

impl<'store, W: Word> IntoIterator for &'store BitStore<W> {
    type Item = bool;
    type IntoIter = Iter<'store, W>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<W: Word> Debug for BitStore<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "BitStore<u{}>[", W::BITS)?;
        for (i, bit) in self.iter().enumerate() {
            if i % W::BITS == 0 {
                if i != 0 {
                    write!(f, " ")?;
                }
                write!(f, "{i}: ")?;
            }
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        write!(f, "]")
    }
}

/// Constructs a store from an iterator over `bool`s. The capacity is the
/// number of items yielded.
///
/// # Panics
/// Panics if the iterator is empty.
impl<W: Word> FromIterator<bool> for BitStore<W> {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        let bits: Vec<bool> = iter.into_iter().collect();
        Self::from_slice(&bits)
    }
}

/// # Panics
/// Panics if the word counts differ.
impl<W: Word> BitAndAssign<&BitStore<W>> for BitStore<W> {
    fn bitand_assign(&mut self, rhs: &BitStore<W>) {
        self.expect_same_size(rhs);
        self.zip_words(rhs, |a, b| a & b);
    }
}

/// # Panics
/// Panics if the word counts differ.
impl<W: Word> BitOrAssign<&BitStore<W>> for BitStore<W> {
    fn bitor_assign(&mut self, rhs: &BitStore<W>) {
        self.expect_same_size(rhs);
        self.zip_words(rhs, |a, b| a | b);
    }
}

/// # Panics
/// Panics if the word counts differ.
impl<W: Word> BitXorAssign<&BitStore<W>> for BitStore<W> {
    fn bitxor_assign(&mut self, rhs: &BitStore<W>) {
        self.expect_same_size(rhs);
        self.zip_words(rhs, |a, b| a ^ b);
    }
}

/// # Panics
/// Panics if the word counts differ.
impl<W: Word> BitAnd for &BitStore<W> {
    type Output = BitStore<W>;

    fn bitand(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result &= rhs;
        result
    }
}

/// # Panics
/// Panics if the word counts differ.
impl<W: Word> BitOr for &BitStore<W> {
    type Output = BitStore<W>;

    fn bitor(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result |= rhs;
        result
    }
}

/// # Panics
/// Panics if the word counts differ.
impl<W: Word> BitXor for &BitStore<W> {
    type Output = BitStore<W>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result ^= rhs;
        result
    }
}

impl<W: Word> Not for BitStore<W> {
    type Output = Self;

    fn not(mut self) -> Self::Output {
        self.map_words(|w| !w);
        self
    }
}

impl<W: Word> Shl<usize> for BitStore<W> {
    type Output = Self;

    fn shl(mut self, rhs: usize) -> Self::Output {
        self.lshift(rhs);
        self
    }
}

impl<W: Word> ShlAssign<usize> for BitStore<W> {
    fn shl_assign(&mut self, rhs: usize) {
        self.lshift(rhs);
    }
}

impl<W: Word> Shr<usize> for BitStore<W> {
    type Output = Self;

    fn shr(mut self, rhs: usize) -> Self::Output {
        self.rshift(rhs);
        self
    }
}

impl<W: Word> ShrAssign<usize> for BitStore<W> {
    fn shr_assign(&mut self, rhs: usize) {
        self.rshift(rhs);
    }
}

/// Iterator over all bits of a store as `bool` values, starting at index 0.
///
/// Returned by [`BitStore::iter()`].
#[derive(Debug, Clone)]
pub struct Iter<'store, W: Word> {
    words: &'store [W],
    word_idx: usize,
    offset: usize,
    remaining: usize,
}

impl<W: Word> Iterator for Iter<'_, W> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let bit = self.words[self.word_idx] & W::msb_mask(self.offset) != W::ZERO;
        self.remaining -= 1;
        self.offset += 1;
        if self.offset == W::BITS {
            self.offset = 0;
            self.word_idx += 1;
        }
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<W: Word> ExactSizeIterator for Iter<'_, W> {}

impl<W: Word> FusedIterator for Iter<'_, W> {}

/// Iterator over the indices of set bits, in ascending order.
///
/// Returned by [`BitStore::iter_ones()`].
#[derive(Debug, Clone)]
pub struct IterOnes<'store, W: Word> {
    words: &'store [W],
    tail_mask: W,
    word_idx: usize,
    current: W,
}

impl<W: Word> IterOnes<'_, W> {
    fn load(&self, word_idx: usize) -> W {
        match self.words.get(word_idx) {
            Some(word) if word_idx + 1 == self.words.len() => *word & self.tail_mask,
            Some(word) => *word,
            None => W::ZERO,
        }
    }
}

impl<W: Word> Iterator for IterOnes<'_, W> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.word_idx < self.words.len() {
            if self.current != W::ZERO {
                let offset = self.current.leading_zeros() as usize;
                // clear the bit just reported
                self.current = self.current & !W::msb_mask(offset);
                return Some(self.word_idx * W::BITS + offset);
            }
            self.word_idx += 1;
            self.current = self.load(self.word_idx);
        }
        None
    }
}

impl<W: Word> FusedIterator for IterOnes<'_, W> {}
