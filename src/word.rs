use core::fmt::Debug;
use core::hash::Hash;
use num_traits::{PrimInt, Unsigned};

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// An unsigned integer type usable as the backing word of a
/// [`BitStore`](crate::BitStore).
///
/// Implemented for `u8`, `u16`, `u32` and `u64`. Wider words move more bits
/// per bulk operation; narrower words waste fewer padding bits at the end of
/// the store.
///
/// This trait is sealed.
pub trait Word: PrimInt + Unsigned + Debug + Hash + Default + sealed::Sealed + 'static {
    /// Number of bits in one word.
    const BITS: usize;

    /// A word with every bit unset.
    const ZERO: Self;

    /// A word with every bit set.
    const ONES: Self;

    /// Single-bit mask for `offset`, where offset 0 is the most significant
    /// bit.
    #[inline]
    fn msb_mask(offset: usize) -> Self {
        debug_assert!(offset < Self::BITS);
        Self::one() << (Self::BITS - 1 - offset)
    }
}

macro_rules! impl_word {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Word for $ty {
                const BITS: usize = core::mem::size_of::<$ty>() * 8;
                const ZERO: Self = 0;
                const ONES: Self = <$ty>::MAX;
            }
        )+
    };
}

impl_word!(u8, u16, u32, u64);
