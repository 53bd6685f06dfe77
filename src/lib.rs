//! A fixed-capacity bit store packed into machine words.
//! `no_std` + `alloc`, no `unsafe`.
//!
//! [`BitStore`] holds a fixed number of bits in an array of unsigned words
//! (`u8`, `u16`, `u32` or `u64`) and applies boolean algebra to whole words at
//! a time, so memory use is `capacity / word width` words instead of one byte
//! per flag.
//!
//! # Examples
//! ```
//! use light_bitstore::BitStore;
//!
//! let mut flags = BitStore::<u8>::new(10);
//! flags.set(0, true)?;
//! flags.set(9, true)?;
//! assert!(flags.get(9)?);
//! assert_eq!(flags.bytes(), 2);
//!
//! let mask = BitStore::<u8>::with_all_set(10);
//! flags.and(&mask)?.not().xor(&mask)?;
//! assert_eq!(flags.iter_ones().collect::<Vec<_>>(), [0, 9]);
//! # Ok::<(), light_bitstore::Error>(())
//! ```
//!
//! # Bit layout
//!
//! Bit `i` lives in word `i / W::BITS`. Within a word, offset 0 is the
//! *most* significant bit, so a `u8` word `0b1000_0001` holds bits 0 and 7.
//! The last word may contain padding bits past the capacity. Bulk operations
//! touch padding; indexed access, iteration, counting and equality ignore it.
//!
//! # Features
//!
//! - Indexed access with bounds checks: `get`, `set`, `toggle`
//! - In-place, chainable bulk operations: `and`, `or`, `xor`, `not`, `fill`
//! - Per-word shifts `lshift`/`rshift` (no carry between words)
//! - Operators: `&`, `|`, `^`, `!`, `<<`, `>>`, `&=`, `|=`, `^=`, `<<=`, `>>=`
//! - Iteration over all bits (`iter()`) or over set indices (`iter_ones()`)
//! - `count_ones`, `first_set_bit`, `copy`, `bytes`

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;

mod address;
mod bitstore;
mod error;
mod word;

pub use address::{BitAddress, word_count};
pub use bitstore::{BitStore, Iter, IterOnes};
pub use error::{Error, Result};
pub use word::Word;
