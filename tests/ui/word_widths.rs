use light_bitstore::{BitStore, Word};

fn scenario<W: Word>() {
    let mut store = BitStore::<W>::new(10);
    store.set(0, true).unwrap();
    store.set(9, true).unwrap();
    assert_eq!(store.iter().collect::<Vec<_>>().len(), 10);
    assert_eq!(store.count_ones(), 2);
    assert_eq!(store.bytes(), store.word_count() * W::BITS / 8);
}

fn main() {
    scenario::<u8>();
    scenario::<u16>();
    scenario::<u32>();
    scenario::<u64>();
}
