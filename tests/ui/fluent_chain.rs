use light_bitstore::{BitStore, Error};

fn main() -> Result<(), Error> {
    let mut store = BitStore::<u32>::new(100);
    let mask = BitStore::<u32>::with_all_set(100);
    let extra = BitStore::<u32>::from_ones_iter(100, [42])?;

    store.set(7, true)?;
    store.and(&mask)?.or(&extra)?.xor(&mask)?.not();

    assert_eq!(store.iter_ones().collect::<Vec<_>>(), [7, 42]);
    assert_eq!(store.copy(), store);
    Ok(())
}
