#[macro_use]
extern crate quickcheck_macros;

mod sort;
mod tree;

use quickcheck::{Arbitrary, Gen};

/// A value paired with the position it was generated at, so stability can be
/// checked after sorting by `key` alone.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Tagged {
    pub key: u8,
    pub tag: usize,
}

/// A list of [`Tagged`] values with tags `0..len` in order.
#[derive(Clone, Debug)]
pub(crate) struct TaggedList(pub Vec<Tagged>);

impl Arbitrary for TaggedList {
    fn arbitrary(g: &mut Gen) -> Self {
        // Small keys so duplicates are common.
        let keys: Vec<u8> = Vec::arbitrary(g);
        TaggedList(
            keys.into_iter()
                .enumerate()
                .map(|(tag, key)| Tagged { key: key % 8, tag })
                .collect(),
        )
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let keys: Vec<u8> = self.0.iter().map(|t| t.key).collect();
        Box::new(keys.shrink().map(|keys| {
            TaggedList(
                keys.into_iter()
                    .enumerate()
                    .map(|(tag, key)| Tagged { key, tag })
                    .collect(),
            )
        }))
    }
}
