//! Faster (but not DoS-resistant) hash sets for word lookups
use farmhash;
use std::collections::HashSet;
use std::hash::{Hash, Hasher, BuildHasherDefault};

/// Chain farmhash over every write
///
/// farmhash isn't a streaming hash, so each write is hashed with the previous state as its seed.
/// `str` hashes as its bytes followed by a terminator, so both writes have to count.
#[derive(Default)]
pub struct FarmHasher(u64);

impl Hasher for FarmHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.0 = farmhash::hash64_with_seed(bytes, self.0);
    }
}

pub type Farm = BuildHasherDefault<FarmHasher>;
pub type FarmSet<X> = HashSet<X, Farm>;

pub fn new_farm_set<X: Hash + Eq>() -> FarmSet<X> {
    Default::default()
}
