use std::hash::{BuildHasher, Hash, Hasher};

/// A key with a hash chosen by the test rather than derived from its value, so that collisions can
/// be forced. Equality still compares the value.
#[derive(Debug, Clone)]
pub struct Collider<T: Eq> {
    hash: u64,
    value: T,
}

impl<T: Eq> Collider<T> {
    pub const fn new(hash: u64, value: T) -> Collider<T> {
        Collider {
            hash,
            value,
        }
    }

    pub fn value(self) -> T {
        self.value
    }
}

impl<T: Eq> Hash for Collider<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<T: Eq> PartialEq for Collider<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Collider<T> {}

/// A hasher which returns the last `u64` it was given, unchanged.
#[derive(Debug)]
pub struct IdentityHasher {
    state: u64,
}

impl Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        // Only reached for keys that don't hash through write_u64, fold them in little-endian.
        for (offset, byte) in bytes.iter().enumerate() {
            self.state ^= (*byte as u64) << ((offset % 8) * 8);
        }
    }

    fn write_u64(&mut self, value: u64) {
        self.state = value;
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityBuildHasher;

impl BuildHasher for IdentityBuildHasher {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> Self::Hasher {
        IdentityHasher {
            state: 0,
        }
    }
}
