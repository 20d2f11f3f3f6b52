use rand::{RngCore, SeedableRng};

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const ADDEND: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

/// 48-bit linear congruential generator producing the same stream as `java.util.Random`.
///
/// Deals are pinned to this stream, so the same seed yields the same board everywhere.
/// `seed_from_u64` takes the seed verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JavaRandom {
    state: u64,
}

impl JavaRandom {
    pub const fn new(seed: u64) -> Self {
        Self {
            state: (seed ^ MULTIPLIER) & MASK,
        }
    }

    fn next_bits(&mut self, bits: u32) -> i32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(ADDEND) & MASK;
        (self.state >> (48 - bits)) as i32
    }

    /// Uniform value in `0..bound`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero or does not fit in an `i32`.
    pub fn next_int(&mut self, bound: u32) -> u32 {
        let bound = i32::try_from(bound).expect("bound must fit in i32");
        assert!(bound > 0, "bound must be positive");

        if bound & -bound == bound {
            return ((i64::from(bound) * i64::from(self.next_bits(31))) >> 31) as u32;
        }

        loop {
            let bits = self.next_bits(31);
            let val = bits % bound;
            // rejects the tail that would bias low values
            if bits.wrapping_sub(val).wrapping_add(bound - 1) >= 0 {
                return val as u32;
            }
        }
    }
}

impl RngCore for JavaRandom {
    fn next_u32(&mut self) -> u32 {
        self.next_bits(32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let high = i64::from(self.next_bits(32));
        let low = i64::from(self.next_bits(32));
        (high << 32).wrapping_add(low) as u64
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for JavaRandom {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
