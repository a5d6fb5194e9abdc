//! The xorshift128+ random number generator. Fast, and very random.

use rand::{Error, RngCore, SeedableRng};
use rand_core::impls;

/// A stream of pseudo-random numbers generated using the xorshift+ technique
/// described here:
///
/// Vigna, Sebastiano (2014). "Further scramblings of Marsaglia's xorshift
/// generators". arXiv:1404.0390 (http://arxiv.org/abs/1404.0390)
///
/// The stream of numbers produced by this method repeats every 2**128 - 1 calls
/// (i.e. never, for all practical purposes).
///
/// Mazes are only reproducible if the random stream is, so we keep our own
/// generator rather than depend on `rand`'s `StdRng`, whose algorithm may change
/// between releases. The stream is fixed: `next_u64` is exactly the function
/// below, and `next_u32` is the low 32 bits of `next_u64`.
///
/// This generator is not suitable as a cryptographically secure random number
/// generator.
#[derive(Debug, Hash, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct XorShift128Plus {
    state: [u64; 2]
}

/// Substituted for an all-zero state, which would only ever produce zeros.
const NONZERO_STATE: [u64; 2] = [0x9e37_79b9_7f4a_7c15, 0xbf58_476d_1ce4_e5b9];

impl XorShift128Plus {
    pub fn new(seed: [u64; 2]) -> XorShift128Plus {
        if seed == [0, 0] {
            XorShift128Plus { state: NONZERO_STATE }
        } else {
            XorShift128Plus { state: seed }
        }
    }
}

impl RngCore for XorShift128Plus {
    fn next_u64(&mut self) -> u64 {
        let mut s1 = self.state[0];
        let s0 = self.state[1];
        self.state[0] = s0;
        s1 ^= s1 << 23;
        self.state[1] = s1 ^ s0 ^ (s1 >> 17) ^ (s0 >> 26);
        self.state[1].wrapping_add(s0)
    }

    fn next_u32(&mut self) -> u32 {
        (self.next_u64() & 0xffff_ffff) as u32
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for XorShift128Plus {
    type Seed = [u8; 16];

    /// The seed is the generator's two state words, little-endian.
    fn from_seed(seed: [u8; 16]) -> XorShift128Plus {
        let mut low = [0; 8];
        let mut high = [0; 8];
        low.copy_from_slice(&seed[..8]);
        high.copy_from_slice(&seed[8..]);
        XorShift128Plus::new([u64::from_le_bytes(low), u64::from_le_bytes(high)])
    }
}

#[test]
fn simple() {
    let mut rng = XorShift128Plus::new([1, 4]);

    // Calculated by hand following the algorithm given in the paper. The upper
    // bits are mostly zero because we started with a poor seed; once it has run
    // for a while, we'll get an even mix of ones and zeros in all 64 bits.
    assert_eq!(rng.next_u64(), 0x800049);
    assert_eq!(rng.next_u64(), 0x3000186);
    assert_eq!(rng.next_u64(), 0x400003001145);
}

#[test]
fn low_half() {
    let mut rng = XorShift128Plus::new([1, 4]);
    assert_eq!(rng.next_u32(), 0x800049);
    assert_eq!(rng.next_u32(), 0x3000186);
    assert_eq!(rng.next_u32(), 0x3001145);
}

#[test]
fn from_seed_matches_new() {
    let mut seed = [0; 16];
    seed[0] = 1;
    seed[8] = 4;
    let mut seeded = XorShift128Plus::from_seed(seed);
    let mut direct = XorShift128Plus::new([1, 4]);
    for _ in 0..10 {
        assert_eq!(seeded.next_u64(), direct.next_u64());
    }
}

#[test]
fn zero_seed_still_random() {
    let mut rng = XorShift128Plus::new([0, 0]);
    assert!((0..4).any(|_| rng.next_u64() != 0));
}

#[test]
fn same_seed_same_stream() {
    let mut a = XorShift128Plus::seed_from_u64(17);
    let mut b = XorShift128Plus::seed_from_u64(17);
    let mut bytes_a = [0; 13];
    let mut bytes_b = [0; 13];
    a.fill_bytes(&mut bytes_a);
    b.fill_bytes(&mut bytes_b);
    assert_eq!(bytes_a, bytes_b);
    assert_eq!(a.next_u64(), b.next_u64());
}
