//! Seeded randomness port.
//!
//! Every component obtains randomness exclusively through [`RandomSource`] — never from
//! an ambient global generator — so the whole output sequence of a session is fully
//! determined by the seed and the call order, and tests can replay it verbatim.
//!
//! Misuse of the port (`choice` on an empty slice, an inverted interval) is a caller
//! bug, not a runtime condition: it panics instead of returning an error, since a
//! silently tolerated violation would corrupt the deterministic stream.

use {
  rand::{Rng, SeedableRng},
  rand_pcg::Pcg64
};

pub trait RandomSource {
  /// Uniform integer in the closed interval `[lo, hi]`, both bounds inclusive.
  ///
  /// Panics if `lo > hi`.
  fn uniform_int(&mut self, lo: i64, hi: i64) -> i64;

  /// Uniform choice from a non-empty slice.
  ///
  /// Panics on an empty slice. Defined in terms of [`Self::uniform_int`], so
  /// implementors only supply one primitive.
  fn choice<'a, T>(&mut self, items: &'a [T]) -> &'a T where Self: Sized {
    assert!(!items.is_empty(), "choice on an empty slice");
    &items[self.uniform_int(0, items.len() as i64 - 1) as usize]
  }
}

/// [`RandomSource`] backed by PCG XSL 128/64. The generator algorithm is pinned,
/// so a seed reproduces the same stream across platforms and releases.
pub struct Pcg64Source {
  rng: Pcg64
}

impl Pcg64Source {
  pub fn seed_from_u64(seed: u64) -> Self {
    Self { rng: Pcg64::seed_from_u64(seed) }
  }

  /// Fresh generator from process entropy, for when reproducibility is not wanted.
  pub fn from_entropy() -> Self {
    Self { rng: Pcg64::from_entropy() }
  }
}

impl RandomSource for Pcg64Source {
  fn uniform_int(&mut self, lo: i64, hi: i64) -> i64 {
    assert!(lo <= hi, "malformed interval [{}, {}]", lo, hi);
    self.rng.gen_range(lo..=hi)
  }
}
