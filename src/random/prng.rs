// Deterministic string-seeded PRNG.
//
// Four 32-bit words are derived by hashing salted variants of the seed text with
// xmur3, then combined by the sfc32 stream generator. Only wrapping `u32`
// arithmetic is used before the final division, so the stream is identical on
// every platform for the same seed text.

/// Replaces an empty seed in the first hashed word only.
pub const DEFAULT_SEED: &str = "seed";

/// Seeded small-fast-counter generator.
///
/// One instance belongs to exactly one generation call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeededRng {
    a: u32,
    b: u32,
    c: u32,
    d: u32,
}

impl SeededRng {
    /// Create a generator from seed text.
    ///
    /// An empty seed hashes [`DEFAULT_SEED`] for the first word; the salted words still hash
    /// the empty text, so `""` and `"seed"` give different streams.
    pub fn new(seed: &str) -> Self {
        let first = if seed.is_empty() { DEFAULT_SEED } else { seed };
        Self::from_words(
            xmur3(first),
            xmur3(&format!("{seed}$")),
            xmur3(&format!("@{seed}")),
            xmur3(&format!("#{seed}")),
        )
    }

    /// Create a generator from explicit state words.
    pub fn from_words(a: u32, b: u32, c: u32, d: u32) -> Self {
        Self { a, b, c, d }
    }

    /// Advance the stream and return the raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        let mut t = self.a.wrapping_add(self.b);
        self.a = self.b ^ (self.b >> 9);
        self.b = self.c.wrapping_add(self.c << 3);
        self.c = self.c.rotate_left(21);
        self.d = self.d.wrapping_add(1);
        t = t.wrapping_add(self.d);
        self.c = self.c.wrapping_add(t);
        t
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Uniform integer in `[min, max]` (both inclusive).
    ///
    /// If `max < min` the bounds are swapped.
    pub fn next_int(&mut self, min: i64, max: i64) -> i64 {
        let (lo, hi) = if max < min { (max, min) } else { (min, max) };
        let span = (hi - lo + 1) as f64;
        (self.next_f64() * span).floor() as i64 + lo
    }

    /// Uniform `usize` in `[min, max]` (both inclusive).
    pub fn next_usize(&mut self, min: usize, max: usize) -> usize {
        self.next_int(min as i64, max as i64) as usize
    }

    /// Pick one element; `None` for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let i = (self.next_f64() * items.len() as f64).floor() as usize;
        items.get(i.min(items.len() - 1))
    }

    /// Return a reordered copy of `items`.
    ///
    /// Each element is assigned one random key (in input order) and the list is stably sorted
    /// by key. This is an approximate key-sort shuffle, not a uniform Fisher-Yates
    /// permutation; use it for visual variety only.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut keyed: Vec<(f64, &T)> = items.iter().map(|v| (self.next_f64(), v)).collect();
        keyed.sort_by(|x, y| x.0.total_cmp(&y.0));
        keyed.into_iter().map(|(_, v)| v.clone()).collect()
    }
}

/// xmur3 string hash over UTF-16 code units, finalized once.
pub(crate) fn xmur3(s: &str) -> u32 {
    let units: Vec<u16> = s.encode_utf16().collect();
    let mut h: u32 = 1_779_033_703 ^ (units.len() as u32);
    for unit in units {
        h = (h ^ u32::from(unit)).wrapping_mul(3_432_918_353);
        h = h.rotate_left(13);
    }
    h = (h ^ (h >> 16)).wrapping_mul(2_246_822_507);
    h = (h ^ (h >> 13)).wrapping_mul(3_266_489_909);
    h ^ (h >> 16)
}

#[cfg(test)]
#[path = "../../tests/unit/random/prng.rs"]
mod tests;
