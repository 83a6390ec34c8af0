//! yh-bench: Criterion benchmarks for yh-core (see `benches/`).

/// Deterministic hand sample (xorshift64), so runs are comparable without a rand dependency.
pub fn gen_dice_samples(n: usize) -> Vec<[u8; 5]> {
    let mut x: u64 = 0x1234_5678_9ABC_DEF0;
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let mut d = [0u8; 5];
        for die in d.iter_mut() {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            *die = (x % 6) as u8 + 1;
        }
        out.push(d);
    }
    out
}
