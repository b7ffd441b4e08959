//! Die rolls and combinatorial probability for the search/combat ruleset
//!
//! Rolls draw from a caller-supplied random source so turn resolution
//! stays reproducible under a seeded stream.

use rand::Rng;

use super::config::DIE_FACES;

/// Roll one standard die
pub fn roll_die(rng: &mut impl Rng) -> u32 {
    rng.gen_range(1..=DIE_FACES)
}

/// Sum of `n` independent die rolls; zero dice sum to zero
pub fn sum_of_dice(rng: &mut impl Rng, n: u32) -> u32 {
    (0..n).map(|_| roll_die(rng)).sum()
}

/// Percentage chance that `n` dice, each hitting with probability
/// `p_per_die`, score at least `k` hits.
///
/// Binomial tail probability truncated to a whole percent. Truncation
/// (not rounding) is what the printed tables use: one die needing one
/// hit at 1-in-6 reads 16%, not 17%.
pub fn percent_at_least(n: u32, k: u32, p_per_die: f64) -> u32 {
    if k == 0 {
        return 100;
    }
    if k > n {
        return 0;
    }

    let mut tail = 0.0;
    for hits in k..=n {
        tail += binomial(n, hits)
            * p_per_die.powi(hits as i32)
            * (1.0 - p_per_die).powi((n - hits) as i32);
    }
    (tail * 100.0) as u32
}

/// Binomial coefficient n-choose-k as a float
fn binomial(n: u32, k: u32) -> f64 {
    let k = k.min(n - k);
    let mut c = 1.0;
    for i in 0..k {
        c = c * (n - i) as f64 / (i + 1) as f64;
    }
    c
}
