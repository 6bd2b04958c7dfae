//! Largest-remainder apportionment.
//!
//! `remaining` is split across weights so that shares sum to exactly
//! `remaining`. Every share is the floor of its exact proportional value, plus
//! at most one unit. Leftover units go to the largest fractional remainders;
//! equal remainders are broken by ascending position. Only integer division is
//! used, so every node computes the same shares.

use crate::error::SplitterError;
use paysplit_types::ShareAmount;

/// Split `remaining` proportionally to `weights`.
///
/// Fails with `NoTargets` when the weights sum to zero and `Overflow` when
/// `remaining` is negative.
pub fn apportion(remaining: ShareAmount, weights: &[u16]) -> Result<Vec<ShareAmount>, SplitterError> {
    if remaining < 0 {
        return Err(SplitterError::Overflow);
    }
    let weight_sum: i128 = weights.iter().map(|&w| i128::from(w)).sum();
    if weight_sum == 0 {
        return Err(SplitterError::NoTargets);
    }

    let total = i128::from(remaining);
    let mut shares = Vec::with_capacity(weights.len());
    // Fractional remainders share the denominator `weight_sum`, so the numerators compare directly.
    let mut fractions = Vec::with_capacity(weights.len());
    let mut assigned: i128 = 0;
    for (index, &weight) in weights.iter().enumerate() {
        let numerator = total * i128::from(weight);
        let base = numerator / weight_sum;
        assigned += base;
        shares.push(base);
        fractions.push((numerator % weight_sum, index));
    }

    let leftover = total - assigned;
    debug_assert!(leftover >= 0 && leftover < weights.len() as i128);

    fractions.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    for &(_, index) in fractions.iter().take(leftover as usize) {
        shares[index] += 1;
    }

    shares
        .into_iter()
        .map(|s| ShareAmount::try_from(s).map_err(|_| SplitterError::Overflow))
        .collect()
}
