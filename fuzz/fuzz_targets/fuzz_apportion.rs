#![no_main]

use libfuzzer_sys::fuzz_target;

use paysplit_engine::apportion;

// First 8 bytes: amount to split. The rest: u16 weights.
// Shares must always sum to the amount and never go negative.
fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }

    let remaining = i64::from_le_bytes([
        data[0], data[1], data[2], data[3],
        data[4], data[5], data[6], data[7],
    ]);
    let weights: Vec<u16> = data[8..]
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    let Ok(shares) = apportion(remaining, &weights) else {
        return;
    };
    assert_eq!(shares.len(), weights.len());
    assert_eq!(shares.iter().sum::<i64>(), remaining);
    assert!(shares.iter().all(|&s| s >= 0));
});
