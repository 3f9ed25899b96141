#![no_main]

use benchgate::regression::parse_point_estimate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes in place of an estimates.json; must never panic and
    // must never yield a negative or non-finite estimate
    if let Ok(ns) = parse_point_estimate(data) {
        assert!(ns.is_finite() && ns >= 0.0);
    }
});
