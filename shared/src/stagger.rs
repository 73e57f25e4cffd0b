const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// Stable pseudo-random value in `[0, 1)` derived from a string.
///
/// FNV-1a over the UTF-16 code units of `input`, reduced to three decimal
/// places. Animation delays are seeded from this, so the output must never
/// change for a given input.
pub fn hash01(input: &str) -> f64 {
    let hash = input.encode_utf16().fold(FNV_OFFSET_BASIS, |h, unit| {
        (h ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    });
    f64::from(hash % 1000) / 1000.0
}

/// Milliseconds in `[0, cap_ms]` derived from `hash01(key)`, rounded.
pub fn hashed_ms(key: &str, cap_ms: f64) -> u32 {
    (hash01(key) * cap_ms).round() as u32
}
