/// Height granularity of the chunk prefabs
pub const DEFAULT_STEP: f32 = 0.5;

/// Rounds `value` to the nearest multiple of `step`.
///
/// Ties go to the even multiple (`0.25` with step `0.5` becomes `0.0`,
/// `0.75` becomes `1.0`). Anything mapping heights to world units must use
/// this function so rendered terrain matches what was validated.
pub fn quantize(value: f32, step: f32) -> f32 {
    assert!(
        step.is_finite() && step > 0.0,
        "quantization step must be finite and positive, got {step}"
    );
    (value / step).round_ties_even() * step
}
