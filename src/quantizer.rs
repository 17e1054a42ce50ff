//! Nearest-note scale quantizer.
//!
//! Maps a continuous unit-per-octave control value onto the nearest
//! note of a selected scale. Pure and total: every input, including
//! out-of-range scale selectors, produces a defined output.

use crate::scales;

/// Quantize a unit-per-octave value against a scale.
///
/// The value is converted to a semitone count (rounded half away from
/// zero), offset by `root` and `transpose`, then matched against the
/// resolved scale. Each entry is rotated by `rotation` semitones
/// within the octave before its distance to the input pitch class is
/// measured; the entry minimizing that distance wins, with ties going
/// to the lowest-indexed entry. The winning entry is applied
/// unrotated when rebuilding the output value.
///
/// An empty scale (out-of-range selector) yields the octave floor of
/// the input with no degree offset.
pub fn quantize(value: f64, scale_index: i32, root: i32, transpose: i32, rotation: i32) -> f64 {
    let scale = scales::resolve(scale_index);

    let n = (value * 12.0).round() as i32 + root + transpose;
    let pitch_class = n.rem_euclid(12);

    let mut degree = 0;
    let mut best_distance = i32::MAX;
    for (i, &step) in scale.steps().iter().enumerate() {
        // Microtonal entries participate at their integer truncation.
        let candidate = (step as i32 + rotation).rem_euclid(12);
        let distance = (pitch_class - candidate).abs();
        if distance < best_distance {
            best_distance = distance;
            degree = i;
        }
    }

    let offset = match scale.steps().get(degree) {
        Some(&step) => step as i32,
        None => 0,
    };
    f64::from(n.div_euclid(12) * 12 + offset) / 12.0
}
