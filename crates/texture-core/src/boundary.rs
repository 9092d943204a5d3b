// File: crates/texture-core/src/boundary.rs
// Summary: Class-boundary outline of the soil texture chart as (width, height) fractions.

/// Pen-down strokes tracing the borders between texture classes.
///
/// Values are fractions of the surface width and height. The first stroke
/// retraces some borders; the second is the silt / silt loam corner, drawn
/// after a pen-up.
pub static CLASS_BOUNDARY: [&[(f64, f64)]; 2] = [
    &[
        (0.34, 0.42),
        (0.66, 0.42),
        (0.58, 0.58),
        (0.74, 0.58),
        (0.79, 0.68),
        (0.63, 0.68),
        (0.58, 0.58),
        (0.38, 0.58),
        (0.32, 0.46),
        (0.24, 0.62),
        (0.40, 0.62),
        (0.38, 0.58),
        (0.43, 0.68),
        (0.79, 0.68),
        (0.61, 0.68),
        (0.50, 0.90),
        (0.34, 0.90),
        (0.16, 0.78),
        (0.14, 0.82),
        (0.23, 0.90),
        (0.50, 0.90),
        (0.52, 0.86),
        (0.46, 0.86),
        (0.40, 0.74),
        (0.43, 0.68),
        (0.40, 0.74),
        (0.18, 0.74),
    ],
    &[(0.74, 0.90), (0.78, 0.82), (0.86, 0.82)],
];

/// The boundary table, independent of any surface size.
pub fn class_boundary_polygon() -> &'static [&'static [(f64, f64)]] {
    &CLASS_BOUNDARY
}

pub fn vertex_count() -> usize {
    CLASS_BOUNDARY.iter().map(|s| s.len()).sum()
}
