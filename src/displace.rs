//! Optional surface displacement post-pass.

use nalgebra::Point3;

/// A displacement applied to the vertex list after subdivision and before
/// normal computation.
///
/// The pass operates on a fixed-length mutable slice: it may move vertices
/// but cannot add, remove or reorder them, so the normal/triangle index
/// correspondence cannot be broken. Any closure over `&mut [Point3<f64>]`
/// works directly:
///
/// ```
/// use icosphere::{generate_icosphere_with, IcosphereParams, Point3};
///
/// // Flatten the sphere into an ellipsoid
/// let squash = |positions: &mut [Point3<f64>]| {
///     for p in positions {
///         p.z *= 0.5;
///     }
/// };
/// let params = IcosphereParams::new().with_subdivisions(1);
/// let result = generate_icosphere_with(&params, &squash)?;
/// assert_eq!(result.vertices, 42);
/// # Ok::<(), icosphere::IcosphereError>(())
/// ```
pub trait Displacement {
    /// Displace the vertex positions in place.
    fn displace(&self, positions: &mut [Point3<f64>]);
}

impl<F> Displacement for F
where
    F: Fn(&mut [Point3<f64>]),
{
    fn displace(&self, positions: &mut [Point3<f64>]) {
        self(positions);
    }
}

/// A deterministic radial height field.
///
/// Offsets every vertex along its own radial direction by a trigonometric
/// wave of the given frequency, a cheap stand-in for procedural terrain
/// noise on planet-style spheres.
#[derive(Debug, Clone, Copy)]
pub struct RadialWave {
    /// Peak radial offset added to the unit radius.
    pub amplitude: f64,

    /// Angular frequency of the wave across the surface.
    pub frequency: f64,
}

impl RadialWave {
    /// Create a radial wave displacement.
    #[must_use]
    pub const fn new(amplitude: f64, frequency: f64) -> Self {
        Self {
            amplitude,
            frequency,
        }
    }
}

impl Displacement for RadialWave {
    fn displace(&self, positions: &mut [Point3<f64>]) {
        for p in positions {
            let radial = p.coords.normalize();
            let height = (self.frequency * p.x).sin()
                * (self.frequency * p.y).cos()
                * (self.frequency * p.z).sin();
            *p += radial * (self.amplitude * height);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn ring() -> Vec<Point3<f64>> {
        vec![
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(-1.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn closure_acts_as_displacement() {
        let mut positions = ring();
        let double = |positions: &mut [Point3<f64>]| {
            for p in positions.iter_mut() {
                p.coords *= 2.0;
            }
        };
        Displacement::displace(&double, &mut positions);
        assert!((positions[0].x - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn radial_wave_is_bounded_by_amplitude() {
        let wave = RadialWave::new(0.1, 3.0);
        let mut positions = ring();
        wave.displace(&mut positions);
        for p in &positions {
            let r = p.coords.norm();
            assert!((r - 1.0).abs() <= 0.1 + 1e-12, "radius {r} out of bounds");
        }
    }

    #[test]
    fn radial_wave_is_deterministic() {
        let wave = RadialWave::new(0.05, 2.0);
        let mut a = ring();
        let mut b = ring();
        wave.displace(&mut a);
        wave.displace(&mut b);
        assert_eq!(a, b);
    }
}
