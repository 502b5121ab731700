use nalgebra::UnitQuaternion;
use super::coeffstruct::OnePoleCoeffs;
use crate::qsmooth_common::LinearValue;

/// How a one-pole filter mixes the new sample with its previous output,
/// and which value a new filter rests at.
pub trait Blend<T>
{
    /// Output of a filter that has seen no sample yet
    fn rest() -> T;

    /// One update step from `y0` towards `sample`
    fn one_pole(coeffs: &OnePoleCoeffs, y0: &T, sample: &T) -> T;
}

/// `y0 = a0 x + b1 y0`, for scalars and vectors
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Linear;

impl<T: LinearValue> Blend<T> for Linear
{
    fn rest() -> T {
        T::zero()
    }

    fn one_pole(coeffs: &OnePoleCoeffs, y0: &T, sample: &T) -> T {
        sample.clone() * coeffs.a0 + y0.clone() * coeffs.b1
    }
}

/// Slerp of fraction `a0` from `y0` towards the sample along the shorter
/// arc. Keeps rotations on the unit sphere.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spherical;

impl Blend<UnitQuaternion<f64>> for Spherical
{
    fn rest() -> UnitQuaternion<f64> {
        UnitQuaternion::identity()
    }

    fn one_pole(coeffs: &OnePoleCoeffs, y0: &UnitQuaternion<f64>, sample: &UnitQuaternion<f64>) -> UnitQuaternion<f64> {
        // None when sin(half angle) is within epsilon of zero but the
        // rotations are not bit-identical; both are then the same rotation
        y0.try_slerp(sample, coeffs.a0, f64::EPSILON).unwrap_or(*sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use nalgebra::Vector3;

    fn coeffs(a0: f64) -> OnePoleCoeffs {
        OnePoleCoeffs { a0, b1: 1.0 - a0 }
    }

    #[test]
    fn linear_rest_is_zero() {
        assert_eq!(<Linear as Blend<f64>>::rest(), 0.0);
        assert_eq!(<Linear as Blend<Vector3<f64>>>::rest(), Vector3::zeros());
    }

    #[test]
    fn linear_mixes_componentwise() {
        let y = Linear::one_pole(&coeffs(0.25), &Vector3::new(4.0, 0.0, -4.0), &Vector3::new(0.0, 8.0, 4.0));
        assert_approx_eq!(y.x, 3.0);
        assert_approx_eq!(y.y, 2.0);
        assert_approx_eq!(y.z, -2.0);
    }

    #[test]
    fn spherical_rest_is_identity() {
        assert_eq!(Spherical::rest(), UnitQuaternion::identity());
    }

    #[test]
    fn spherical_moves_fraction_of_angle() {
        let target = UnitQuaternion::from_euler_angles(0.0, 0.0, 1.0);
        let y = Spherical::one_pole(&coeffs(0.5), &UnitQuaternion::identity(), &target);
        assert_approx_eq!(y.angle(), 0.5);
        assert_approx_eq!(y.quaternion().norm(), 1.0);
    }

    #[test]
    fn spherical_takes_shorter_arc() {
        // same rotation as `target`, opposite hemisphere
        let target = UnitQuaternion::from_euler_angles(0.0, 0.0, 0.4);
        let flipped = UnitQuaternion::new_unchecked(-target.into_inner());
        let y = Spherical::one_pole(&coeffs(0.5), &UnitQuaternion::identity(), &flipped);
        assert_approx_eq!(y.angle(), 0.2);
    }

    #[test]
    fn spherical_coincident_rotations_stay_put() {
        let q = UnitQuaternion::from_euler_angles(0.3, -0.2, 0.1);
        let y = Spherical::one_pole(&coeffs(0.1), &q, &q);
        assert_approx_eq!(y.angle_to(&q), 0.0);
    }

    #[test]
    fn spherical_nearly_coincident_rotations_stay_unit() {
        let q = UnitQuaternion::from_euler_angles(0.3, -0.2, 0.1);
        let mut nudged = q.into_inner();
        nudged.coords.x += 1e-15;
        let near = UnitQuaternion::from_quaternion(nudged);
        let y = Spherical::one_pole(&coeffs(0.3), &q, &near);
        assert_approx_eq!(y.quaternion().norm(), 1.0, 1e-12);
        assert_approx_eq!(y.angle_to(&q), 0.0);
    }
}
