use std::marker::PhantomData;
use log::{ debug, warn };
use nalgebra::{ UnitQuaternion, Vector3 };
use super::{
    blend::{ Blend, Linear, Spherical },
    coeffstruct::OnePoleCoeffs,
    filtertype::{ validate_fc, FilterError }
};
use crate::qsmooth_common::Filter;

struct DesignOnePoleFilter {
    filt_coeffs: OnePoleCoeffs,
    alpha: f64
}

impl DesignOnePoleFilter {
    fn new(fc: f64, fs: f64) -> Self {
        let filt_coeffs = OnePoleCoeffs::new();
        let twopi = 2.0 * std::f64::consts::PI;
        let alpha = (-twopi * fc / fs).exp();

        Self {
            filt_coeffs,
            alpha
        }
    }

    fn coeffs(&mut self) {
        let b1 = self.alpha;
        let a0 = 1.0 - b1;
        self.filt_coeffs.set_coeffs((a0, b1));
    }
}

/// One-pole low pass (exponential smoother)
///
/// $$y[n] = a_0 x[n] + b_1 y[n - 1]$$
/// where:
/// $b_1 = e^{-2 \pi \frac{f_c}{f_s}}$
/// $a_0 = 1 - b_1$
///
/// `B` decides how the update is blended: `Linear` for scalars and
/// vectors, `Spherical` for rotations.
/// Ref: <http://www.earlevel.com/main/2012/12/15/a-one-pole-filter/>
#[derive(Debug, Clone)]
pub struct OnePole<T, B = Linear> {
    coeffs: OnePoleCoeffs,
    y0: T,
    designed: bool,
    _blend: PhantomData<B>
}

pub type OnePoleVector3 = OnePole<Vector3<f64>, Linear>;
pub type OnePoleQuaternion = OnePole<UnitQuaternion<f64>, Spherical>;

impl<T, B: Blend<T>> OnePole<T, B> {

    /// Undesigned filter: zero coefficients, output at rest
    pub fn new() -> Self {
        Self {
            coeffs: OnePoleCoeffs::new(),
            y0: B::rest(),
            designed: false,
            _blend: PhantomData
        }
    }

    /// Create and design the filter
    ///
    /// # Args
    /// -----
    ///
    /// `fc`: cutoff frequency in Hz
    /// `fs`: sample rate in Hz
    ///
    pub fn with_fc(fc: f64, fs: f64) -> Self {
        let mut filter = Self::new();
        filter.set_fc(fc, fs);
        filter
    }

    /// Like `with_fc` but rejects `fc`/`fs` outside `0 < fc < fs / 2`
    pub fn try_with_fc(fc: f64, fs: f64) -> Result<Self, FilterError> {
        let mut filter = Self::new();
        filter.try_set_fc(fc, fs)?;
        Ok(filter)
    }

    /// Checked `set_fc`. On error the filter is left untouched.
    pub fn try_set_fc(&mut self, fc: f64, fs: f64) -> Result<(), FilterError> {
        validate_fc(fc, fs)?;
        self.design_filter(fc, fs);
        Ok(())
    }

    pub fn coeffs(&self) -> &OnePoleCoeffs {
        &self.coeffs
    }

    pub fn is_designed(&self) -> bool {
        self.designed
    }

    /// Back to the rest output, coefficients kept
    pub fn clear_delayed_samples_cache(&mut self) {
        self.y0 = B::rest();
    }

    fn design_filter(&mut self, fc: f64, fs: f64) {
        let mut design_filter = DesignOnePoleFilter::new(fc, fs);
        design_filter.coeffs();
        self.coeffs = design_filter.filt_coeffs;
        self.designed = true;
        debug!("one-pole designed: fc={fc} fs={fs} a0={} b1={}", self.coeffs.a0, self.coeffs.b1);
    }
}

impl<T, B: Blend<T>> Default for OnePole<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B: Blend<T>> Filter<T> for OnePole<T, B> {
    fn set_value(&mut self, value: T) {
        self.y0 = value;
    }

    fn set_fc(&mut self, fc: f64, fs: f64) {
        if let Err(e) = validate_fc(fc, fs) {
            warn!("one-pole: {e}");
        }
        self.design_filter(fc, fs);
    }

    fn value(&self) -> &T {
        &self.y0
    }

    fn process(&mut self, sample: &T) -> &T {
        self.y0 = B::one_pole(&self.coeffs, &self.y0, sample);
        &self.y0
    }
}
