use log::{ debug, warn };
use nalgebra::Vector3;
use super::{
    coeffstruct::BiquadCoeffs,
    filtertype::{ validate_fc, validate_q, FilterError }
};
use crate::qsmooth_common::{ Filter, LinearValue };

/// Quality factor used by `set_fc(fc, fs)`: critically damped, no resonant peak
pub const DEFAULT_Q: f64 = 0.5;

struct DesignBiquadFilter
{
    filt_coeffs: BiquadCoeffs,
    k: f64,
    q: f64
}

impl DesignBiquadFilter
{
    fn new(fc: f64, fs: f64, q: f64) -> Self {
        let filt_coeffs = BiquadCoeffs::new();
        let k = (std::f64::consts::PI * fc / fs).tan();

        Self {
            filt_coeffs,
            k,
            q
        }
    }

    fn coeffs(&mut self) {
        let w = self.k * self.k;
        let alpha = w + self.k / self.q + 1.0;

        let a0 = w / alpha;
        let a1 = 2.0 * a0;
        let a2 = a0;

        let b0 = 1.0;
        let b1 = 2.0 * (w - 1.0) / alpha;
        let b2 = (w - self.k / self.q + 1.0) / alpha;

        self.filt_coeffs.set_coeffs((a0, a1, a2, b0, b1, b2))
    }
}

/// Bi-quad low pass (direct form I)
///
/// $$y[n] = a_0 x[n] + a_1 x[n - 1] + a_2 x[n - 2] - b_1 y[n - 1] - b_2 y[n - 2]$$
/// where:
/// $K = \tan{\pi \frac{f_c}{f_s}}$
/// $W = K^2$
/// $\alpha = W + \frac{K}{Q} + 1$
/// $a_0 = \frac{W}{\alpha},\; a_1 = 2 a_0,\; a_2 = a_0$
/// $b_1 = \frac{2 (W - 1)}{\alpha},\; b_2 = \frac{W - \frac{K}{Q} + 1}{\alpha}$
///
/// Only for linear values. Rotations have no bi-quad counterpart.
/// Ref: <http://www.earlevel.com/main/2003/03/02/the-bilinear-z-transform/>
#[derive(Debug, Clone)]
pub struct BiQuad<T>
{
    coeffs: BiquadCoeffs,
    x1: T,
    x2: T,
    y1: T,
    y2: T,
    y0: T,
    designed: bool
}

pub type BiQuadVector3 = BiQuad<Vector3<f64>>;

impl<T: LinearValue> BiQuad<T>
{
    /// Undesigned filter: zero coefficients, output and history at zero
    pub fn new() -> Self {
        Self {
            coeffs: BiquadCoeffs::new(),
            x1: T::zero(),
            x2: T::zero(),
            y1: T::zero(),
            y2: T::zero(),
            y0: T::zero(),
            designed: false
        }
    }

    /// Create and design the filter with `DEFAULT_Q`
    pub fn with_fc(fc: f64, fs: f64) -> Self {
        Self::with_fc_q(fc, fs, DEFAULT_Q)
    }

    /// Create and design the filter
    ///
    /// # Args
    /// -----
    ///
    /// `fc`: cutoff frequency in Hz
    /// `fs`: sample rate in Hz
    /// `q`: quality factor
    ///
    pub fn with_fc_q(fc: f64, fs: f64, q: f64) -> Self {
        let mut filter = Self::new();
        filter.set_fc_q(fc, fs, q);
        filter
    }

    /// Checked constructor. `q` defaults to `DEFAULT_Q`.
    pub fn try_with_fc(fc: f64, fs: f64, q: Option<f64>) -> Result<Self, FilterError> {
        let mut filter = Self::new();
        filter.try_set_fc_q(fc, fs, q.unwrap_or(DEFAULT_Q))?;
        Ok(filter)
    }

    /// Design coefficients with an explicit quality factor (unchecked)
    pub fn set_fc_q(&mut self, fc: f64, fs: f64, q: f64) {
        if let Err(e) = validate_fc(fc, fs).and_then(|_| validate_q(q)) {
            warn!("bi-quad: {e}");
        }
        self.design_filter(fc, fs, q);
    }

    pub fn try_set_fc(&mut self, fc: f64, fs: f64) -> Result<(), FilterError> {
        self.try_set_fc_q(fc, fs, DEFAULT_Q)
    }

    /// Checked `set_fc_q`. On error the filter is left untouched.
    pub fn try_set_fc_q(&mut self, fc: f64, fs: f64, q: f64) -> Result<(), FilterError> {
        validate_fc(fc, fs)?;
        validate_q(q)?;
        self.design_filter(fc, fs, q);
        Ok(())
    }

    pub fn coeffs(&self) -> &BiquadCoeffs {
        &self.coeffs
    }

    pub fn is_designed(&self) -> bool {
        self.designed
    }

    /// Zero output and history, coefficients kept
    pub fn clear_delayed_samples_cache(&mut self) {
        self.set_value(T::zero());
    }

    fn design_filter(&mut self, fc: f64, fs: f64, q: f64) {
        let mut design_filter = DesignBiquadFilter::new(fc, fs, q);
        design_filter.coeffs();
        self.coeffs = design_filter.filt_coeffs;
        self.designed = true;
        debug!("bi-quad designed: fc={fc} fs={fs} q={q} coeffs={:?}", self.coeffs);
    }
}

impl<T: LinearValue> Default for BiQuad<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: LinearValue> Filter<T> for BiQuad<T>
{
    fn set_value(&mut self, value: T) {
        self.x1 = value.clone();
        self.x2 = value.clone();
        self.y1 = value.clone();
        self.y2 = value.clone();
        self.y0 = value;
    }

    fn set_fc(&mut self, fc: f64, fs: f64) {
        self.set_fc_q(fc, fs, DEFAULT_Q)
    }

    fn value(&self) -> &T {
        &self.y0
    }

    fn process(&mut self, sample: &T) -> &T {
        let c = self.coeffs;
        let y = sample.clone() * c.a0 +
            self.x1.clone() * c.a1 +
            self.x2.clone() * c.a2 -
            self.y1.clone() * c.b1 -
            self.y2.clone() * c.b2;

        self.x2 = std::mem::replace(&mut self.x1, sample.clone());
        self.y2 = std::mem::replace(&mut self.y1, y.clone());
        self.y0 = y;
        &self.y0
    }
}
