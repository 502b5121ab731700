use super::filters::{
    biquad::{ BiQuad, DEFAULT_Q },
    filtertype::FilterError,
    onepole::OnePole
};
use crate::qsmooth_common::{ Filter, LinearValue };

/// # QFilters
///
/// Runtime choice between the two low-pass smoothers for linear values
/// (scalars, `nalgebra` vectors). Rotations use `OnePoleQuaternion` directly.
///
/// Implementation references:
/// - One-pole filter, <http://www.earlevel.com/main/2012/12/15/a-one-pole-filter/>
/// - The bilinear z transform, <http://www.earlevel.com/main/2003/03/02/the-bilinear-z-transform/>
///
/// # Low Pass One Pole (IIR)
/// $$y[n] = a_0x[n] + b_1y[n - 1]$$
/// $b_1 = e^{-2 \pi \frac{f_c}{f_s}}$, $a_0 = 1 - b_1$
///
/// # Bi-quad Low Pass
/// $$y[n] = a_0x[n] + a_1x[n - 1] + a_2x[n - 2] - b_1y[n - 1] - b_2y[n - 2]$$
/// $K = \tan{\pi \frac{f_c}{f_s}}$, $Q = 0.5$ unless given
///

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterType
{
    OnePole,
    BiQuad
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterParams
{
    OnePoleParams(f64),              // fc
    BiquadParams(f64, Option<f64>)   // fc, q
}

#[derive(Debug, Clone)]
pub enum Smoother<T>
{
    OnePole(OnePole<T>),
    BiQuad(BiQuad<T>)
}

impl<T: LinearValue> Smoother<T>
{
    /// Design the filter from params, checked
    ///
    /// # Args
    /// -----
    ///
    /// `params`: must match the filter variant (see `FilterParams`)
    /// `fs`: sample rate in Hz
    ///
    /// # Return
    /// --------
    ///
    /// `Result<(), FilterError>`
    ///
    pub fn design_filter(&mut self, params: FilterParams, fs: f64) -> Result<(), FilterError> {
        match self {
            Self::OnePole(onepole) => {
                match params {
                    FilterParams::OnePoleParams(fc) => onepole.try_set_fc(fc, fs),
                    _ => Err(FilterError::FilterCoeffsErrorNotCompatibleMode)
                }
            },
            Self::BiQuad(biquad) => {
                match params {
                    FilterParams::BiquadParams(fc, q) => {
                        biquad.try_set_fc_q(fc, fs, q.unwrap_or(DEFAULT_Q))
                    },
                    _ => Err(FilterError::FilterCoeffsErrorNotCompatibleMode)
                }
            }
        }
    }

    pub fn filter_type(&self) -> FilterType {
        match self {
            Self::OnePole(_) => FilterType::OnePole,
            Self::BiQuad(_) => FilterType::BiQuad
        }
    }

    pub fn is_designed(&self) -> bool {
        match self {
            Self::OnePole(onepole) => onepole.is_designed(),
            Self::BiQuad(biquad) => biquad.is_designed()
        }
    }
}

impl<T: LinearValue> Filter<T> for Smoother<T>
{
    fn set_value(&mut self, value: T) {
        match self {
            Self::OnePole(onepole) => onepole.set_value(value),
            Self::BiQuad(biquad) => biquad.set_value(value)
        }
    }

    fn set_fc(&mut self, fc: f64, fs: f64) {
        match self {
            Self::OnePole(onepole) => onepole.set_fc(fc, fs),
            Self::BiQuad(biquad) => biquad.set_fc(fc, fs)
        }
    }

    fn value(&self) -> &T {
        match self {
            Self::OnePole(onepole) => onepole.value(),
            Self::BiQuad(biquad) => biquad.value()
        }
    }

    fn process(&mut self, sample: &T) -> &T {
        match self {
            Self::OnePole(onepole) => onepole.process(sample),
            Self::BiQuad(biquad) => biquad.process(sample)
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct QFilter
{
    fs: f64,
}

impl QFilter
{
    /// Create new Filter Object
    ///
    /// # Args
    /// -----
    ///
    /// `fs`: sample rate
    ///
    pub fn new(fs: f64) -> Self
    {
        Self { fs }
    }

    pub fn fs(&self) -> f64 {
        self.fs
    }

    /// Generate an undesigned filter
    ///
    /// # Args
    /// -----
    ///
    /// `filter`: type of filter (see `FilterType`)
    ///
    /// # Return
    /// -------
    ///
    /// `Smoother<T>`
    ///
    pub fn get_filter<T: LinearValue>(&self, filter: FilterType) -> Smoother<T> {
        match filter {
            FilterType::OnePole => Smoother::OnePole(OnePole::new()),
            FilterType::BiQuad => Smoother::BiQuad(BiQuad::new())
        }
    }

    /// Generate the filter matching `params` and design it
    pub fn get_designed_filter<T: LinearValue>(&self, params: FilterParams) -> Result<Smoother<T>, FilterError> {
        let filter = match params {
            FilterParams::OnePoleParams(_) => FilterType::OnePole,
            FilterParams::BiquadParams(..) => FilterType::BiQuad
        };
        let mut smoother = self.get_filter(filter);
        smoother.design_filter(params, self.fs)?;
        Ok(smoother)
    }
}
