use std::ops::{ Add, Mul, Sub };
use num_traits::Zero;

/// Values that can be filtered by linear combination (scalars, vectors)
///
/// Addition, subtraction and scaling by an `f64` gain, plus a zero element
/// used as the rest output of a freshly built filter.
pub trait LinearValue
where
    Self: Clone + Zero + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self>
{ }

impl<T> LinearValue for T
where
    T: Clone + Zero + Add<Output = T> + Sub<Output = T> + Mul<f64, Output = T>
{ }

/// Filter contract shared by every smoother
pub trait Filter<T>
{
    /// Force the filter output. Filters with history reset every delayed
    /// sample to `value` as well.
    fn set_value(&mut self, value: T);

    /// Design coefficients from cutoff `fc` and sample rate `fs` (Hz).
    ///
    /// Unchecked: `fs == 0` or `fc` outside `(0, fs / 2)` yields non-finite
    /// or meaningless coefficients.
    fn set_fc(&mut self, fc: f64, fs: f64);

    /// Current filter output
    fn value(&self) -> &T;

    /// Feed one sample and return the updated output
    fn process(&mut self, sample: &T) -> &T;

    /// Filter a whole frame
    ///
    /// # Args
    /// -----
    ///
    /// `frame`: input samples, in time order
    ///
    /// # Return
    /// --------
    ///
    /// `Vec<T>` with one output per input sample
    ///
    fn filt_frame(&mut self, frame: &[T]) -> Vec<T>
    where
        T: Clone
    {
        frame
            .iter()
            .map(|x| self.process(x).clone())
            .collect()
    }
}
