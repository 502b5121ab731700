/// One-pole gains: `y[n] = a0 x[n] + b1 y[n - 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnePoleCoeffs {
    pub a0: f64,
    pub b1: f64
}

impl Default for OnePoleCoeffs
{
    fn default() -> Self {
        Self { a0: 0.0, b1: 0.0 }
    }
}

impl OnePoleCoeffs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_coeffs(&mut self, coeffs: (f64, f64)) {
        self.a0 = coeffs.0;
        self.b1 = coeffs.1;
    }
}

/// Bi-quad coefficients, `a` feed-forward and `b` feedback:
/// `y[n] = a0 x[n] + a1 x[n - 1] + a2 x[n - 2] - b1 y[n - 1] - b2 y[n - 2]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiquadCoeffs {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
    pub b0: f64,
    pub b1: f64,
    pub b2: f64
}

impl Default for BiquadCoeffs
{
    fn default() -> Self {
        Self { a0: 0.0, a1: 0.0, a2: 0.0, b0: 0.0, b1: 0.0, b2: 0.0 }
    }
}

impl BiquadCoeffs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_coeffs(&mut self, coeffs: (f64, f64, f64, f64, f64, f64)) {
        self.a0 = coeffs.0;
        self.a1 = coeffs.1;
        self.a2 = coeffs.2;
        self.b0 = coeffs.3;
        self.b1 = coeffs.4;
        self.b2 = coeffs.5;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_coeffs_are_zero() {
        assert_eq!(OnePoleCoeffs::new(), OnePoleCoeffs { a0: 0.0, b1: 0.0 });
        let c = BiquadCoeffs::new();
        assert_eq!([c.a0, c.a1, c.a2, c.b0, c.b1, c.b2], [0.0; 6]);
    }

    #[test]
    fn set_coeffs_keeps_tuple_order() {
        let mut c = BiquadCoeffs::new();
        c.set_coeffs((1.0, 2.0, 3.0, 4.0, 5.0, 6.0));
        assert_eq!([c.a0, c.a1, c.a2, c.b0, c.b1, c.b2], [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
