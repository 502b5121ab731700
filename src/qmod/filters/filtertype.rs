use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FilterError
{
    #[error("sample rate must be finite and greater than zero (got {0})")]
    SampleRateNotValid(f64),
    #[error("cutoff frequency must be finite and greater than zero (got {0})")]
    CutoffNotValid(f64),
    #[error("cutoff frequency {fc} Hz must stay below the Nyquist frequency {nyquist} Hz")]
    CutoffAboveNyquist { fc: f64, nyquist: f64 },
    #[error("quality factor must be finite and greater than zero (got {0})")]
    QualityFactorNotValid(f64),
    #[error("filter params are not compatible with this filter type")]
    FilterCoeffsErrorNotCompatibleMode
}

/// Check cutoff and sample rate
///
/// Valid when `fs > 0` and `0 < fc < fs / 2`, so that the `exp` and `tan`
/// arguments of the coefficient design stay finite.
///
/// # Args
/// -----
///
/// `fc`: cutoff frequency in Hz
/// `fs`: sample rate in Hz
///
/// # Return
/// --------
///
/// `Result<(), FilterError>`
///
pub fn validate_fc(fc: f64, fs: f64) -> Result<(), FilterError> {
    if !fs.is_finite() || fs <= 0.0 { return Err(FilterError::SampleRateNotValid(fs)) }
    if !fc.is_finite() || fc <= 0.0 { return Err(FilterError::CutoffNotValid(fc)) }
    let nyquist = fs / 2.0;
    if fc >= nyquist { return Err(FilterError::CutoffAboveNyquist { fc, nyquist }) }
    Ok(())
}

/// Check the bi-quad quality factor (`q > 0`, finite)
pub fn validate_q(q: f64) -> Result<(), FilterError> {
    if !q.is_finite() || q <= 0.0 { return Err(FilterError::QualityFactorNotValid(q)) }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_cutoff_below_nyquist() {
        assert_eq!(validate_fc(1.0, 100.0), Ok(()));
        assert_eq!(validate_fc(49.9, 100.0), Ok(()));
    }

    #[test]
    fn rejects_bad_sample_rate() {
        assert_eq!(validate_fc(1.0, 0.0), Err(FilterError::SampleRateNotValid(0.0)));
        assert!(matches!(validate_fc(1.0, f64::NAN), Err(FilterError::SampleRateNotValid(_))));
        assert_eq!(validate_fc(1.0, -10.0), Err(FilterError::SampleRateNotValid(-10.0)));
    }

    #[test]
    fn rejects_bad_cutoff() {
        assert_eq!(validate_fc(0.0, 100.0), Err(FilterError::CutoffNotValid(0.0)));
        assert_eq!(validate_fc(f64::INFINITY, 100.0), Err(FilterError::CutoffNotValid(f64::INFINITY)));
        assert_eq!(
            validate_fc(50.0, 100.0),
            Err(FilterError::CutoffAboveNyquist { fc: 50.0, nyquist: 50.0 })
        );
    }

    #[test]
    fn rejects_bad_q() {
        assert_eq!(validate_q(0.5), Ok(()));
        assert_eq!(validate_q(0.0), Err(FilterError::QualityFactorNotValid(0.0)));
        assert!(validate_q(f64::NAN).is_err());
    }

    #[test]
    fn error_messages_name_the_values() {
        let e = FilterError::CutoffAboveNyquist { fc: 60.0, nyquist: 50.0 };
        assert_eq!(e.to_string(), "cutoff frequency 60 Hz must stay below the Nyquist frequency 50 Hz");
    }
}
