mod qsmooth_common;
mod qmod {
    pub mod filters {
        pub mod blend;
        pub mod coeffstruct;
        pub mod filtertype;
        pub mod onepole;
        pub mod biquad;
    }
    pub mod qfilters;
}

// --- PUB USE ---

pub use qsmooth_common::{ Filter, LinearValue };
pub use qmod::filters::blend::{ Blend, Linear, Spherical };
pub use qmod::filters::coeffstruct::{ BiquadCoeffs, OnePoleCoeffs };
pub use qmod::filters::filtertype::{ validate_fc, validate_q, FilterError };
pub use qmod::filters::onepole::{ OnePole, OnePoleQuaternion, OnePoleVector3 };
pub use qmod::filters::biquad::{ BiQuad, BiQuadVector3, DEFAULT_Q };
pub use qmod::qfilters;
pub use qmod::qfilters::{ FilterParams, FilterType, QFilter, Smoother };
