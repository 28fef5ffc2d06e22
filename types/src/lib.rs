mod count;
mod error_code;
mod mask;

pub use count::SampleCount;
pub use error_code::ErrorCode;
pub use mask::MaskParameters;

pub use num_bigint::BigUint;
