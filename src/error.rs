/// Reasons the checked entry points refuse to produce a rounded result.
///
/// The saturating entry points never return these; they substitute the
/// documented sentinel values instead.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundError {
    #[error("shift {shift} is out of range, must be <= {max}")]
    InvalidShift { shift: u8, max: u8 },
    #[error("product is above the maximum of the result type")]
    ProductOverflow,
    #[error("product is below the minimum of the result type")]
    ProductUnderflow,
    #[error("divisor must be != 0")]
    DivideByZero,
    #[error("quotient of MIN / -1 does not fit in the result type")]
    DivideOverflow,
}
