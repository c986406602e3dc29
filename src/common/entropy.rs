//! Logarithm bases and the entropy of a discrete distribution.
use std::fmt;


/// The base of the logarithm used in entropy computations.
/// The base changes the magnitude of entropy values
/// but never which attribute maximizes the information gain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogBase {
    /// Bits.
    Two,
    /// Nats.
    E,
    /// Decimal digits (bans).
    Ten,
}


/// The logarithm base set as default.
pub const DEFAULT_LOG_BASE: LogBase = LogBase::Ten;


impl Default for LogBase {
    #[inline]
    fn default() -> Self {
        DEFAULT_LOG_BASE
    }
}


impl LogBase {
    /// Returns `log_b(x)`.
    #[inline(always)]
    pub fn log(&self, x: f64) -> f64 {
        match self {
            Self::Two => x.log2(),
            Self::E => x.ln(),
            Self::Ten => x.log10(),
        }
    }
}


impl fmt::Display for LogBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Two => "2",
            Self::E => "e",
            Self::Ten => "10",
        };

        write!(f, "{name}")
    }
}


/// Returns `-Σ p log_b(p)` over the given proportions.
/// A proportion of exactly `0` contributes nothing.
#[inline(always)]
pub fn entropy_of<I>(proportions: I, base: LogBase) -> f64
    where I: IntoIterator<Item = f64>,
{
    proportions.into_iter()
        .filter(|&p| p != 0f64)
        .map(|p| -p * base.log(p))
        .sum::<f64>()
}
