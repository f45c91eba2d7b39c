use crate::algebra::{checked_triangular_number, triangular_number, FloatT};
use std::fmt;
use std::ops::Range;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// API type describing the type of a conic constraint.
///
/// Each variant describes one block of rows in the constraint
/// `Ax + s = b, s ∈ K`.  Rows are assigned to cones in the order in
/// which the cones appear in the list passed to the solver.
///
/// The variants may be built directly, but the checked constructors
/// ([`SupportedConeT::zero`] etc.) validate their parameters on the spot.
/// The solver validates every cone again on construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SupportedConeT<T = f64> {
    /// The zero cone (used for equality constraints).
    ///
    /// The parameter indicates the cones dimension.
    ZeroConeT(usize),
    /// The nonnegative orthant.
    ///
    /// The parameter indicates the cones dimension.
    NonnegativeConeT(usize),
    /// The second order cone / Lorenz cone / ice-cream cone.
    ///
    /// The parameter indicates the cones dimension.
    SecondOrderConeT(usize),
    /// The exponential cone in R^3.
    ///
    /// This cone takes no parameters
    ExponentialConeT(),
    /// The power cone in R^3.
    ///
    /// The parameter indicates the power, which must lie in (0,1).
    PowerConeT(T),
    /// The positive semidefinite cone in triangular form.
    ///
    /// The parameter indicates the matrix order `n`, __not__ the length
    /// `n(n+1)/2` of its packed upper triangle.
    PSDTriangleConeT(usize),
}

/// Fieldless tag identifying the kind of a [`SupportedConeT`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedConeTag {
    ZeroCone,
    NonnegativeCone,
    SecondOrderCone,
    ExponentialCone,
    PowerCone,
    PSDTriangleCone,
}

impl fmt::Display for SupportedConeTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            SupportedConeTag::ZeroCone => "ZeroCone",
            SupportedConeTag::NonnegativeCone => "NonnegativeCone",
            SupportedConeTag::SecondOrderCone => "SecondOrderCone",
            SupportedConeTag::ExponentialCone => "ExponentialCone",
            SupportedConeTag::PowerCone => "PowerCone",
            SupportedConeTag::PSDTriangleCone => "PSDTriangleCone",
        };
        write!(f, "{}", name)
    }
}

/// Error type returned by cone parameter validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConeError {
    /// A dimensioned cone was given dimension zero
    #[error("{0} must have positive dimension")]
    ZeroDimension(SupportedConeTag),
    /// Power cone exponent outside the open interval (0,1)
    #[error("PowerCone exponent {0} must lie strictly between 0 and 1")]
    BadPower(f64),
    /// The number of rows covered by the cone does not fit in a `usize`
    #[error("{0} is too large to index")]
    DimensionOverflow(SupportedConeTag),
}

impl<T> SupportedConeT<T>
where
    T: FloatT,
{
    /// Checked constructor for [`ZeroConeT`](SupportedConeT::ZeroConeT)
    pub fn zero(dim: usize) -> Result<Self, ConeError> {
        Self::ZeroConeT(dim).validated()
    }

    /// Checked constructor for [`NonnegativeConeT`](SupportedConeT::NonnegativeConeT)
    pub fn nonnegative(dim: usize) -> Result<Self, ConeError> {
        Self::NonnegativeConeT(dim).validated()
    }

    /// Checked constructor for [`SecondOrderConeT`](SupportedConeT::SecondOrderConeT)
    pub fn second_order(dim: usize) -> Result<Self, ConeError> {
        Self::SecondOrderConeT(dim).validated()
    }

    /// Constructor for [`ExponentialConeT`](SupportedConeT::ExponentialConeT)
    pub fn exponential() -> Self {
        Self::ExponentialConeT()
    }

    /// Checked constructor for [`PowerConeT`](SupportedConeT::PowerConeT)
    pub fn power(alpha: T) -> Result<Self, ConeError> {
        Self::PowerConeT(alpha).validated()
    }

    /// Checked constructor for [`PSDTriangleConeT`](SupportedConeT::PSDTriangleConeT).
    /// `n` is the order of the matrix.
    pub fn psd_triangle(n: usize) -> Result<Self, ConeError> {
        Self::PSDTriangleConeT(n).validated()
    }

    fn validated(self) -> Result<Self, ConeError> {
        self.validate()?;
        Ok(self)
    }

    /// Check the cone parameters
    pub fn validate(&self) -> Result<(), ConeError> {
        match self {
            SupportedConeT::ZeroConeT(dim)
            | SupportedConeT::NonnegativeConeT(dim)
            | SupportedConeT::SecondOrderConeT(dim) => {
                if *dim == 0 {
                    return Err(ConeError::ZeroDimension(self.tag()));
                }
            }
            SupportedConeT::PSDTriangleConeT(n) => {
                if *n == 0 {
                    return Err(ConeError::ZeroDimension(self.tag()));
                }
                if checked_triangular_number(*n).is_none() {
                    return Err(ConeError::DimensionOverflow(self.tag()));
                }
            }
            SupportedConeT::PowerConeT(alpha) => {
                // NaN fails both comparisons
                if !(*alpha > T::zero() && *alpha < T::one()) {
                    return Err(ConeError::BadPower(alpha.to_f64().unwrap_or(f64::NAN)));
                }
            }
            SupportedConeT::ExponentialConeT() => {}
        }
        Ok(())
    }

    /// Returns the number of rows of the constraint matrix covered by
    /// this cone, i.e. the length of its packed representation.
    /// Saturates at `usize::MAX` for a PSD order that fails validation.
    pub fn numel(&self) -> usize {
        match self {
            SupportedConeT::ZeroConeT(dim) => *dim,
            SupportedConeT::NonnegativeConeT(dim) => *dim,
            SupportedConeT::SecondOrderConeT(dim) => *dim,
            SupportedConeT::ExponentialConeT() => 3,
            SupportedConeT::PowerConeT(_) => 3,
            SupportedConeT::PSDTriangleConeT(n) => triangular_number(*n),
        }
    }

    /// Matrix order of a PSD cone, `None` for all other cones
    pub fn order(&self) -> Option<usize> {
        match self {
            SupportedConeT::PSDTriangleConeT(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the kind of the cone
    pub fn tag(&self) -> SupportedConeTag {
        match self {
            SupportedConeT::ZeroConeT(_) => SupportedConeTag::ZeroCone,
            SupportedConeT::NonnegativeConeT(_) => SupportedConeTag::NonnegativeCone,
            SupportedConeT::SecondOrderConeT(_) => SupportedConeTag::SecondOrderCone,
            SupportedConeT::ExponentialConeT() => SupportedConeTag::ExponentialCone,
            SupportedConeT::PowerConeT(_) => SupportedConeTag::PowerCone,
            SupportedConeT::PSDTriangleConeT(_) => SupportedConeTag::PSDTriangleCone,
        }
    }
}

impl<T> fmt::Display for SupportedConeT<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SupportedConeT::PowerConeT(alpha) => write!(f, "PowerCone(α = {})", alpha),
            SupportedConeT::PSDTriangleConeT(n) => write!(f, "PSDTriangleCone(n = {})", n),
            _ => write!(f, "{}(dim = {})", self.tag(), self.numel()),
        }
    }
}

/// Total number of constraint rows covered by a list of cones, or
/// `None` if the total does not fit in a `usize`
pub fn total_numel<T: FloatT>(cones: &[SupportedConeT<T>]) -> Option<usize> {
    cones
        .iter()
        .try_fold(0usize, |acc, c| acc.checked_add(c.numel()))
}

/// Ranges of constraint rows assigned to each cone.  Ranges are
/// contiguous, non-overlapping, and follow the order of the list.
///
/// Range ends saturate at `usize::MAX`, so the result is only
/// meaningful when [`total_numel`] returns `Some`.
pub fn make_cone_ranges<T: FloatT>(cones: &[SupportedConeT<T>]) -> Vec<Range<usize>> {
    let mut rngs = Vec::with_capacity(cones.len());
    let mut start = 0usize;
    for cone in cones {
        let stop = start.saturating_add(cone.numel());
        rngs.push(start..stop);
        start = stop;
    }
    rngs
}
