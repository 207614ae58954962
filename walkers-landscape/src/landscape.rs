//! Table-driven benchmark landscapes.
//!
//! Every catalog entry is a [`LandscapeSpec`] constant living next to its
//! formula in `functions/`. A [`Landscape`] pairs a spec with a validated
//! dimensionality and implements [`ObjectiveFunction`].

use std::fmt;

use ndarray::{Array1, ArrayView1};

use crate::error::{LandscapeError, Result};
use crate::objective::{Minimum, ObjectiveFunction};

/// Dimensionalities a landscape is defined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimensionality {
    /// Exactly this many dimensions.
    Fixed(usize),
    /// Any dimensionality from this value upwards.
    AtLeast(usize),
}

impl Dimensionality {
    /// `true` if `dim` is supported.
    pub fn accepts(&self, dim: usize) -> bool {
        match *self {
            Dimensionality::Fixed(d) => dim == d,
            Dimensionality::AtLeast(d) => dim >= d,
        }
    }

    /// Dimensionality used when the caller has no preference.
    pub fn default_dim(&self) -> usize {
        match *self {
            Dimensionality::Fixed(d) => d,
            Dimensionality::AtLeast(d) => d.max(2),
        }
    }
}

impl fmt::Display for Dimensionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimensionality::Fixed(d) => write!(f, "exactly {d}"),
            Dimensionality::AtLeast(d) => write!(f, "at least {d}"),
        }
    }
}

/// Search domain of a landscape.
#[derive(Debug, Clone, Copy)]
pub enum Domain {
    /// The same interval on every axis.
    Uniform(f64, f64),
    /// One interval per axis, for fixed-dimensionality landscapes.
    PerAxis(&'static [(f64, f64)]),
}

/// Static description of a benchmark landscape.
#[derive(Clone, Copy)]
pub struct LandscapeSpec {
    /// Canonical name used by the catalog lookup
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Whether the landscape has many local minima
    pub multimodal: bool,
    /// Supported dimensionalities
    pub dims: Dimensionality,
    /// Search domain
    pub domain: Domain,
    /// The formula itself
    pub evaluate: fn(ArrayView1<f64>) -> f64,
    /// Global minimizer(s) for a given dimensionality
    pub minimum: fn(usize) -> Minimum,
    /// Documented global minimum value
    pub optimum: Option<f64>,
}

impl fmt::Debug for LandscapeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LandscapeSpec")
            .field("name", &self.name)
            .field("multimodal", &self.multimodal)
            .field("dims", &self.dims)
            .field("domain", &self.domain)
            .field("optimum", &self.optimum)
            .finish()
    }
}

/// A benchmark landscape bound to a dimensionality.
#[derive(Debug, Clone, Copy)]
pub struct Landscape {
    spec: &'static LandscapeSpec,
    dim: usize,
}

impl Landscape {
    /// Instantiate `spec` in `dim` dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`LandscapeError::UnsupportedDimension`] when the landscape is not
    /// defined for `dim`.
    pub fn new(spec: &'static LandscapeSpec, dim: usize) -> Result<Self> {
        if !spec.dims.accepts(dim) {
            return Err(LandscapeError::UnsupportedDimension {
                name: spec.name,
                requested: dim,
                supported: spec.dims.to_string(),
            });
        }
        Ok(Self { spec, dim })
    }

    /// Instantiate `spec` in its default dimensionality.
    pub fn with_default_dim(spec: &'static LandscapeSpec) -> Self {
        Self {
            spec,
            dim: spec.dims.default_dim(),
        }
    }

    /// The static description backing this landscape.
    pub fn spec(&self) -> &'static LandscapeSpec {
        self.spec
    }
}

impl ObjectiveFunction for Landscape {
    fn name(&self) -> &str {
        self.spec.name
    }

    fn dim(&self) -> usize {
        self.dim
    }

    fn bounds(&self) -> (Array1<f64>, Array1<f64>) {
        match self.spec.domain {
            Domain::Uniform(lo, hi) => (
                Array1::from_elem(self.dim, lo),
                Array1::from_elem(self.dim, hi),
            ),
            Domain::PerAxis(axes) => (
                axes.iter().map(|&(lo, _)| lo).collect(),
                axes.iter().map(|&(_, hi)| hi).collect(),
            ),
        }
    }

    fn evaluate(&self, x: ArrayView1<f64>) -> f64 {
        (self.spec.evaluate)(x)
    }

    fn minimum(&self) -> Minimum {
        (self.spec.minimum)(self.dim)
    }

    fn optimum(&self) -> Option<f64> {
        self.spec.optimum
    }
}

impl fmt::Display for Landscape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (dim={})", self.spec.name, self.dim)
    }
}

pub(crate) fn at_origin(dim: usize) -> Minimum {
    Minimum::Single(Array1::zeros(dim))
}

pub(crate) fn at_ones(dim: usize) -> Minimum {
    Minimum::Single(Array1::ones(dim))
}

pub(crate) fn unknown(_dim: usize) -> Minimum {
    Minimum::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::{booth::BOOTH, bukin_n6::BUKIN_N6, rastrigin::RASTRIGIN};

    #[test]
    fn test_fixed_dimension_rejects_other_dims() {
        assert!(Landscape::new(&BOOTH, 2).is_ok());
        let err = Landscape::new(&BOOTH, 3).unwrap_err();
        assert!(err.is_dimension_error());
        assert!(err.to_string().contains("exactly 2"));
    }

    #[test]
    fn test_parametric_dimension() {
        let r = Landscape::new(&RASTRIGIN, 7).unwrap();
        assert_eq!(r.dim(), 7);
        assert_eq!(r.bounds().0.len(), 7);
        assert!(Landscape::new(&RASTRIGIN, 0).is_err());
    }

    #[test]
    fn test_per_axis_bounds_and_boundary() {
        let b = Landscape::with_default_dim(&BUKIN_N6);
        let (lo, hi) = b.bounds();
        assert_eq!(lo.to_vec(), vec![-15.0, -3.0]);
        assert_eq!(hi.to_vec(), vec![-5.0, 3.0]);
        assert_eq!(b.boundary(), (-15.0, 3.0));
    }
}
