#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Name-based lookup over the shipped landscapes.
pub mod catalog;
/// Error types.
pub mod error;
/// Benchmark formulas and their catalog entries.
pub mod functions;
/// Table-driven landscapes implementing [`ObjectiveFunction`].
pub mod landscape;
/// The objective-function trait.
pub mod objective;

pub use catalog::{CATALOG, find_spec, landscape_by_name, landscape_names};
pub use error::{LandscapeError, Result};
pub use landscape::{Dimensionality, Domain, Landscape, LandscapeSpec};
pub use objective::{Minimum, ObjectiveFunction};

#[cfg(test)]
mod tests {
    use super::*;

    /// Every documented minimizer must lie in the domain and evaluate to the
    /// documented optimum.
    #[test]
    fn test_all_function_minima() {
        let tolerance = 1e-3;
        for spec in CATALOG {
            let dims: Vec<usize> = match spec.dims {
                Dimensionality::Fixed(d) => vec![d],
                Dimensionality::AtLeast(d) => vec![d.max(2), 5, 10],
            };
            for dim in dims {
                let f = Landscape::new(spec, dim).unwrap();
                let (lower, upper) = f.bounds();
                assert_eq!(lower.len(), dim, "{} bounds length", spec.name);
                let minimum = f.minimum();
                match (minimum.is_known(), f.optimum()) {
                    (true, Some(expected)) => {
                        for x in minimum.points() {
                            assert_eq!(x.len(), dim);
                            for i in 0..dim {
                                assert!(
                                    x[i] >= lower[i] && x[i] <= upper[i],
                                    "{} minimizer coordinate {} = {} outside [{}, {}]",
                                    spec.name,
                                    i,
                                    x[i],
                                    lower[i],
                                    upper[i]
                                );
                            }
                            let actual = f.evaluate(x.view());
                            assert!(
                                (actual - expected).abs() <= tolerance,
                                "{} (dim={}) at {:?}: expected {}, got {}",
                                spec.name,
                                dim,
                                x,
                                expected,
                                actual
                            );
                        }
                    }
                    (false, None) => {}
                    _ => panic!("{} documents a minimizer without a value", spec.name),
                }
            }
        }
    }

    #[test]
    fn test_unknown_minima_are_explicit() {
        for name in ["SchafferN4", "Shubert"] {
            let f = landscape_by_name(name, 2).unwrap();
            assert_eq!(f.minimum(), Minimum::Unknown);
            assert!(f.evaluate(ndarray::array![0.5, -0.5].view()).is_finite());
        }
    }
}
