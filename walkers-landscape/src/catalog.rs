//! Name-based lookup over every shipped landscape.

use crate::error::{LandscapeError, Result};
use crate::functions::*;
use crate::landscape::{Landscape, LandscapeSpec};

/// Every landscape in the catalog, sorted alphabetically.
pub static CATALOG: &[&LandscapeSpec] = &[
    &ACKLEY,
    &BEALE,
    &BOOTH,
    &BUKIN_N6,
    &CROSS_IN_TRAY,
    &DIXON_PRICE,
    &DROP_WAVE,
    &EASOM,
    &EGGHOLDER,
    &GRIEWANK,
    &HIMMELBLAU,
    &HOLDER_TABLE,
    &LEVY,
    &LEVY_N13,
    &MATYAS,
    &MCCORMICK,
    &RASTRIGIN,
    &ROSENBROCK,
    &SCHAFFER_N2,
    &SCHAFFER_N4,
    &SCHWEFEL,
    &SHUBERT,
    &SIX_HUMP_CAMEL,
    &SPHERE,
    &THREE_HUMP_CAMEL,
    &ZAKHAROV,
];

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Names of every landscape in the catalog.
pub fn landscape_names() -> Vec<&'static str> {
    CATALOG.iter().map(|s| s.name).collect()
}

/// Find the spec registered under `name`.
///
/// Matching ignores case, underscores and dashes, so `"six_hump_camel"`,
/// `"SixHumpCamel"` and `"six-hump-camel"` resolve to the same entry.
pub fn find_spec(name: &str) -> Result<&'static LandscapeSpec> {
    let key = normalize(name);
    CATALOG
        .iter()
        .copied()
        .find(|s| normalize(s.name) == key)
        .ok_or_else(|| LandscapeError::UnknownLandscape {
            name: name.to_string(),
            available: landscape_names().join(", "),
        })
}

/// Build the landscape named `name` in `dim` dimensions.
///
/// # Errors
///
/// Unknown names list the valid ones; dimensionalities the landscape does
/// not support are rejected.
pub fn landscape_by_name(name: &str, dim: usize) -> Result<Landscape> {
    Landscape::new(find_spec(name)?, dim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::ObjectiveFunction;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let a = landscape_by_name("ackley", 3).unwrap();
        assert_eq!(a.name(), "Ackley");
        assert_eq!(a.dim(), 3);
        assert!(landscape_by_name("six_hump_camel", 2).is_ok());
        assert!(landscape_by_name("HOLDER-TABLE", 2).is_ok());
    }

    #[test]
    fn test_unknown_name_lists_valid_names() {
        let err = landscape_by_name("banana", 2).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("banana"));
        assert!(msg.contains("Ackley"));
        assert!(msg.contains("Zakharov"));
    }

    #[test]
    fn test_catalog_is_sorted_and_unique() {
        let names = landscape_names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
    }
}
