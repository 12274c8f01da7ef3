//! Name similarity for project ranking
//!
//! Normalized Levenshtein similarity over lowercased names. Unlike prefix or
//! substring checks it degrades gradually with punctuation, plurals and extra
//! words:
//!
//! ```
//! use modfill_lib::resolve::similarity::similarity;
//!
//! assert_eq!(similarity("Create", "create"), 1.0);
//! assert!(similarity("Create", "Create: Above and Beyond") > similarity("Create", "Botania"));
//! ```

use strsim::normalized_levenshtein;

/// Case-insensitive similarity in `[0.0, 1.0]`
///
/// Symmetric and reflexive; two empty names are identical (1.0).
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase())
}

#[cfg(test)]
mod tests {
    include!("similarity.test.rs");
}
