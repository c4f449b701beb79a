use anyhow::{Context, Result};
use serde::Serialize;

/// Serializes `value` as pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize JSON output")
}

/// Prints `value` as pretty JSON to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", to_json(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::rank::RankVector;

    #[test]
    fn test_rank_vector_is_flat_array() {
        let v = RankVector::normalized(vec![1.0, 1.0]).unwrap();
        let json = to_json(&v).unwrap();
        let parsed: Vec<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec![0.5, 0.5]);
    }
}
