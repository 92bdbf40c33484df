//! Canonical cache key generation.

use std::fmt;

/// Order-independent key for a parameter mapping.
///
/// Names are sorted lexicographically and `name:value` pairs are joined
/// with `|`, so two mappings with the same content always produce the same
/// key whatever their insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(String);

impl QueryKey {
    /// Build the canonical key from `(name, value)` pairs.
    pub fn from_params<'a, I>(params: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut pairs: Vec<(&str, &str)> = params.into_iter().collect();
        pairs.sort();

        let joined = pairs
            .iter()
            .map(|(name, value)| format!("{name}:{value}"))
            .collect::<Vec<_>>()
            .join("|");

        Self(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_key_stability() {
        let key1 = QueryKey::from_params([("q", "rust"), ("page", "0")]);
        let key2 = QueryKey::from_params([("q", "rust"), ("page", "0")]);
        assert_eq!(key1, key2);
    }

    #[test]
    fn test_key_order_independent() {
        let forward = QueryKey::from_params([
            ("q", "climate"),
            ("country", "au"),
            ("category", "science"),
            ("language", "en"),
            ("page", "0"),
        ]);
        let backward = QueryKey::from_params([
            ("page", "0"),
            ("language", "en"),
            ("category", "science"),
            ("country", "au"),
            ("q", "climate"),
        ]);
        assert_eq!(forward, backward);

        let map: HashMap<&str, &str> =
            [("language", "en"), ("q", "climate"), ("page", "0"), ("country", "au"), ("category", "science")]
                .into_iter()
                .collect();
        assert_eq!(QueryKey::from_params(map), forward);
    }

    #[test]
    fn test_key_different_values() {
        let key1 = QueryKey::from_params([("q", "rust"), ("page", "0")]);
        let key2 = QueryKey::from_params([("q", "rust"), ("page", "1")]);
        assert_ne!(key1, key2);
    }

    #[test]
    fn test_key_format() {
        let key = QueryKey::from_params([("q", "a b"), ("country", "")]);
        assert_eq!(key.as_str(), "country:|q:a b");
        assert_eq!(key.to_string(), "country:|q:a b");
    }
}
