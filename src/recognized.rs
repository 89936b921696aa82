//! Tracking of the option keys an API author declares supported.

/// Ordered, duplicate-free set of recognized option keys.
///
/// Keys keep their first-seen position across repeated additions, which is
/// what fixes their order in the "You should use only the following" summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecognizedSet {
    keys: Vec<String>,
}

impl RecognizedSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one key; a key already present keeps its original position.
    pub fn add(&mut self, key: impl Into<String>) {
        let key = key.into();
        if !self.keys.iter().any(|k| *k == key) {
            self.keys.push(key);
        }
    }

    /// Add several keys, in order.
    pub fn extend<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for key in keys {
            self.add(key);
        }
    }

    /// Whether `key` has been declared supported.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Keys in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The keys rendered for the summary line: each wrapped as `` `:key` ``,
    /// joined by `", "`. Empty string for an empty set.
    pub fn summary(&self) -> String {
        self.keys
            .iter()
            .map(|key| format!("`:{key}`"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
