//! Query string parameters.

/// One `key=value` pair, value already rendered as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    /// Name.
    pub key: String,
    /// Rendered value.
    pub value: String,
}

/// Parameters in the order they go on the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<QueryParam>);

impl QueryParams {
    /// No parameters.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends `key=value`, formatting the value with `Display`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.0.push(QueryParam {
            key: key.into(),
            value: value.to_string(),
        });
        self
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &QueryParam> {
        self.0.iter()
    }

    /// Whether there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
