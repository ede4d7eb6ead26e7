use crate::compat::{String, Vec};

/// A stored query value: one string, or every value seen for a repeated key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Single(String),
    Multi(Vec<String>),
}

impl QueryValue {
    /// Append another value for the same key.
    /// The first repeat promotes `Single` to a two-element `Multi`.
    pub fn push(&mut self, value: String) {
        match self {
            Self::Single(first) => {
                let first = core::mem::take(first);
                *self = Self::Multi(Vec::from([first, value]));
            }
            Self::Multi(values) => values.push(value),
        }
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Multi(_) => None,
        }
    }

    pub fn as_multi(&self) -> Option<&[String]> {
        match self {
            Self::Single(_) => None,
            Self::Multi(values) => Some(values.as_slice()),
        }
    }

    /// First value in accumulation order.
    pub fn first(&self) -> Option<&str> {
        self.iter().next()
    }

    /// Number of values held.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Multi(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, Self::Multi(_))
    }

    /// Iterate over every value in accumulation order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let values: &[String] = match self {
            Self::Single(value) => core::slice::from_ref(value),
            Self::Multi(values) => values,
        };
        values.iter().map(String::as_str)
    }
}

/// Single values print verbatim, multi-values joined with `", "`.
impl core::fmt::Display for QueryValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(value)?;
        }
        Ok(())
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        Self::Single(String::from(s))
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        Self::Single(s)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multi(values)
    }
}
