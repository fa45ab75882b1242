use std::fmt::{self, Display};
use strum_macros::IntoStaticStr;

/// The element attribute a filter is tested against
#[derive(Debug, PartialEq, Eq, Hash, IntoStaticStr, Clone, Copy)]
#[strum(serialize_all = "lowercase")]
pub enum FilterKey {
    Title,
    Category,
}

impl FilterKey {
    /// Field names are matched exactly, `Title:` is not a field.
    pub fn from_field(field: &str) -> Option<Self> {
        match field {
            "title" => Some(FilterKey::Title),
            "category" => Some(FilterKey::Category),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Filter {
    pub exclude: bool,
    pub key: FilterKey,
    pub value: String, // lowercased, quotes removed
}

impl Filter {
    pub fn new(exclude: bool, key: FilterKey, value: &str) -> Self {
        Filter {
            exclude,
            key,
            value: value.to_lowercase(),
        }
    }
}

/// A single query token after field parsing.
///
/// Tokens that are not well formed `[-]field:value` filters are kept as
/// plain terms and only turned into title filters once, by [`Term::into_filter`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Term {
    Filter(Filter),
    Plain(String),
}

impl Term {
    pub fn into_filter(self) -> Filter {
        match self {
            Term::Filter(filter) => filter,
            Term::Plain(token) => Filter::new(false, FilterKey::Title, &token),
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Term::Plain(_))
    }
}

impl Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name: &'static str = self.into();
        write!(f, "{}", name)
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.exclude {
            write!(f, "-")?;
        }
        write!(f, "{}:{}", self.key, self.value)
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Term::Filter(filter) => write!(f, "{}", filter),
            Term::Plain(token) => write!(f, "{}", token),
        }
    }
}
