/// Outcome of resolving an app name through the library.
///
/// A missing or unreadable definition file is an ordinary outcome here, not a
/// fault: callers decide how loudly to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The definition file existed and was scanned.
    Found(T),

    /// No readable definition file for the requested name.
    NotFound,
}

impl<T> Lookup<T> {
    /// Returns `true` if the result is `Found`.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Converts this result into an `Option`, returning `Some` only for `Found`.
    #[must_use]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Found(data) => Some(data),
            Self::NotFound => None,
        }
    }

    /// Converts from `&Lookup<T>` to `Lookup<&T>`.
    #[must_use]
    pub const fn as_ref(&self) -> Lookup<&T> {
        match self {
            Self::Found(data) => Lookup::Found(data),
            Self::NotFound => Lookup::NotFound,
        }
    }
}
