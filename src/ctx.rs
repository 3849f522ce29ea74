//! The context with which a sort is performed.

use std::fmt;

/// A context defines customization options.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Context {
    /// The driver used by [`sort::sort`](crate::sort::sort).
    pub strategy: Strategy,
}

impl Context {
    /// Creates a context for a sort strategy.
    pub fn new(strategy: Strategy) -> Self {
        Context { strategy }
    }
}

/// The driver that walks the ranges produced by partitioning.
///
/// Both strategies use the same partition scheme and therefore produce the same result.
/// They differ only in the auxiliary space they require.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Strategy {
    /// Recursion on the lower range, then on the upper range.
    ///
    /// The recursion depth grows linearly for already sorted or reverse sorted input.
    Recursive,
    /// An explicit stack of pending ranges where the smaller range is always processed first.
    ///
    /// The stack holds at most a logarithmic number of ranges regardless of the input.
    WorkStack,
}

impl Strategy {
    /// Returns the strategy for the given name, or `None` if the name is invalid.
    ///
    /// ```
    /// # use lomuto::ctx::Strategy;
    /// assert_eq!(Strategy::from_name("stack"), Some(Strategy::WorkStack));
    /// assert_eq!(Strategy::from_name("heap"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Strategy> {
        match name {
            "recursive" => Some(Strategy::Recursive),
            "stack" => Some(Strategy::WorkStack),
            _ => None,
        }
    }

    /// Returns the name accepted by [`from_name`](Strategy::from_name).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Recursive => "recursive",
            Self::WorkStack => "stack",
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Recursive
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_names() {
        for strategy in [Strategy::Recursive, Strategy::WorkStack].iter() {
            assert_eq!(Strategy::from_name(strategy.name()), Some(*strategy));
        }
    }

    #[test]
    fn test_strategy_unknown_name() {
        assert_eq!(Strategy::from_name(""), None);
        assert_eq!(Strategy::from_name("Recursive"), None);
    }

    #[test]
    fn test_context_default() {
        assert_eq!(Context::default().strategy, Strategy::Recursive);
        assert_eq!(Context::new(Strategy::WorkStack).strategy, Strategy::WorkStack);
    }
}
