/// Errors returned by the tree and sorting operations.
///
/// Note that looking up or removing a value that isn't in a tree is *not* an
/// error: [`Tree::search`][crate::tree::Tree::search] returns `false` and
/// [`Tree::remove`][crate::tree::Tree::remove] leaves the tree untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An operation that needs at least one node was called on an empty tree.
    #[error("cannot compute the {operation} of an empty tree")]
    EmptyTree {
        /// The name of the operation, e.g. `"min"`.
        operation: &'static str,
    },

    /// Counting sort was handed a negative key.
    #[error("counting sort requires non-negative keys, found {value} at index {index}")]
    InvalidInput {
        /// Position of the first negative key in the input.
        index: usize,
        /// The offending key.
        value: i64,
    },

    /// Counting sort was handed a key too large to size its count table by.
    #[error("counting sort cannot build a count table for key {value} at index {index}")]
    KeyTooLarge {
        /// Position of the key in the input.
        index: usize,
        /// The offending key.
        value: i64,
    },
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let empty = Error::EmptyTree { operation: "max" };
        assert_eq!(empty.to_string(), "cannot compute the max of an empty tree");

        let negative = Error::InvalidInput {
            index: 3,
            value: -7,
        };
        assert_eq!(
            negative.to_string(),
            "counting sort requires non-negative keys, found -7 at index 3"
        );

        let huge = Error::KeyTooLarge {
            index: 1,
            value: i64::MAX,
        };
        assert_eq!(
            huge.to_string(),
            "counting sort cannot build a count table for key 9223372036854775807 at index 1"
        );
    }
}
