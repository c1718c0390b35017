/// Errors shared by the general-purpose containers.
use std::fmt;

/// All error conditions raised by the dictionary, set, sequence, and
/// priority-queue containers.
///
/// Every variant is raised before the container is mutated, so a failed call
/// leaves the container exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// A key or item looked up by `get`/`remove` is not present.
    ItemNotFound,

    /// `remove_min`/`peek_min` on an empty priority queue, or `remove` on an
    /// empty sequence.
    EmptyContainer,

    /// A positional sequence operation received an index outside its valid
    /// range.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of elements in the sequence at the time of the call.
        len: usize,
    },

    /// An argument was rejected before any work was done.
    InvalidArgument(String),
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemNotFound => write!(f, "item not found"),
            Self::EmptyContainer => write!(f, "container is empty"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::InvalidArgument(detail) => write!(f, "invalid argument: {detail}"),
        }
    }
}

impl std::error::Error for CollectionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(CollectionError::ItemNotFound.to_string(), "item not found");
        assert_eq!(
            CollectionError::EmptyContainer.to_string(),
            "container is empty"
        );
        assert_eq!(
            CollectionError::IndexOutOfRange { index: 4, len: 2 }.to_string(),
            "index 4 out of range for length 2"
        );
        assert_eq!(
            CollectionError::InvalidArgument("k".to_owned()).to_string(),
            "invalid argument: k"
        );
    }
}
