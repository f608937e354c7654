use alloc::string::String;

/// Construction-time configuration errors.
///
/// Clicks never produce errors: an interaction that cannot be resolved is ignored.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("visualization requires at least one item")]
    NoItems,
    #[error("visualization requires at least one itemset")]
    NoItemsets,
    #[error("item at position {index} has an empty id")]
    EmptyItemId { index: usize },
    #[error("duplicate item id `{id}`")]
    DuplicateItem { id: String },
    #[error("itemset {index} references unknown item `{id}`")]
    UnknownItem { index: usize, id: String },
    #[error("itemset {index} lists item `{id}` more than once")]
    RepeatedItem { index: usize, id: String },
    #[error("itemset {index} has support {support}, expected a finite value in [0, 1]")]
    InvalidSupport { index: usize, support: f64 },
    #[error("invalid option `{name}`: {reason}")]
    InvalidOption {
        name: &'static str,
        reason: &'static str,
    },
}
