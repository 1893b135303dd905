//! Error handling and result types for RedBlackTree operations.
//!
//! Expected outcomes such as a duplicate insert or a missing key are reported
//! through `InsertOutcome`, `DeleteOutcome` and `Option`. The error type here
//! covers malformed keys and structural corruption.

/// Error type for red-black tree operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RedBlackTreeError {
    /// Key not found in the tree.
    KeyNotFound,
    /// Key rejected before any comparison against stored keys.
    InvalidKey(String),
    /// The arena and the linked tree disagree about which nodes exist.
    DataIntegrityError(String),
    /// Tree corruption detected.
    CorruptedTree(String),
}

impl RedBlackTreeError {
    /// Create an InvalidKey error with context
    pub fn invalid_key(details: &str) -> Self {
        Self::InvalidKey(details.to_string())
    }

    /// Arena/tree mismatch found while checking `context`
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// A broken red-black or linkage rule, tagged with the `component` that failed
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Check if this error reports a broken tree rather than bad input
    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::DataIntegrityError(_) | Self::CorruptedTree(_))
    }
}

impl std::fmt::Display for RedBlackTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RedBlackTreeError::KeyNotFound => write!(f, "Key not found in tree"),
            RedBlackTreeError::InvalidKey(msg) => write!(f, "Invalid key: {}", msg),
            RedBlackTreeError::DataIntegrityError(msg) => {
                write!(f, "Data integrity error: {}", msg)
            }
            RedBlackTreeError::CorruptedTree(msg) => write!(f, "Corrupted tree: {}", msg),
        }
    }
}

impl std::error::Error for RedBlackTreeError {}

/// Result of the invariant checker
pub(crate) type TreeResult<T> = Result<T, RedBlackTreeError>;

/// General result for fallible tree calls
pub type RbTreeResult<T> = Result<T, RedBlackTreeError>;

/// Result of a checked lookup
pub type KeyResult<T> = Result<T, RedBlackTreeError>;

/// Result of a checked insert or delete
pub type ModifyResult<T> = Result<T, RedBlackTreeError>;

/// Adds operation context to tree errors
pub trait TreeResultExt<T> {
    /// Convert to a RbTreeResult with additional context
    fn with_context(self, context: &str) -> RbTreeResult<T>;

    /// Convert to a RbTreeResult with operation context
    fn with_operation(self, operation: &str) -> RbTreeResult<T>;

    /// Log the error at `warn` and fall back to `T::default()`
    fn or_default_with_log(self) -> T
    where
        T: Default;
}

impl<T> TreeResultExt<T> for Result<T, RedBlackTreeError> {
    fn with_context(self, context: &str) -> RbTreeResult<T> {
        self.map_err(|e| match e {
            RedBlackTreeError::KeyNotFound => RedBlackTreeError::KeyNotFound,
            RedBlackTreeError::InvalidKey(msg) => {
                RedBlackTreeError::InvalidKey(format!("{}: {}", context, msg))
            }
            RedBlackTreeError::DataIntegrityError(msg) => {
                RedBlackTreeError::data_integrity(context, &msg)
            }
            RedBlackTreeError::CorruptedTree(msg) => {
                RedBlackTreeError::CorruptedTree(format!("{}: {}", context, msg))
            }
        })
    }

    fn with_operation(self, operation: &str) -> RbTreeResult<T> {
        self.with_context(&format!("Operation '{}'", operation))
    }

    fn or_default_with_log(self) -> T
    where
        T: Default,
    {
        match self {
            Ok(value) => value,
            Err(e) => {
                log::warn!("red-black tree operation failed, using default: {}", e);
                T::default()
            }
        }
    }
}
