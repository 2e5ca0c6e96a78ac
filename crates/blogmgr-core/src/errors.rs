use thiserror::Error;

/// Result type alias using PostError
pub type Result<T> = std::result::Result<T, PostError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code. The command loop inspects the kind
/// to decide how an operation failed; the code is what ends up in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogErrorKind {
    // Validation
    InvalidInput,
    InvalidTitle,

    // Uniqueness
    DuplicateTitle,

    // Store
    /// The database could not be opened or reached
    StoreUnavailable,
    /// A statement failed against a reachable database
    Persistence,

    // Integration/IO
    /// Filesystem failure outside SQLite (e.g. creating the database directory)
    Io,
}

impl BlogErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            BlogErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            BlogErrorKind::InvalidTitle => "ERR_INVALID_TITLE",
            BlogErrorKind::DuplicateTitle => "ERR_DUPLICATE_TITLE",
            BlogErrorKind::StoreUnavailable => "ERR_STORE_UNAVAILABLE",
            BlogErrorKind::Persistence => "ERR_PERSISTENCE",
            BlogErrorKind::Io => "ERR_IO",
        }
    }

    /// True for failures caused by what the user typed rather than the store
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            BlogErrorKind::InvalidInput | BlogErrorKind::InvalidTitle | BlogErrorKind::DuplicateTitle
        )
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus the operation
/// and post title involved, when known.
#[derive(Debug, Clone)]
pub struct BlogError {
    kind: BlogErrorKind,
    op: Option<String>,
    title: Option<String>,
    message: String,
}

impl BlogError {
    /// Create a new error with the specified kind
    pub fn new(kind: BlogErrorKind) -> Self {
        Self {
            kind,
            op: None,
            title: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add post title context
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> BlogErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the post title context, if any
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// True when the error means the store itself cannot be used
    pub fn is_store_unavailable(&self) -> bool {
        self.kind == BlogErrorKind::StoreUnavailable
    }
}

impl std::fmt::Display for BlogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(title) = &self.title {
            write!(f, " (title: {})", title)?;
        }
        Ok(())
    }
}

impl std::error::Error for BlogError {}

// ========== End Error Facility ==========

/// Domain errors raised while building or resolving posts
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PostError {
    /// Title is empty or whitespace-only
    #[error("Invalid title: {reason}")]
    InvalidTitle { reason: String },

    /// Content is empty or whitespace-only
    #[error("Invalid content: {reason}")]
    InvalidContent { reason: String },

    /// A post with this title already exists
    #[error("A post titled '{title}' already exists")]
    DuplicateTitle { title: String },
}

impl From<PostError> for BlogError {
    fn from(err: PostError) -> Self {
        let message = err.to_string();
        match err {
            PostError::InvalidTitle { .. } => BlogError::new(BlogErrorKind::InvalidTitle)
                .with_op("validate_post")
                .with_message(message),

            PostError::InvalidContent { .. } => BlogError::new(BlogErrorKind::InvalidInput)
                .with_op("validate_post")
                .with_message(message),

            PostError::DuplicateTitle { title } => BlogError::new(BlogErrorKind::DuplicateTitle)
                .with_op("create_post")
                .with_title(title)
                .with_message(message),
        }
    }
}
