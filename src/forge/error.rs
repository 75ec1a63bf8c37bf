//! Error types exposed by the issue query layer.

use std::fmt;

use thiserror::Error;

/// Errors surfaced while validating input or communicating with a platform.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IssueError {
    /// The supplied query options failed validation. Raised before any
    /// request is sent.
    #[error("invalid list issues parameters: {0}")]
    Validation(ValidationReport),

    /// The repository owner or name was blank.
    #[error("repository owner and name must not be empty")]
    MissingPathSegments,

    /// The authentication token was missing.
    #[error("access token is required")]
    MissingToken,

    /// A base or API URL could not be parsed.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// Networking failed before a response was received, including timeouts.
    #[error("network error talking to {url}: {message}")]
    Transport {
        /// Request URL.
        url: String,
        /// Transport-level error detail.
        message: String,
    },

    /// The platform answered with a non-2xx status.
    #[error("request to {url} failed with status {status}: {body}")]
    HttpStatus {
        /// Request URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// The response body did not have the expected shape.
    #[error("unexpected response body: {message}")]
    Decode {
        /// Description of the decoding failure.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl From<ValidationReport> for IssueError {
    fn from(report: ValidationReport) -> Self {
        Self::Validation(report)
    }
}

/// Category of a single field validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// The value had the wrong JSON type.
    InvalidType,
    /// The value is not in the field's legal value set.
    InvalidValue,
    /// An integer fell outside its permitted range.
    OutOfRange,
    /// Two mutually exclusive fields were both set.
    MutuallyExclusive,
}

impl FieldErrorKind {
    /// Short machine-friendly name for the error kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidType => "invalid_type",
            Self::InvalidValue => "invalid_value",
            Self::OutOfRange => "out_of_range",
            Self::MutuallyExclusive => "mutually_exclusive",
        }
    }
}

/// One offending field in a [`ValidationReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name as supplied by the caller.
    pub field: String,
    /// Failure category.
    pub kind: FieldErrorKind,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.field, self.message, self.kind.as_str())
    }
}

/// Every problem found in one set of query options.
///
/// Validation never stops at the first problem so that callers can fix all
/// fields in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Name of the schema that rejected the options.
    pub schema: String,
    /// Field names the schema does not recognise.
    pub unsupported: Vec<String>,
    /// Every field name the schema accepts, sorted.
    pub supported: Vec<String>,
    /// Per-field type, value, range and exclusivity failures.
    pub field_errors: Vec<FieldError>,
}

impl ValidationReport {
    /// Returns true when nothing was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unsupported.is_empty() && self.field_errors.is_empty()
    }

    /// Returns the errors reported against `field`.
    pub fn errors_for<'report>(
        &'report self,
        field: &'report str,
    ) -> impl Iterator<Item = &'report FieldError> + 'report {
        self.field_errors
            .iter()
            .filter(move |error| error.field == field)
    }

    /// Writes every finding to the `tracing` error log.
    pub fn log(&self) {
        tracing::error!("parameter validation failed for {}", self.schema);
        if !self.unsupported.is_empty() {
            tracing::error!("  unsupported parameters: {}", self.unsupported.join(", "));
            tracing::error!("  supported parameters: {}", self.supported.join(", "));
        }
        for error in &self.field_errors {
            tracing::error!("  {error}");
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if !self.unsupported.is_empty() {
            parts.push(format!(
                "unsupported parameters: {} (supported: {})",
                self.unsupported.join(", "),
                self.supported.join(", ")
            ));
        }
        parts.extend(self.field_errors.iter().map(ToString::to_string));
        write!(f, "{}", parts.join("; "))
    }
}
