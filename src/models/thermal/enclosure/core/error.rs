use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::UnknownVariant;

/// Errors that stop an enclosure evaluation before any sizing is done.
///
/// Design-rule rejections are not errors; they are reported through
/// [`Verdict::Rejected`](super::Verdict::Rejected).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluateError {
    /// A component record is inconsistent or could not be built.
    #[error("invalid configuration for component `{record}`")]
    InvalidConfiguration {
        /// Name of the offending record.
        record: String,

        /// What is wrong with it.
        #[source]
        issue: ConfigurationIssue,
    },

    /// A global parameter violates its range.
    #[error("invalid parameter `{parameter}`")]
    InvalidParameter {
        parameter: &'static str,

        #[source]
        source: ConstraintError,
    },
}

/// The specific problem behind [`EvaluateError::InvalidConfiguration`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationIssue {
    /// A board or interface label names no known variant.
    #[error(transparent)]
    UnknownVariant(#[from] UnknownVariant),

    /// A numeric field is out of range.
    #[error("field `{field}` is out of range")]
    Field {
        field: &'static str,

        #[source]
        source: ConstraintError,
    },

    /// More than one component is marked primary.
    #[error("component `{first}` is already the primary component")]
    DuplicatePrimary { first: String },
}

impl EvaluateError {
    pub(super) fn invalid(record: impl Into<String>, issue: impl Into<ConfigurationIssue>) -> Self {
        Self::InvalidConfiguration {
            record: record.into(),
            issue: issue.into(),
        }
    }

    pub(super) fn parameter(parameter: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidParameter { parameter, source }
    }
}

impl ConfigurationIssue {
    pub(super) fn field(field: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::Field { field, source }
    }
}
