#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RequestError {
    #[error("Invalid {field}: {reason}.")]
    InvalidArgument { field: &'static str, reason: String },

    #[error("{field} can not be empty.")]
    IncompleteState { field: &'static str },
}

impl RequestError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::debug!(field, %reason, "rejected request parameter");
        Self::InvalidArgument { field, reason }
    }

    /// Name of the parameter the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidArgument { field, .. } => field,
            Self::IncompleteState { field } => field,
        }
    }
}
