use crate::domain::instagram::InstagramError;
use std::fmt;

// Domain-level errors for the action endpoints.
#[derive(Debug)]
pub enum ActionError {
    MissingUsername,
    // Username with characters outside letters, digits, `.` and `_`.
    InvalidUsername,
    MissingParams,
    MissingQuery,
    Instagram(InstagramError),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::MissingUsername => write!(f, "username is required"),
            ActionError::InvalidUsername => {
                write!(f, "username may only contain letters, digits, '.' and '_'")
            }
            ActionError::MissingParams => write!(f, "required parameters are missing"),
            ActionError::MissingQuery => write!(f, "query is required"),
            ActionError::Instagram(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ActionError {}

impl From<InstagramError> for ActionError {
    fn from(err: InstagramError) -> Self {
        ActionError::Instagram(err)
    }
}
