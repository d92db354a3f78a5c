//! Fetch state of a page resource

use crate::fetch::FetchError;
use std::fmt;

/// Outcome of the single fetch attempt made for a resource
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    /// No fetch has been attempted yet
    #[default]
    Unfetched,

    /// The page was retrieved and decoded
    FetchedOk(String),

    /// The page could not be retrieved or decoded
    FetchedFail(FetchError),
}

impl FetchState {
    /// Returns true once a fetch has been attempted, whatever its outcome
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Unfetched)
    }

    /// Returns the fetched content, if any
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::FetchedOk(content) => Some(content),
            _ => None,
        }
    }

    /// Returns the failure reason, if the fetch failed
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::FetchedFail(error) => Some(error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unfetched => "unfetched",
            Self::FetchedOk(_) => "fetched_ok",
            Self::FetchedFail(_) => "fetched_fail",
        }
    }
}

impl From<Result<String, FetchError>> for FetchState {
    fn from(result: Result<String, FetchError>) -> Self {
        match result {
            Ok(content) => Self::FetchedOk(content),
            Err(error) => Self::FetchedFail(error),
        }
    }
}

impl fmt::Display for FetchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
