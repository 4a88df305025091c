use crate::api::ApiError;
use crate::models::Sponsor;

pub const NO_RESULTS_MESSAGE: &str = "No sponsors found.";
pub const FORBIDDEN_MESSAGE: &str = "You do not have permission to search sponsors.";

/// Trims a raw query. Blank queries yield `None` and must not be sent.
pub fn normalize_query(raw: &str) -> Option<String> {
    let query = raw.trim();
    if query.is_empty() {
        None
    } else {
        Some(query.to_string())
    }
}

/// Contents of the search results area
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchResults {
    #[default]
    Idle,
    Found(Vec<Sponsor>),
    Denied,
}

impl SearchResults {
    /// Folds a finished search into the results area. A forbidden response
    /// replaces whatever was shown; any other failure leaves it untouched.
    pub fn apply(self, outcome: Result<Vec<Sponsor>, ApiError>) -> Self {
        match outcome {
            Ok(sponsors) => Self::Found(sponsors),
            Err(err) if err.is_forbidden() => Self::Denied,
            Err(err) => {
                tracing::error!("Error searching sponsors: {}", err);
                self
            }
        }
    }

    /// Message replacing the result list, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Found(sponsors) if sponsors.is_empty() => Some(NO_RESULTS_MESSAGE),
            Self::Denied => Some(FORBIDDEN_MESSAGE),
            _ => None,
        }
    }
}
