use thiserror::Error;

use crate::calendar::VisibleRange;

// ============================================================================
// Endpoints
// ============================================================================

pub const GET_SPONSORS_PATH: &str = "/get_sponsors";
pub const SEARCH_SPONSORS_PATH: &str = "/search_sponsors";
pub const ADD_SPONSOR_PATH: &str = "/add_sponsor";
pub const CREATE_TEST_SPONSOR_PATH: &str = "/create_test_sponsor";

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Server operations the client performs. Each one maps HTTP statuses to
/// errors differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    SponsorsInRange,
    SearchSponsors,
    AddSponsor,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Self::SponsorsInRange => GET_SPONSORS_PATH,
            Self::SearchSponsors => SEARCH_SPONSORS_PATH,
            Self::AddSponsor => ADD_SPONSOR_PATH,
        }
    }

    /// Checks a response status for this endpoint.
    pub fn check_status(self, status: u16) -> Result<(), ApiError> {
        if (200..300).contains(&status) {
            return Ok(());
        }
        match (self, status) {
            (Self::SponsorsInRange | Self::AddSponsor, 401) => Err(ApiError::Unauthorized),
            (Self::SearchSponsors, 403) => Err(ApiError::Forbidden),
            _ => Err(ApiError::Status(status)),
        }
    }
}

pub fn sponsors_in_range_url(base_url: &str, range: &VisibleRange) -> String {
    format!(
        "{}{}?start={}&end={}",
        base_url,
        GET_SPONSORS_PATH,
        range.start_str(),
        range.end_str()
    )
}

pub fn search_sponsors_url(base_url: &str, query: &str) -> String {
    format!(
        "{}{}?query={}",
        base_url,
        SEARCH_SPONSORS_PATH,
        urlencoding::encode(query)
    )
}

pub fn add_sponsor_url(base_url: &str) -> String {
    format!("{}{}", base_url, ADD_SPONSOR_PATH)
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("Network response was not ok (HTTP {0})")]
    Status(u16),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Invalid sponsor: {0}")]
    Validation(String),
}

impl ApiError {
    /// The session is gone and the page should move to the login view.
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden)
    }
}
