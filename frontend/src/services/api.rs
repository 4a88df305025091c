use std::rc::Rc;

use gloo_net::http::{Request, Response};
use shared::api::{self, ApiError, Endpoint, FORM_CONTENT_TYPE};
use shared::{AppConfig, NewSponsor, Sponsor, VisibleRange};

use crate::services::page;

/// Client for the sponsor endpoints
#[derive(Clone, PartialEq)]
pub struct ApiService {
    config: Rc<AppConfig>,
}

impl ApiService {
    pub fn new(config: Rc<AppConfig>) -> Self {
        Self { config }
    }

    /// Sponsors whose date falls inside `range`. A 401 sends the browser to
    /// the login page before the error is returned.
    pub async fn fetch_events_in_range(&self, range: &VisibleRange) -> Result<Vec<Sponsor>, ApiError> {
        let url = api::sponsors_in_range_url(&self.config.api_base_url, range);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        self.check(Endpoint::SponsorsInRange, &response)?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn search_sponsors(&self, query: &str) -> Result<Vec<Sponsor>, ApiError> {
        let url = api::search_sponsors_url(&self.config.api_base_url, query);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        self.check(Endpoint::SearchSponsors, &response)?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn add_sponsor(&self, sponsor: &NewSponsor) -> Result<(), ApiError> {
        sponsor.check()?;

        let url = api::add_sponsor_url(&self.config.api_base_url);

        let response = Request::post(&url)
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(sponsor.to_form_body())
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        self.check(Endpoint::AddSponsor, &response)
    }

    fn check(&self, endpoint: Endpoint, response: &Response) -> Result<(), ApiError> {
        handle_status(&self.config, endpoint, response.status(), page::navigate)
    }
}

/// Maps a response status to a result, sending the session to the login
/// page through `navigate` when the endpoint reports it unauthorized.
pub fn handle_status(
    config: &AppConfig,
    endpoint: Endpoint,
    status: u16,
    navigate: impl FnOnce(&str),
) -> Result<(), ApiError> {
    let result = endpoint.check_status(status);
    if let Err(err) = &result {
        tracing::warn!(endpoint = endpoint.path(), status, "{}", err);
        if err.requires_login() {
            navigate(&config.login_path);
        }
    }
    result
}
