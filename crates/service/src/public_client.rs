//! Read-only client used to render the public site.
//!
//! Reads never fail: any timeout, transport error, non-2xx status or
//! malformed envelope is answered with bundled fallback data, and the
//! advisory [`ApiStatus`] records what happened.

use configs::ApiConfig;
use models::fallback::{fallback_profile, fallback_projects};
use models::{Envelope, Profile, Project};
use serde::de::DeserializeOwned;
use tracing::{error, info, instrument, warn};

use crate::errors::FetchError;
use crate::observability::{API_REQUESTS_TOTAL, FALLBACK_SERVED_TOTAL};
use crate::status::{AdvisoryStatus, ApiStatus};

const PROJECTS_ROUTE: &str = "projects/read";
const PROFILE_ROUTE: &str = "profiles/read";

pub struct PublicClient {
    http: reqwest::Client,
    base_url: String,
    status: AdvisoryStatus,
}

impl PublicClient {
    /// Build a client with the configured public timeout.
    pub fn new(cfg: &ApiConfig) -> Result<Self, common::CoreError> {
        let http = common::http::build_json_client(cfg.public_timeout())?;
        Ok(Self { http, base_url: cfg.base_url.clone(), status: AdvisoryStatus::default() })
    }

    /// Outcome of the most recent read.
    pub fn status(&self) -> ApiStatus {
        self.status.get()
    }

    /// All projects, or the bundled ones when the backend cannot answer.
    #[instrument(skip(self), fields(endpoint = PROJECTS_ROUTE))]
    pub async fn get_projects(&self) -> Vec<Project> {
        match self.fetch::<Vec<Project>>(PROJECTS_ROUTE).await {
            Ok(envelope) => {
                let projects = envelope.data.unwrap_or_default();
                self.status.set(ApiStatus::Available);
                info!(count = projects.len(), "projects fetched from api");
                projects
            }
            Err(e) => {
                self.degrade(&e);
                fallback_projects()
            }
        }
    }

    /// The site profile, or the bundled one when the backend cannot answer.
    ///
    /// A reachable backend without a profile also yields the fallback, but
    /// leaves the status untouched.
    #[instrument(skip(self), fields(endpoint = PROFILE_ROUTE))]
    pub async fn get_profile(&self) -> Profile {
        match self.fetch::<Profile>(PROFILE_ROUTE).await {
            Ok(Envelope { data: Some(profile), .. }) => {
                self.status.set(ApiStatus::Available);
                info!("profile fetched from api");
                profile
            }
            Ok(_) => {
                info!("backend has no profile yet, using fallback");
                FALLBACK_SERVED_TOTAL.inc();
                fallback_profile()
            }
            Err(e) => {
                self.degrade(&e);
                fallback_profile()
            }
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, route: &str) -> Result<Envelope<T>, FetchError> {
        let url = common::http::join_url(&self.base_url, route);
        info!(%url, "requesting");
        API_REQUESTS_TOTAL.inc();

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16() });
        }
        let body = resp.bytes().await?;
        serde_json::from_slice::<Envelope<T>>(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    fn degrade(&self, e: &FetchError) {
        match e {
            FetchError::Status { status } => warn!(status, "api answered with error status, serving fallback"),
            other => error!(error = %other, "api unreachable, serving fallback"),
        }
        self.status.set(ApiStatus::Unavailable);
        FALLBACK_SERVED_TOTAL.inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_backend_serves_fallback() {
        // Port 9 on loopback: nothing listens, connection is refused immediately.
        let client = PublicClient::new(&ApiConfig::with_base_url("http://127.0.0.1:9/api")).unwrap();
        assert_eq!(client.status(), ApiStatus::Unknown);
        assert_eq!(client.get_projects().await, fallback_projects());
        assert_eq!(client.status(), ApiStatus::Unavailable);
        assert_eq!(client.get_profile().await, fallback_profile());
        assert_eq!(client.status(), ApiStatus::Unavailable);
    }
}
