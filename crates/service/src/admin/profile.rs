use models::{Profile, ProfileInput};
use reqwest::StatusCode;
use tracing::{info, instrument};

use super::{read_data, read_envelope, reject, AdminClient, AdminOp};
use crate::errors::AdminError;

/// Singleton profile access for the admin panel.
pub struct AdminProfile<'a> {
    client: &'a AdminClient,
}

impl<'a> AdminProfile<'a> {
    pub(crate) fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    /// `Ok(None)` when no profile exists yet (404).
    #[instrument(skip(self), fields(op = "get_profile"))]
    pub async fn get(&self) -> Result<Option<Profile>, AdminError> {
        let op = AdminOp::GetProfile;
        let c = self.client;
        let resp = c.send(op, c.http().get(c.url("profiles/read"))).await?;
        if resp.status() == StatusCode::NOT_FOUND {
            info!("no profile stored yet");
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(reject(op, resp).await);
        }
        Ok(read_envelope::<Profile>(op, resp).await?.data)
    }

    /// Create the profile, or replace the existing one.
    #[instrument(skip(self, input), fields(op = "save_profile"))]
    pub async fn create_or_update(&self, input: &ProfileInput) -> Result<Profile, AdminError> {
        let op = AdminOp::SaveProfile;
        let c = self.client;
        let builder = c.authorized(c.http().post(c.url("profiles/create")).json(input)).await?;
        let resp = c.send(op, builder).await?;
        if !resp.status().is_success() {
            return Err(reject(op, resp).await);
        }
        let profile: Profile = read_data(op, resp).await?;
        info!(id = profile.id, "profile saved");
        Ok(profile)
    }
}
