use models::{Project, ProjectInput};
use tracing::{info, instrument};

use super::{read_data, read_envelope, reject, AdminClient, AdminOp};
use crate::errors::AdminError;

/// Project CRUD. Reads are unauthenticated; writes carry the bearer token.
pub struct AdminProjects<'a> {
    client: &'a AdminClient,
}

impl<'a> AdminProjects<'a> {
    pub(crate) fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    /// Full collection; the backend defines no pagination.
    #[instrument(skip(self), fields(op = "list_projects"))]
    pub async fn get_all(&self) -> Result<Vec<Project>, AdminError> {
        let op = AdminOp::ListProjects;
        let c = self.client;
        let resp = c.send(op, c.http().get(c.url("projects/read"))).await?;
        if !resp.status().is_success() {
            return Err(reject(op, resp).await);
        }
        Ok(read_envelope::<Vec<Project>>(op, resp).await?.data.unwrap_or_default())
    }

    #[instrument(skip(self, input), fields(op = "create_project"))]
    pub async fn create(&self, input: &ProjectInput) -> Result<Project, AdminError> {
        let op = AdminOp::CreateProject;
        let c = self.client;
        let builder = c.authorized(c.http().post(c.url("projects/create")).json(input)).await?;
        let resp = c.send(op, builder).await?;
        if !resp.status().is_success() {
            return Err(reject(op, resp).await);
        }
        let project: Project = read_data(op, resp).await?;
        info!(id = project.id, "project created");
        Ok(project)
    }

    #[instrument(skip(self, input), fields(op = "update_project"))]
    pub async fn update(&self, id: i64, input: &ProjectInput) -> Result<Project, AdminError> {
        let op = AdminOp::UpdateProject;
        let c = self.client;
        let builder = c.authorized(c.http().patch(c.url(&format!("projects/update/{id}"))).json(input)).await?;
        let resp = c.send(op, builder).await?;
        if !resp.status().is_success() {
            return Err(reject(op, resp).await);
        }
        let project: Project = read_data(op, resp).await?;
        info!(id = project.id, "project updated");
        Ok(project)
    }

    /// Success bodies are ignored.
    #[instrument(skip(self), fields(op = "delete_project"))]
    pub async fn delete(&self, id: i64) -> Result<(), AdminError> {
        let op = AdminOp::DeleteProject;
        let c = self.client;
        let builder = c.authorized(c.http().delete(c.url(&format!("projects/delete/{id}")))).await?;
        let resp = c.send(op, builder).await?;
        if !resp.status().is_success() {
            return Err(reject(op, resp).await);
        }
        info!(id, "project deleted");
        Ok(())
    }
}
