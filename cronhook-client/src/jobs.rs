//! Cron job API endpoints

use cronhook_core::domain::job::CronJob;
use cronhook_core::dto::health::HealthStatus;

use crate::CronhookClient;
use crate::error::Result;

impl CronhookClient {
    /// List every job of the server's crontab
    ///
    /// Listing also refreshes the server's hash index, so a hash returned
    /// here can be passed to [`CronhookClient::run_job`].
    pub async fn list_jobs(&self) -> Result<Vec<CronJob>> {
        let url = format!("{}/cronjobs", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Trigger a job by hash and return its captured stdout
    ///
    /// # Arguments
    /// * `hash` - The job hash, as returned by [`CronhookClient::list_jobs`]
    pub async fn run_job(&self, hash: &str) -> Result<Vec<u8>> {
        let url = format!("{}/cronjobs/{}", self.base_url, hash);
        tracing::debug!("Triggering job {}", hash);
        let response = self.client.post(&url).send().await?;

        self.handle_bytes_response(response).await
    }

    /// Query server health
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_jobs() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cronjobs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "script": "echo hello", "hash": "abc123", "interval": "0 * * * *" }
            ])))
            .mount(&server)
            .await;

        let client = CronhookClient::new(server.uri());
        let jobs = client.list_jobs().await.unwrap();

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].command, "echo hello");
        assert_eq!(jobs[0].identifier, "abc123");
        assert_eq!(jobs[0].schedule, "0 * * * *");
    }

    #[tokio::test]
    async fn test_list_jobs_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cronjobs"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_string("Failed to retrieve cron jobs: exit status: 1"),
            )
            .mount(&server)
            .await;

        let err = CronhookClient::new(server.uri())
            .list_jobs()
            .await
            .unwrap_err();

        assert!(err.is_server_error());
        match err {
            ClientError::ApiError { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Failed to retrieve cron jobs: exit status: 1");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_jobs_invalid_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cronjobs"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = CronhookClient::new(server.uri())
            .list_jobs()
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_run_job_returns_raw_output() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/cronjobs/abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"hello\n".to_vec()))
            .expect(1)
            .mount(&server)
            .await;

        let output = CronhookClient::new(server.uri())
            .run_job("abc123")
            .await
            .unwrap();

        assert_eq!(output, b"hello\n");
    }

    #[tokio::test]
    async fn test_run_unknown_job() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/cronjobs/missing"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Job not found"))
            .mount(&server)
            .await;

        let err = CronhookClient::new(server.uri())
            .run_job("missing")
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_health() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "status": "ok", "indexed_jobs": 3 })),
            )
            .mount(&server)
            .await;

        let health = CronhookClient::new(server.uri()).health().await.unwrap();

        assert_eq!(health, HealthStatus::ok(3));
    }
}
