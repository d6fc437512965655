use async_trait::async_trait;
use anyhow::anyhow;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use std::time::Duration;

use super::{resource_id, CreatedMoodLog, Upstream};
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::appointment::AppointmentRecord;
use crate::models::mood_log::MoodLogEntry;

/// List endpoints answer either with a bare array or wrapped in an object
/// keyed by the resource name.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(alias = "appointments", alias = "moods", alias = "moodLogs")]
        data: Vec<T>,
    },
}

impl<T> ListBody<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Wrapped { data: items } => items,
        }
    }
}

pub struct HttpUpstream {
    client: Client,
    base_url: Url,
}

impl HttpUpstream {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()?;

        let base_url = Url::parse(&config.upstream_api_url)?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("UPSTREAM_API_URL {} cannot be a base URL", base_url);
        }

        Ok(Self { client, base_url })
    }

    /// Append `segments` to the base path. Each segment is percent-encoded,
    /// so `/`, `?` and `#` inside an id stay inside that segment.
    fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Internal(anyhow!("upstream base URL has no path")))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> AppResult<Response> {
        let response = request.send().await?;
        check_status(response).await
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> AppResult<T> {
        let response = self.send(request).await?;
        response.json::<T>().await.map_err(|e| {
            tracing::warn!(error = %e, "Upstream returned an unexpected body");
            AppError::Upstream {
                status: StatusCode::OK.as_u16(),
                message: format!("malformed response body: {}", e),
            }
        })
    }
}

async fn check_status(response: Response) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    match status {
        StatusCode::UNAUTHORIZED => Err(AppError::Unauthorized),
        StatusCode::NOT_FOUND => Err(AppError::NotFound(if body.is_empty() {
            "Not found".into()
        } else {
            upstream_message(&body)
        })),
        _ => Err(AppError::Upstream {
            status: status.as_u16(),
            message: upstream_message(&body),
        }),
    }
}

/// Pull `message` (or `error`) out of a JSON error body, else use the raw text.
fn upstream_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn create_mood_log(
        &self,
        token: &str,
        entry: &MoodLogEntry,
    ) -> AppResult<CreatedMoodLog> {
        let request = self
            .client
            .post(self.endpoint(&["mood"])?)
            .bearer_auth(token)
            .json(entry);
        self.send_json(request).await
    }

    async fn list_mood_logs(&self, token: &str) -> AppResult<Vec<Value>> {
        let request = self.client.get(self.endpoint(&["mood"])?).bearer_auth(token);
        let body: ListBody<Value> = self.send_json(request).await?;
        Ok(body.into_vec())
    }

    async fn delete_mood_log(&self, token: &str, id: &str) -> AppResult<()> {
        let url = self.endpoint(&["mood", resource_id(id)?])?;
        let request = self.client.delete(url).bearer_auth(token);
        self.send(request).await?;
        Ok(())
    }

    async fn list_appointments(&self, token: &str) -> AppResult<Vec<AppointmentRecord>> {
        let request = self
            .client
            .get(self.endpoint(&["appointments"])?)
            .bearer_auth(token);
        let body: ListBody<AppointmentRecord> = self.send_json(request).await?;
        Ok(body.into_vec())
    }

    async fn ping(&self) -> bool {
        let Ok(url) = self.endpoint(&["health"]) else {
            return false;
        };
        match self.client.get(url).send().await {
            Ok(response) => !response.status().is_server_error(),
            Err(e) => {
                tracing::warn!(error = %e, "Upstream ping failed");
                false
            }
        }
    }
}
