use crate::error::{GranskaError, Result};
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_RETRIES: u32 = 3;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin reqwest wrapper used for all test service calls.
///
/// Status classification happens here, once: a 4xx comes back immediately
/// as `ClientRequest`, everything else is retried with exponential backoff
/// and surfaces as `Service` or `Transport` when the retries run out.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    retries: u32,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: build_client(DEFAULT_TIMEOUT),
            retries: DEFAULT_RETRIES,
        }
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = build_client(timeout);
        self
    }

    pub async fn post_json<T, B>(
        &self,
        url: &str,
        query: &[(String, String)],
        headers: &[(&str, String)],
        body: &B,
    ) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
        B: serde::Serialize,
    {
        for attempt in 0..=self.retries {
            let mut request = self.client.post(url).query(query).json(body);
            for (name, value) in headers {
                request = request.header(*name, value.as_str());
            }

            match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return response.json().await.map_err(|e| GranskaError::Transport {
                            url: url.to_string(),
                            source: e,
                        });
                    }
                    if status.is_client_error() {
                        return Err(GranskaError::ClientRequest {
                            status: status.as_u16(),
                            message: error_message(response, status).await,
                        });
                    }
                    if attempt == self.retries {
                        return Err(GranskaError::Service {
                            status: status.as_u16(),
                            url: url.to_string(),
                        });
                    }
                }
                Err(e) => {
                    if attempt == self.retries {
                        return Err(GranskaError::Transport {
                            url: url.to_string(),
                            source: e,
                        });
                    }
                }
            }

            let delay = Duration::from_secs(2u64.pow(attempt));
            tokio::time::sleep(delay).await;
        }
        unreachable!("final attempt returns from the loop")
    }
}

fn build_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("Failed to build HTTP client")
}

async fn error_message(response: reqwest::Response, status: reqwest::StatusCode) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    match response.json::<ErrorBody>().await {
        Ok(ErrorBody {
            message: Some(message),
        }) => message,
        _ => format!("Test request rejected with status {}", status.as_u16()),
    }
}
