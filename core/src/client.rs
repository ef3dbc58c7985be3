use crate::error::{GranskaError, Result};
use crate::http::HttpClient;
use crate::progress::ProgressNotifier;
use crate::query::assemble_query_string;
use crate::types::{Issue, IssuesData, ScanResult, TestOptions, TestResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Scan results grouped by the path they came from, in input path order.
pub type ScansByPath = Vec<(PathBuf, Vec<ScanResult>)>;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestDependenciesRequest<'a> {
    pub scan_result: &'a ScanResult,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestDependenciesResponse {
    pub result: TestDependenciesResult,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestDependenciesResult {
    pub issues: Vec<Issue>,
    pub issues_data: IssuesData,
    pub dep_graph_data: serde_json::Value,
}

/// One remote test per scan result.
#[async_trait]
pub trait TestService: Send + Sync {
    async fn test_dependencies(
        &self,
        scan_result: &ScanResult,
        options: &TestOptions,
    ) -> Result<TestDependenciesResult>;
}

/// `TestService` over HTTP: `POST {base_url}/test-dependencies` with the
/// scan result as body, CI flag and token as headers, and the assembled
/// query string.
pub struct HttpTestService {
    http: HttpClient,
    base_url: String,
    token: String,
    is_ci: bool,
}

impl HttpTestService {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            is_ci: crate::ci::is_ci(),
        }
    }

    pub fn with_http(mut self, http: HttpClient) -> Self {
        self.http = http;
        self
    }

    pub fn with_ci(mut self, is_ci: bool) -> Self {
        self.is_ci = is_ci;
        self
    }
}

#[async_trait]
impl TestService for HttpTestService {
    async fn test_dependencies(
        &self,
        scan_result: &ScanResult,
        options: &TestOptions,
    ) -> Result<TestDependenciesResult> {
        let url = format!("{}/test-dependencies", self.base_url);
        let query = assemble_query_string(options);
        let headers = [
            ("x-is-ci", self.is_ci.to_string()),
            ("authorization", format!("token {}", self.token)),
        ];

        let response: TestDependenciesResponse = self
            .http
            .post_json(&url, &query, &headers, &TestDependenciesRequest { scan_result })
            .await?;
        Ok(response.result)
    }
}

/// Outcome of remotely testing one scan result. Every submitted scan
/// result yields exactly one of these.
#[derive(Debug, Clone)]
pub enum Outcome {
    Success {
        scan_result: ScanResult,
        test_result: TestResult,
    },
    Failure {
        scan_result: ScanResult,
        error: String,
    },
}

pub struct DependencyTester<'a> {
    service: &'a dyn TestService,
    notifier: &'a dyn ProgressNotifier,
}

impl<'a> DependencyTester<'a> {
    pub fn new(service: &'a dyn TestService, notifier: &'a dyn ProgressNotifier) -> Self {
        Self { service, notifier }
    }

    /// Tests every scan result, path by path, preserving order.
    ///
    /// A client-range (4xx) rejection aborts the whole pass with no
    /// partial outcome list. Any other failure is recorded against its
    /// path and the pass continues. Progress is cleared either way.
    pub async fn test_all(
        &self,
        scans: &ScansByPath,
        options: &TestOptions,
    ) -> Result<Vec<Outcome>> {
        let mut outcomes = Vec::new();

        for (path, scan_results) in scans {
            self.notifier
                .notify(&format!("Testing dependencies in {}", path.display()));

            for scan_result in scan_results {
                match self.service.test_dependencies(scan_result, options).await {
                    Ok(result) => outcomes.push(Outcome::Success {
                        scan_result: scan_result.clone(),
                        test_result: TestResult {
                            issues: result.issues,
                            issues_data: result.issues_data,
                            dep_graph_data: result.dep_graph_data,
                        },
                    }),
                    Err(err @ GranskaError::ClientRequest { .. }) => {
                        self.notifier.clear_all();
                        return Err(err);
                    }
                    Err(_) => outcomes.push(Outcome::Failure {
                        scan_result: scan_result.clone(),
                        error: format!("Could not test dependencies in {}", path.display()),
                    }),
                }
            }
        }

        self.notifier.clear_all();
        Ok(outcomes)
    }
}
