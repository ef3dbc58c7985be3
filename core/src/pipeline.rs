use crate::client::{DependencyTester, ScansByPath, TestService};
use crate::error::Result;
use crate::partition::partition_outcomes;
use crate::plugin::{DependencyScanner, EcosystemPlugin, PluginRegistry};
use crate::progress::ProgressNotifier;
use crate::types::{Ecosystem, ScanResult, TestOptions};
use std::path::PathBuf;

/// Final, caller-facing result of one test invocation. Terminal writing
/// and exit-code mapping stay with the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestCommandResult {
    Json {
        payload: String,
    },
    HumanReadable {
        text: String,
        json_payload: String,
    },
}

impl TestCommandResult {
    pub fn json(payload: String) -> Self {
        Self::Json { payload }
    }

    pub fn human_readable(text: String, json_payload: String) -> Self {
        Self::HumanReadable { text, json_payload }
    }

    /// The primary text to print.
    pub fn text(&self) -> &str {
        match self {
            Self::Json { payload } => payload,
            Self::HumanReadable { text, .. } => text,
        }
    }

    /// The machine-readable payload; empty for unified plugin results.
    pub fn json_payload(&self) -> &str {
        match self {
            Self::Json { payload } => payload,
            Self::HumanReadable { json_payload, .. } => json_payload,
        }
    }
}

pub struct TestPipeline<'a> {
    registry: &'a PluginRegistry,
    service: &'a dyn TestService,
    notifier: &'a dyn ProgressNotifier,
}

impl<'a> TestPipeline<'a> {
    pub fn new(
        registry: &'a PluginRegistry,
        service: &'a dyn TestService,
        notifier: &'a dyn ProgressNotifier,
    ) -> Self {
        Self {
            registry,
            service,
            notifier,
        }
    }

    /// Runs the whole flow for one ecosystem: resolve the plugin, scan
    /// every path, test every scan result, partition, render.
    ///
    /// Unified plugins bypass all of that and take the paths list in one
    /// call. In JSON mode the payload carries only the successful test
    /// results; transient errors appear solely in the human-readable
    /// rendering.
    pub async fn run(
        &self,
        ecosystem: Ecosystem,
        paths: &[PathBuf],
        options: &TestOptions,
    ) -> Result<TestCommandResult> {
        let plugin = self.registry.get(ecosystem)?;

        match plugin {
            EcosystemPlugin::Unified(tester) => {
                let output = tester.test(paths, options).await?;
                Ok(TestCommandResult::human_readable(
                    output.readable_result,
                    String::new(),
                ))
            }
            EcosystemPlugin::Decomposed { scanner, display } => {
                let scans = self.scan_all(scanner.as_ref(), paths, options).await?;

                let outcomes = DependencyTester::new(self.service, self.notifier)
                    .test_all(&scans, options)
                    .await?;
                let partitioned = partition_outcomes(outcomes);

                let json_payload = serde_json::to_string_pretty(&partitioned.test_results)?;
                if options.json {
                    return Ok(TestCommandResult::json(json_payload));
                }

                let scan_results: Vec<ScanResult> =
                    scans.into_iter().flat_map(|(_, results)| results).collect();
                let text = display
                    .display(
                        &scan_results,
                        &partitioned.test_results,
                        &partitioned.errors,
                        options,
                    )
                    .await?;
                Ok(TestCommandResult::human_readable(text, json_payload))
            }
        }
    }

    async fn scan_all(
        &self,
        scanner: &dyn DependencyScanner,
        paths: &[PathBuf],
        options: &TestOptions,
    ) -> Result<ScansByPath> {
        let mut scans: ScansByPath = Vec::new();

        for path in paths {
            self.notifier
                .notify(&format!("Scanning dependencies in {}", path.display()));
            let output = scanner.scan(path, options).await?;
            scans.push((path.clone(), output.scan_results));
        }
        self.notifier.clear_all();

        Ok(scans)
    }
}

/// Convenience entry point for one-shot callers.
pub async fn test_ecosystem(
    registry: &PluginRegistry,
    service: &dyn TestService,
    notifier: &dyn ProgressNotifier,
    ecosystem: Ecosystem,
    paths: &[PathBuf],
    options: &TestOptions,
) -> Result<TestCommandResult> {
    TestPipeline::new(registry, service, notifier)
        .run(ecosystem, paths, options)
        .await
}
