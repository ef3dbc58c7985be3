use crate::error::{GranskaError, Result};
use crate::types::{Ecosystem, ScanResult, TestOptions, TestResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Output of a decomposed plugin's scan pass over one path.
#[derive(Debug, Clone)]
pub struct ScanOutput {
    pub scan_results: Vec<ScanResult>,
}

/// Output of a unified plugin's whole-invocation test.
#[derive(Debug, Clone)]
pub struct UnifiedTestOutput {
    pub readable_result: String,
}

#[async_trait]
pub trait DependencyScanner: Send + Sync {
    async fn scan(&self, path: &Path, options: &TestOptions) -> Result<ScanOutput>;
}

#[async_trait]
pub trait ResultDisplay: Send + Sync {
    async fn display(
        &self,
        scan_results: &[ScanResult],
        test_results: &[TestResult],
        errors: &[String],
        options: &TestOptions,
    ) -> Result<String>;
}

/// Some ecosystems cannot be decomposed into the generic scan/test flow
/// and instead take over the whole paths list in a single call.
#[async_trait]
pub trait UnifiedTester: Send + Sync {
    async fn test(&self, paths: &[PathBuf], options: &TestOptions) -> Result<UnifiedTestOutput>;
}

/// The two plugin forms, fixed at registration time. The pipeline picks
/// its flow by matching on the variant, never by probing capabilities.
pub enum EcosystemPlugin {
    Unified(Box<dyn UnifiedTester>),
    Decomposed {
        scanner: Box<dyn DependencyScanner>,
        display: Box<dyn ResultDisplay>,
    },
}

impl std::fmt::Debug for EcosystemPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EcosystemPlugin::Unified(_) => f.write_str("EcosystemPlugin::Unified"),
            EcosystemPlugin::Decomposed { .. } => f.write_str("EcosystemPlugin::Decomposed"),
        }
    }
}

pub struct PluginRegistry {
    plugins: Vec<(Ecosystem, EcosystemPlugin)>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    pub fn register(&mut self, ecosystem: Ecosystem, plugin: EcosystemPlugin) {
        self.plugins.push((ecosystem, plugin));
    }

    pub fn register_unified(&mut self, ecosystem: Ecosystem, tester: Box<dyn UnifiedTester>) {
        self.register(ecosystem, EcosystemPlugin::Unified(tester));
    }

    pub fn register_decomposed(
        &mut self,
        ecosystem: Ecosystem,
        scanner: Box<dyn DependencyScanner>,
        display: Box<dyn ResultDisplay>,
    ) {
        self.register(ecosystem, EcosystemPlugin::Decomposed { scanner, display });
    }

    pub fn get(&self, ecosystem: Ecosystem) -> Result<&EcosystemPlugin> {
        self.plugins
            .iter()
            .find(|(e, _)| *e == ecosystem)
            .map(|(_, p)| p)
            .ok_or_else(|| GranskaError::UnknownEcosystem {
                ecosystem: ecosystem.to_string(),
                supported: self.supported(),
            })
    }

    pub fn ecosystems(&self) -> Vec<Ecosystem> {
        self.plugins.iter().map(|(e, _)| *e).collect()
    }

    fn supported(&self) -> String {
        if self.plugins.is_empty() {
            return "none".to_string();
        }
        self.plugins
            .iter()
            .map(|(e, _)| e.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
