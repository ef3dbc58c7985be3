use crate::detector::PipDetector;
use crate::display;
use crate::parser::PipParser;
use async_trait::async_trait;
use granska_core::{
    DependencyScanner, Ecosystem, Fact, GranskaError, Identity, PluginRegistry, Result,
    ResultDisplay, ScanOutput, ScanResult, TestOptions, TestResult,
};
use serde_json::json;
use std::path::Path;

pub struct PipPlugin {
    detector: PipDetector,
    parser: PipParser,
}

impl PipPlugin {
    pub fn new() -> Self {
        Self {
            detector: PipDetector::new(),
            parser: PipParser::new(),
        }
    }

    /// Registers the pip plugin in decomposed form.
    pub fn register(registry: &mut PluginRegistry) {
        registry.register_decomposed(
            Ecosystem::Pip,
            Box::new(PipPlugin::new()),
            Box::new(PipPlugin::new()),
        );
    }
}

#[async_trait]
impl DependencyScanner for PipPlugin {
    async fn scan(&self, path: &Path, _options: &TestOptions) -> Result<ScanOutput> {
        let files = self.detector.detect(path)?;
        if files.is_empty() {
            return Err(GranskaError::Plugin {
                message: format!("No requirements.txt found under {}", path.display()),
            });
        }

        let mut scan_results = Vec::new();
        for file in files {
            let content = std::fs::read_to_string(&file)?;
            let requirements = self.parser.parse(&file, &content)?;

            let target_file = file
                .strip_prefix(path)
                .unwrap_or(&file)
                .display()
                .to_string();

            scan_results.push(ScanResult {
                identity: Identity {
                    kind: "pip".to_string(),
                    target_file: Some(target_file),
                },
                facts: vec![Fact {
                    kind: "depGraph".to_string(),
                    data: json!({
                        "pkgManager": "pip",
                        "pkgs": requirements
                            .iter()
                            .map(|r| json!({"name": r.name, "version": r.version}))
                            .collect::<Vec<_>>(),
                    }),
                }],
                name: Some(path.display().to_string()),
            });
        }

        Ok(ScanOutput { scan_results })
    }
}

#[async_trait]
impl ResultDisplay for PipPlugin {
    async fn display(
        &self,
        scan_results: &[ScanResult],
        test_results: &[TestResult],
        errors: &[String],
        options: &TestOptions,
    ) -> Result<String> {
        Ok(display::render(scan_results, test_results, errors, options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn scan_produces_one_result_per_requirements_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("requirements.txt"),
            "requests==2.19.0\nflask==2.0.1\n",
        )
        .unwrap();

        let plugin = PipPlugin::new();
        let output = plugin
            .scan(temp_dir.path(), &TestOptions::default())
            .await
            .unwrap();

        assert_eq!(output.scan_results.len(), 1);
        let scan_result = &output.scan_results[0];
        assert_eq!(scan_result.identity.kind, "pip");
        assert_eq!(
            scan_result.identity.target_file.as_deref(),
            Some("requirements.txt")
        );
        assert_eq!(scan_result.facts[0].kind, "depGraph");
        assert_eq!(scan_result.facts[0].data["pkgs"][0]["name"], "requests");
        assert_eq!(scan_result.facts[0].data["pkgs"][1]["version"], "2.0.1");
    }

    #[tokio::test]
    async fn scan_fails_when_nothing_is_found() {
        let temp_dir = TempDir::new().unwrap();

        let plugin = PipPlugin::new();
        let err = plugin
            .scan(temp_dir.path(), &TestOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, GranskaError::Plugin { .. }));
    }
}
