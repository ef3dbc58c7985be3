use crate::registry;
use clap::Parser;
use colored::Colorize;
use granska_core::{
    Config, Ecosystem, HttpTestService, Severity, TestCommandResult, TestOptions, TestPipeline,
    TestResult,
};
use std::path::PathBuf;

#[derive(Parser)]
pub struct Test {
    #[arg(help = "Paths to test", required = true)]
    paths: Vec<PathBuf>,

    #[arg(short, long, help = "Ecosystem to test")]
    ecosystem: Ecosystem,

    #[arg(long, help = "Output in JSON format")]
    json: bool,

    #[arg(long, help = "Organization to run the test under")]
    org: Option<String>,

    #[arg(long, help = "Report only issues at or above this severity")]
    severity_threshold: Option<Severity>,

    #[arg(long, help = "Fail only for issues fixable by the given remediation (all, upgradable, patchable)")]
    fail_on: Option<String>,

    #[arg(long, help = "Path to a granska.yml config file")]
    config: Option<PathBuf>,
}

impl Test {
    pub async fn run(&self) -> anyhow::Result<i32> {
        for path in &self.paths {
            if !path.exists() {
                anyhow::bail!("Path does not exist: {}", path.display());
            }
        }

        let config = Config::load(self.config.as_deref())?;
        let token = config.require_token()?.to_string();

        let options = TestOptions {
            json: self.json,
            org: self.org.clone().or_else(|| config.org.clone()),
            severity_threshold: self.severity_threshold,
            fail_on: self.fail_on.clone(),
        };

        let registry = registry::build();
        let service = HttpTestService::new(&config.api_url, &token);
        let notifier = crate::progress::notifier(self.json);

        let result = TestPipeline::new(&registry, &service, notifier.as_ref())
            .run(self.ecosystem, &self.paths, &options)
            .await?;

        println!("{}", result.text());

        Ok(exit_code(&result))
    }
}

/// Exit 1 when any tested target carries issues, 0 otherwise.
fn exit_code(result: &TestCommandResult) -> i32 {
    // Unified plugins carry no machine payload to inspect.
    let test_results: Vec<TestResult> = match serde_json::from_str(result.json_payload()) {
        Ok(results) => results,
        Err(_) => return 0,
    };

    if test_results.iter().any(|r| !r.issues.is_empty()) {
        1
    } else {
        0
    }
}

#[derive(Parser)]
pub struct Ecosystems;

impl Ecosystems {
    pub fn run(&self) {
        let registry = registry::build();

        println!("{}", "Supported ecosystems:".bold());
        for ecosystem in registry.ecosystems() {
            println!("  - {}", ecosystem);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_zero_without_issues() {
        let result = TestCommandResult::json("[]".to_string());
        assert_eq!(exit_code(&result), 0);
    }

    #[test]
    fn exit_code_one_with_issues() {
        let payload = r#"[{
            "issues": [{"pkgName": "requests", "issueId": "VULN-1"}],
            "issuesData": {},
            "depGraphData": null
        }]"#;
        let result = TestCommandResult::json(payload.to_string());
        assert_eq!(exit_code(&result), 1);
    }

    #[test]
    fn exit_code_zero_for_unified_results() {
        let result = TestCommandResult::human_readable("all good".to_string(), String::new());
        assert_eq!(exit_code(&result), 0);
    }
}
