use colored::Colorize;
use granska_core::{Issue, ScanResult, Severity, TestOptions, TestResult};

/// Renders the human-readable pip report: one block per tested target
/// with issues sorted most severe first, then the collected error lines,
/// then a summary.
pub fn render(
    scan_results: &[ScanResult],
    test_results: &[TestResult],
    errors: &[String],
    _options: &TestOptions,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        "Tested pip dependencies for known issues".bold()
    ));

    for (index, test_result) in test_results.iter().enumerate() {
        let target = scan_results
            .get(index)
            .and_then(|s| s.identity.target_file.as_deref())
            .unwrap_or("unknown target");
        out.push_str(&format!("{} {}\n", "Target:".bold(), target));

        if test_result.issues.is_empty() {
            out.push_str(&format!("  {}\n\n", "No known issues found".green()));
            continue;
        }

        let mut issues: Vec<&Issue> = test_result.issues.iter().collect();
        issues.sort_by_key(|issue| std::cmp::Reverse(severity_of(issue, test_result)));

        for issue in issues {
            let data = test_result.issues_data.get(&issue.issue_id);
            let title = data.map(|d| d.title.as_str()).unwrap_or("Unknown issue");
            let package = match &issue.pkg_version {
                Some(version) => format!("{}@{}", issue.pkg_name, version),
                None => issue.pkg_name.clone(),
            };

            out.push_str(&format!(
                "  {} {} [{}] in {} ({})\n",
                "✗".red(),
                title,
                severity_label(data.map(|d| d.severity)),
                package,
                issue.issue_id
            ));
            if let Some(fixed) = &issue.fix_info.nearest_fixed_in_version {
                out.push_str(&format!("    Fixed in: {}\n", fixed));
            }
        }
        out.push('\n');
    }

    if !errors.is_empty() {
        out.push_str(&format!("{}\n", "Errors".bold()));
        for error in errors {
            out.push_str(&format!("  {} {}\n", "✗".red(), error));
        }
        out.push('\n');
    }

    let total_issues: usize = test_results.iter().map(|r| r.issues.len()).sum();
    out.push_str(&format!(
        "Tested {} {}, found {} {}\n",
        test_results.len(),
        plural(test_results.len(), "project"),
        total_issues,
        plural(total_issues, "issue")
    ));

    out
}

fn severity_of(issue: &Issue, test_result: &TestResult) -> Option<Severity> {
    test_result
        .issues_data
        .get(&issue.issue_id)
        .map(|data| data.severity)
}

fn severity_label(severity: Option<Severity>) -> String {
    match severity {
        Some(Severity::Critical) => "critical severity".red().bold().to_string(),
        Some(Severity::High) => "high severity".red().to_string(),
        Some(Severity::Medium) => "medium severity".yellow().to_string(),
        Some(Severity::Low) => "low severity".to_string(),
        None => "unknown severity".to_string(),
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{}s", noun)
    }
}
