use granska_core::{GranskaError, Result};
use regex::Regex;
use std::path::Path;

/// A single pinned requirement taken from a requirements file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub name: String,
    pub version: String,
}

pub struct PipParser {
    pinned: Regex,
}

impl PipParser {
    pub fn new() -> Self {
        Self {
            pinned: Regex::new(r"^([A-Za-z0-9][A-Za-z0-9._-]*)(\[[^\]]*\])?\s*==\s*([A-Za-z0-9.!+*]+)$")
                .expect("valid requirement pattern"),
        }
    }

    /// Parses the pinned requirements out of requirements.txt content.
    ///
    /// Comment, blank and option lines (`-r`, `--hash`, ...) are skipped,
    /// environment markers after `;` are cut, extras are dropped, and
    /// names are lowercased. Unpinned specifiers carry no version to
    /// inventory and are skipped; a malformed pinned line is an error.
    pub fn parse(&self, file: &Path, content: &str) -> Result<Vec<Requirement>> {
        let mut requirements = Vec::new();

        for raw in content.lines() {
            let line = raw.split('#').next().unwrap_or("");
            let line = line.split(';').next().unwrap_or("").trim();

            if line.is_empty() || line.starts_with('-') {
                continue;
            }

            match self.pinned.captures(line) {
                Some(caps) => requirements.push(Requirement {
                    name: caps[1].to_ascii_lowercase(),
                    version: caps[3].to_string(),
                }),
                None if line.contains("==") => {
                    return Err(GranskaError::ParseError {
                        file: file.to_path_buf(),
                        message: format!("Unparseable requirement line: {}", raw.trim()),
                    });
                }
                None => {}
            }
        }

        Ok(requirements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(content: &str) -> Result<Vec<Requirement>> {
        PipParser::new().parse(&PathBuf::from("requirements.txt"), content)
    }

    #[test]
    fn parses_pinned_requirements() {
        let requirements = parse("requests==2.31.0\nflask==2.0.1\n").unwrap();

        assert_eq!(requirements.len(), 2);
        assert_eq!(requirements[0].name, "requests");
        assert_eq!(requirements[0].version, "2.31.0");
    }

    #[test]
    fn skips_comments_blanks_and_option_lines() {
        let content = "# base deps\n\n-r common.txt\n--no-binary :all:\nflask==2.0.1  # web\n";
        let requirements = parse(content).unwrap();

        assert_eq!(requirements.len(), 1);
        assert_eq!(requirements[0].name, "flask");
    }

    #[test]
    fn handles_extras_and_environment_markers() {
        let content = "uvicorn[standard]==0.23.2 ; python_version >= \"3.8\"\n";
        let requirements = parse(content).unwrap();

        assert_eq!(requirements.len(), 1);
        assert_eq!(requirements[0].name, "uvicorn");
        assert_eq!(requirements[0].version, "0.23.2");
    }

    #[test]
    fn lowercases_package_names() {
        let requirements = parse("Django==4.2\n").unwrap();
        assert_eq!(requirements[0].name, "django");
    }

    #[test]
    fn skips_unpinned_specifiers() {
        let requirements = parse("requests>=2.0\nflask\n").unwrap();
        assert!(requirements.is_empty());
    }

    #[test]
    fn rejects_malformed_pinned_lines() {
        let err = parse("==1.0\n").unwrap_err();
        assert!(matches!(err, GranskaError::ParseError { .. }));
    }
}
