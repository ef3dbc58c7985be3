use std::env;

const CI_ENV_VARS: &[&str] = &[
    "CI",
    "CONTINUOUS_INTEGRATION",
    "BUILD_NUMBER",
    "TRAVIS",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "JENKINS_URL",
    "TEAMCITY_VERSION",
    "BUILDKITE",
];

/// Whether the current process appears to be running under a CI system.
/// Sent to the test service as the `x-is-ci` header.
pub fn is_ci() -> bool {
    CI_ENV_VARS.iter().any(|var| env::var_os(var).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_a_ci_env_var() {
        env::set_var("BUILDKITE", "1");
        assert!(is_ci());
        env::remove_var("BUILDKITE");
    }
}
