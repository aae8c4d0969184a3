//! Build/version helpers shown by `--version` and at startup.

use std::sync::LazyLock;

/// Placeholder vergen emits when git metadata cannot be collected.
const VERGEN_IDEMPOTENT_OUTPUT: &str = "VERGEN_IDEMPOTENT_OUTPUT";

static BUILD_VERSION: LazyLock<String> = LazyLock::new(|| {
    format_version(env!("CARGO_PKG_VERSION"), option_env!("VERGEN_GIT_SHA"))
});

fn format_version(pkg_version: &str, git_hash: Option<&str>) -> String {
    let git_hash = git_hash
        .map(str::trim)
        .filter(|hash| !hash.is_empty() && *hash != VERGEN_IDEMPOTENT_OUTPUT)
        .unwrap_or("unknown");

    format!("{pkg_version} ({git_hash})")
}

/// Returns a combined version string: `pkg_version (git_hash)`.
///
/// If git metadata is unavailable, the hash is reported as `unknown`.
#[must_use]
pub fn build_version() -> &'static str {
    BUILD_VERSION.as_str()
}
