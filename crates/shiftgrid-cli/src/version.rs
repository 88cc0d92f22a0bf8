//! Build version reported in the startup log.

const SHORT_HASH_LEN: usize = 9;

/// Returns the package version followed by the abbreviated commit it was
/// built from, e.g. `0.1.0 (1a2b3c4d5)`.
///
/// Builds outside a git checkout report the commit as `unknown`.
#[must_use]
pub fn build_version() -> String {
    describe(
        env!("CARGO_PKG_VERSION"),
        option_env!("VERGEN_GIT_SHA"),
    )
}

fn describe(pkg_version: &str, sha: Option<&str>) -> String {
    let commit = sha.map_or("unknown", |sha| {
        sha.get(..SHORT_HASH_LEN).unwrap_or(sha)
    });
    format!("{pkg_version} ({commit})")
}
