//! Compile-time build metadata exposed to the CLI.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("LINKBOARD_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("LINKBOARD_BUILD_TIMESTAMP");

/// Block printed by `linkboard --version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("LINKBOARD_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("LINKBOARD_BUILD_TIMESTAMP")
);
