//! Default configuration constants.

/// Embedded default `linkboard.toml` template written by `linkboard init`.
pub(super) const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("../templates/linkboard.toml");
/// Config file name used for local and global lookup.
pub(super) const CONFIG_FILE_NAME: &str = "linkboard.toml";
/// Directory under the config root holding the global config file.
pub(super) const CONFIG_DIR_NAME: &str = "linkboard";
/// Dashboard endpoint queried when nothing else is configured.
pub(super) const DEFAULT_DASHBOARD_URL: &str = "https://api.example.com/api/v1/dashboardNew";
/// Static bearer token baked into the client. There is no login flow.
pub(super) const DEFAULT_BEARER_TOKEN: &str = "linkboard-demo-static-token";
