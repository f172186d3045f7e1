//! Where the dataset document lives.

pub struct DataSourceConfig {
    /// Path fetched relative to the page origin in the browser build.
    pub web_path: &'static str,
    /// Default for native builds when no `--source` is given.
    pub native_path: &'static str,
}

pub const DATA_SOURCE: DataSourceConfig = DataSourceConfig {
    web_path: "/regulatoryData.json",
    native_path: "regulatoryData.json",
};

impl DataSourceConfig {
    pub const fn default_location(&self) -> &'static str {
        if cfg!(target_arch = "wasm32") {
            self.web_path
        } else {
            self.native_path
        }
    }
}

/// True for locations that must go over HTTP rather than the filesystem.
pub fn is_remote(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
