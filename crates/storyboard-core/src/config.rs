//! Upload configuration

/// Extensions offered by the file dialog filter
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "svg", "ico", "avif",
];

/// Default per-file limit: 25 MiB
pub const DEFAULT_MAX_BYTES: u64 = 25 * 1024 * 1024;

/// Limits and filters applied when reading selected files.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadConfig {
    /// Files larger than this are rejected before being encoded
    pub max_bytes: Option<u64>,
    /// Extensions passed to the native dialog filter
    pub extensions: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_bytes: Some(DEFAULT_MAX_BYTES),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl UploadConfig {
    /// Remove the size limit
    pub fn unlimited(mut self) -> Self {
        self.max_bytes = None;
        self
    }

    /// Set the size limit in bytes
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = Some(max_bytes);
        self
    }

    /// Whether a file of `size` bytes passes the limit
    pub fn allows_size(&self, size: u64) -> bool {
        self.max_bytes.map_or(true, |limit| size <= limit)
    }

    /// Extensions as string slices, the shape `rfd` filters want
    pub fn extension_refs(&self) -> Vec<&str> {
        self.extensions.iter().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_allows_common_sizes() {
        let config = UploadConfig::default();
        assert!(config.allows_size(1024));
        assert!(config.allows_size(DEFAULT_MAX_BYTES));
        assert!(!config.allows_size(DEFAULT_MAX_BYTES + 1));
    }

    #[test]
    fn unlimited_allows_anything() {
        let config = UploadConfig::default().unlimited();
        assert!(config.allows_size(u64::MAX));
    }

    #[test]
    fn extension_refs_match_defaults() {
        let config = UploadConfig::default();
        assert_eq!(config.extension_refs(), DEFAULT_EXTENSIONS.to_vec());
    }
}
