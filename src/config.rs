use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub storage_root: PathBuf,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            storage_root: std::env::var("STORAGE_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/data/images")),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(32 * 1024 * 1024),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.listen_addr.is_empty() {
            return Err("LISTEN_ADDR cannot be empty".to_string());
        }

        if self.storage_root.as_os_str().is_empty() {
            return Err("STORAGE_ROOT cannot be empty".to_string());
        }

        if self.max_upload_bytes == 0 {
            return Err("MAX_UPLOAD_BYTES must be positive".to_string());
        }

        Ok(())
    }
}
