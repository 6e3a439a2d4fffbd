/// Remote endpoint the users page reads from.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub base_url: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl AdminConfig {
    /// Reads `ADMIN_BASE_URL`, falling back to the public default.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_public_api() {
        assert_eq!(
            AdminConfig::default().base_url,
            "https://jsonplaceholder.typicode.com"
        );
    }
}
