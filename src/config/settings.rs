use log::warn;

pub const API_URL_ENV: &str = "ELO_API_URL";
pub const API_TIMEOUT_ENV: &str = "ELO_API_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct RemoteSettings {
    pub base_url: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            user_agent: "EloBoard/1.0",
            timeout_secs: 105,
        }
    }
}

impl RemoteSettings {
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

#[derive(Debug, Clone)]
pub struct BoardSettings {
    pub page_size: usize,
    pub admin_page_size: usize,
    pub highlight_top: usize,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            page_size: 20,
            admin_page_size: 10,
            highlight_top: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub remote: RemoteSettings,
    pub board: BoardSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            remote: RemoteSettings::default(),
            board: BoardSettings::default(),
        }
    }

    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(url) = lookup(API_URL_ENV).filter(|u| !u.trim().is_empty()) {
            config.remote = config.remote.with_base_url(url.trim());
        }

        if let Some(raw) = lookup(API_TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.remote = config.remote.with_timeout_secs(secs),
                _ => warn!("Ignoring invalid {}: {:?}", API_TIMEOUT_ENV, raw),
            }
        }

        config
    }
}
