pub mod settings;

pub use settings::{AppConfig, BoardSettings, RemoteSettings};
