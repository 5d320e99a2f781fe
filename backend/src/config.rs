use shuttle_runtime::SecretStore;
use tracing::info;
use crate::cors::DEFAULT_ALLOWED_ORIGIN;

pub struct ServerConfig {
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { allowed_origin: DEFAULT_ALLOWED_ORIGIN.into() }
    }
}

impl ServerConfig {
    pub fn from_secrets(secrets: &SecretStore) -> Self {
        match secrets.get("ALLOWED_ORIGIN").filter(|origin| !origin.trim().is_empty()) {
            Some(allowed_origin) => {
                info!("CORS origin prefix set to {}", allowed_origin);
                Self { allowed_origin }
            }
            None => Self::default(),
        }
    }
}
