use staffdesk_config::{CorsConfig, JwtConfig};

#[derive(Clone, Debug)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

pub fn init_app_state() -> AppState {
    AppState {
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    }
}
