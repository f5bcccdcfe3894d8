use std::env;

#[derive(Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    /// Fixed artificial delay applied to the mock catalog fetch and the mock
    /// booking submission.
    pub simulated_latency_ms: u64,
    /// Optional; without a key clients fall back to the map placeholder.
    pub map_tiles_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "nomad-navigator-demo-secret".to_string()),
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .expect("JWT_EXPIRATION_HOURS must be a number"),
            simulated_latency_ms: env::var("SIMULATED_LATENCY_MS")
                .unwrap_or_else(|_| "500".to_string())
                .parse()
                .expect("SIMULATED_LATENCY_MS must be a number"),
            map_tiles_api_key: env::var("MAP_TILES_API_KEY").ok(),
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
