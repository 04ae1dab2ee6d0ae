/// Configuration for tracing initialization, built from `Settings` at startup.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
}
