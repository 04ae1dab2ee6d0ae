mod settings;

pub use settings::{
    AiGatewaySettings, Environment, IdentitySettings, LoggingSettings, ServerSettings, Settings,
    SettingsError,
};
