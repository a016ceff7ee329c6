pub mod env {
    /// Prefix of every environment variable read by [`Settings`](super::Settings).
    ///
    /// Nested keys use a double underscore, e.g. `KEYSTONE__AUTH__JWT_SECRET`.
    pub const ENV_PREFIX: &str = "KEYSTONE";
    pub const ENV_SEPARATOR: &str = "__";
}

pub mod files {
    pub const BASE_CONFIG: &str = "config/base";
    pub const LOCAL_CONFIG: &str = "config/local";
}

pub mod defaults {
    pub const HOST: &str = "0.0.0.0";
    pub const PORT: u16 = 3000;
    pub const TOKEN_TTL_SECONDS: i64 = 600;
    pub const AUTH_TIMEOUT_MILLIS: u64 = 5_000;
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hs256";
}
