use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ServiceKind {
    Calculator,
    Matrix,
}

impl ServiceKind {
    pub fn default_port(self) -> u16 {
        match self {
            Self::Calculator => 5000,
            Self::Matrix => 5001,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Attach permissive CORS headers and answer preflight requests
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: ServiceKind::Calculator.default_port(),
            cors: true,
        }
    }
}

impl ServerConfig {
    pub fn for_service(kind: ServiceKind) -> Self {
        Self {
            port: kind.default_port(),
            ..Default::default()
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_cors(mut self, cors: bool) -> Self {
        self.cors = cors;
        self
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
