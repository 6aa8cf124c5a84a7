// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Backend authentication method.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(tag = "type")]
pub enum AuthMethod {
    /// No authentication.
    #[serde(rename = "none")]
    #[default]
    None,
    /// Basic authentication (username/password).
    #[serde(rename = "basic")]
    Basic {
        /// Username for authentication.
        username: String,
        /// Password for authentication.
        password: String,
    },
    /// Bearer token authentication.
    #[serde(rename = "bearer")]
    Bearer {
        /// Bearer token.
        token: String,
    },
}

/// The backend services, each of which may live behind its own base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// `/api/events`
    Events,
    /// `/api/users`
    Users,
    /// `/api/comments`
    Comments,
}

impl Service {
    /// The path prefix of the service.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Events => "/api/events",
            Self::Users => "/api/users",
            Self::Comments => "/api/comments",
        }
    }
}

/// Backend configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ApiConfig {
    /// Base URL shared by every service, e.g. `http://localhost:8080`.
    pub base_url: String,
    /// Base URL override for the events service.
    #[serde(default)]
    pub events_url: Option<String>,
    /// Base URL override for the users service.
    #[serde(default)]
    pub users_url: Option<String>,
    /// Base URL override for the comments service.
    #[serde(default)]
    pub comments_url: Option<String>,
    /// Authentication method.
    #[serde(default)]
    pub auth: AuthMethod,
    /// Request timeout in seconds. Transport defaults apply when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    concat!("eventhub-api/", env!("CARGO_PKG_VERSION")).to_string()
}

impl ApiConfig {
    /// Creates a configuration pointing every service at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Base URL serving the given service, without a trailing slash.
    #[must_use]
    pub fn service_url(&self, service: Service) -> &str {
        let url = match service {
            Service::Events => self.events_url.as_deref(),
            Service::Users => self.users_url.as_deref(),
            Service::Comments => self.comments_url.as_deref(),
        };
        url.unwrap_or(&self.base_url).trim_end_matches('/')
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            events_url: None,
            users_url: None,
            comments_url: None,
            auth: AuthMethod::default(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}
