// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! REST client for the events, users and comments services.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::config::{ApiConfig, Service};
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::types::{Comment, Event, EventCategory, EventDraft, Rsvp, RsvpStatus, User, UserPatch};

/// Client for the `EventHub` backend.
///
/// # Example
///
/// ```ignore
/// use eventhub_api::{ApiConfig, EventHubClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = EventHubClient::new(ApiConfig::new("http://localhost:8080"))?;
/// let events = client.upcoming_events().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EventHubClient {
    http: Arc<HttpClient>,
}

impl EventHubClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = HttpClient::new(config)?;
        Ok(Self {
            http: Arc::new(http),
        })
    }

    /// Lists every event.
    pub async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        self.get_json(Service::Events, "").await
    }

    /// Lists events that have not started yet.
    pub async fn upcoming_events(&self) -> Result<Vec<Event>, ApiError> {
        self.get_json(Service::Events, "/upcoming").await
    }

    /// Lists events of a category.
    pub async fn events_by_category(
        &self,
        category: EventCategory,
    ) -> Result<Vec<Event>, ApiError> {
        self.get_json(Service::Events, &format!("/category/{category}"))
            .await
    }

    /// Full-text search over events.
    pub async fn search_events(&self, keyword: &str) -> Result<Vec<Event>, ApiError> {
        let url = self.http.url(Service::Events, "/search");
        let req = self
            .http
            .build_request(Method::GET, &url)
            .query(&[("keyword", keyword)]);
        Self::decode(self.http.execute(req).await?).await
    }

    /// Gets a single event.
    pub async fn get_event(&self, id: i64) -> Result<Event, ApiError> {
        self.get_json(Service::Events, &format!("/{id}")).await
    }

    /// Creates an event organized by `organizer_id`.
    pub async fn create_event(
        &self,
        draft: &EventDraft,
        organizer_id: i64,
    ) -> Result<Event, ApiError> {
        let url = self.http.url(Service::Events, "");
        let req = self
            .http
            .build_request(Method::POST, &url)
            .query(&[("organizerId", organizer_id)])
            .json(draft);
        Self::decode(self.http.execute(req).await?).await
    }

    /// Replaces the fields of an event.
    pub async fn update_event(&self, id: i64, draft: &EventDraft) -> Result<Event, ApiError> {
        let url = self.http.url(Service::Events, &format!("/{id}"));
        let req = self.http.build_request(Method::PUT, &url).json(draft);
        Self::decode(self.http.execute(req).await?).await
    }

    /// Deletes an event.
    pub async fn delete_event(&self, id: i64) -> Result<(), ApiError> {
        let url = self.http.url(Service::Events, &format!("/{id}"));
        let _ = self
            .http
            .execute(self.http.build_request(Method::DELETE, &url))
            .await?;
        Ok(())
    }

    /// Records a user's response to an event. The response body is ignored.
    pub async fn rsvp(
        &self,
        event_id: i64,
        user_id: i64,
        status: RsvpStatus,
    ) -> Result<(), ApiError> {
        let url = self.http.url(Service::Events, &format!("/{event_id}/rsvp"));
        let req = self
            .http
            .build_request(Method::POST, &url)
            .query(&[("userId", user_id.to_string()), ("status", status.to_string())]);
        let _ = self.http.execute(req).await?;
        Ok(())
    }

    /// Lists every RSVP of an event, including `NOT_GOING` ones.
    pub async fn participants(&self, event_id: i64) -> Result<Vec<Rsvp>, ApiError> {
        self.get_json(Service::Events, &format!("/{event_id}/participants"))
            .await
    }

    /// Gets a user.
    pub async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        self.get_json(Service::Users, &format!("/{id}")).await
    }

    /// Lists events organized by a user.
    pub async fn user_events(&self, user_id: i64) -> Result<Vec<Event>, ApiError> {
        self.get_json(Service::Users, &format!("/{user_id}/events"))
            .await
    }

    /// Lists every RSVP of a user, including `NOT_GOING` ones.
    pub async fn user_rsvps(&self, user_id: i64) -> Result<Vec<Rsvp>, ApiError> {
        self.get_json(Service::Users, &format!("/{user_id}/rsvps"))
            .await
    }

    /// Updates a user profile.
    pub async fn update_user(&self, user_id: i64, patch: &UserPatch) -> Result<User, ApiError> {
        let url = self.http.url(Service::Users, &format!("/{user_id}"));
        let req = self.http.build_request(Method::PUT, &url).json(patch);
        Self::decode(self.http.execute(req).await?).await
    }

    /// Changes a user's password.
    pub async fn change_password(
        &self,
        user_id: i64,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let url = self
            .http
            .url(Service::Users, &format!("/{user_id}/change-password"));
        let body = serde_json::json!({
            "oldPassword": old_password,
            "newPassword": new_password,
        });
        let req = self.http.build_request(Method::POST, &url).json(&body);
        let _ = self.http.execute(req).await?;
        Ok(())
    }

    /// Lists the comments of an event.
    pub async fn comments(&self, event_id: i64) -> Result<Vec<Comment>, ApiError> {
        self.get_json(Service::Comments, &format!("/event/{event_id}"))
            .await
    }

    /// Posts a comment on behalf of a user.
    pub async fn create_comment(
        &self,
        event_id: i64,
        user_id: i64,
        content: &str,
    ) -> Result<Comment, ApiError> {
        let url = self.http.url(Service::Comments, "");
        let req = self
            .http
            .build_request(Method::POST, &url)
            .query(&[("eventId", event_id), ("userId", user_id)])
            .json(&serde_json::json!({ "content": content }));
        Self::decode(self.http.execute(req).await?).await
    }

    /// Deletes a comment on behalf of a user.
    pub async fn delete_comment(&self, comment_id: i64, user_id: i64) -> Result<(), ApiError> {
        let url = self.http.url(Service::Comments, &format!("/{comment_id}"));
        let req = self
            .http
            .build_request(Method::DELETE, &url)
            .query(&[("userId", user_id)]);
        let _ = self.http.execute(req).await?;
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        service: Service,
        path: &str,
    ) -> Result<T, ApiError> {
        let url = self.http.url(service, path);
        tracing::debug!(%url, "GET");
        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, &url))
            .await?;
        Self::decode(resp).await
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        let text = resp.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            tracing::warn!(error = %e, "failed to decode response body");
            ApiError::Decode(e.to_string())
        })
    }
}
