//! Webhook configuration endpoints.

use crate::clients::ApiRequestError;
use crate::PrintfulClient;

impl PrintfulClient {
    /// Returns the webhook configuration.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn webhook_info(&mut self) -> Result<serde_json::Value, ApiRequestError> {
        self.get("webhooks", None)
    }

    /// Sets up the webhook configuration (target `url` and event `types`).
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn update_webhooks(
        &mut self,
        data: impl Into<serde_json::Value>,
    ) -> Result<serde_json::Value, ApiRequestError> {
        self.post("webhooks", Some(data.into()), None)
    }

    /// Disables webhook support. The endpoint takes no body.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn disable_webhooks(&mut self) -> Result<serde_json::Value, ApiRequestError> {
        self.delete("webhooks", None)
    }
}
