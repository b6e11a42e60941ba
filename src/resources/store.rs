//! Store settings endpoints.

use crate::clients::ApiRequestError;
use crate::PrintfulClient;

impl PrintfulClient {
    /// Returns store info.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn store_info(&mut self) -> Result<serde_json::Value, ApiRequestError> {
        self.get("store", None)
    }

    /// Changes the store packing slip.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn update_packing_slip(
        &mut self,
        data: impl Into<serde_json::Value>,
    ) -> Result<serde_json::Value, ApiRequestError> {
        self.post("store/packing-slip", Some(data.into()), None)
    }
}
