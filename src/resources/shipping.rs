//! Shipping rate calculation.

use crate::clients::ApiRequestError;
use crate::PrintfulClient;

impl PrintfulClient {
    /// Calculates shipping rates for a recipient and a list of items.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn calculate_shipping_rates(
        &mut self,
        data: impl Into<serde_json::Value>,
    ) -> Result<serde_json::Value, ApiRequestError> {
        self.post("shipping/rates", Some(data.into()), None)
    }
}
