//! Sales tax endpoints.

use crate::clients::ApiRequestError;
use crate::PrintfulClient;

impl PrintfulClient {
    /// Returns the list of states that require sales tax calculation.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn tax_country_list(&mut self) -> Result<serde_json::Value, ApiRequestError> {
        self.get("tax/rates", None)
    }

    /// Calculates the tax rate for a recipient address.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn calculate_tax_rate(
        &mut self,
        data: impl Into<serde_json::Value>,
    ) -> Result<serde_json::Value, ApiRequestError> {
        self.post("tax/rates", Some(data.into()), None)
    }
}
