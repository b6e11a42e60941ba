//! Product catalog endpoints.

use std::fmt::Display;

use crate::clients::ApiRequestError;
use crate::PrintfulClient;

impl PrintfulClient {
    /// Returns the list of all catalog products.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn product_list(&mut self) -> Result<serde_json::Value, ApiRequestError> {
        self.get("products", None)
    }

    /// Returns information about a catalog variant.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn variant_info(&mut self, id: impl Display) -> Result<serde_json::Value, ApiRequestError> {
        self.get(&format!("products/variant/{id}"), None)
    }

    /// Returns a catalog product together with its variant list.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn product_info(&mut self, id: impl Display) -> Result<serde_json::Value, ApiRequestError> {
        self.get(&format!("products/{id}"), None)
    }
}
