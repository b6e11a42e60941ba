//! Sync product endpoints, for products synced from an e-commerce platform.

use std::collections::HashMap;
use std::fmt::Display;

use crate::clients::ApiRequestError;
use crate::PrintfulClient;

impl PrintfulClient {
    /// Returns the list of sync products.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn sync_product_list(
        &mut self,
        query: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, ApiRequestError> {
        self.get("sync/products", query)
    }

    /// Returns a sync product with its sync variants.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn sync_product_info(
        &mut self,
        id: impl Display,
    ) -> Result<serde_json::Value, ApiRequestError> {
        self.get(&format!("sync/products/{id}"), None)
    }

    /// Unlinks all synced variants of a sync product.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn unlink_sync_product(
        &mut self,
        id: impl Display,
    ) -> Result<serde_json::Value, ApiRequestError> {
        self.delete(&format!("sync/products/{id}"), None)
    }

    /// Returns a sync variant.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn sync_variant_info(
        &mut self,
        id: impl Display,
    ) -> Result<serde_json::Value, ApiRequestError> {
        self.get(&format!("sync/variant/{id}"), None)
    }
}
