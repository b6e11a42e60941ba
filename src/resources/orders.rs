//! Order endpoints.
//!
//! Orders are created as drafts and must be confirmed before Printful
//! fulfills them.
//!
//! # Example
//!
//! ```rust,ignore
//! use printful_api::PrintfulClient;
//! use serde_json::json;
//!
//! let mut client = PrintfulClient::new("abc:def", true)?;
//!
//! let order = client.create_order(json!({
//!     "recipient": {"name": "Jane Doe", "address1": "19749 Dearborn St", "country_code": "US"},
//!     "items": [{"variant_id": 1, "quantity": 1}]
//! }))?;
//!
//! client.confirm_order(&order["id"])?;
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use crate::clients::ApiRequestError;
use crate::PrintfulClient;

impl PrintfulClient {
    /// Returns the order list.
    ///
    /// `query` may carry `status`, `offset` and `limit`. The total number of
    /// orders is available afterwards through [`PrintfulClient::item_count`].
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn order_list(
        &mut self,
        query: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, ApiRequestError> {
        self.get("orders", query)
    }

    /// Creates a new order.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn create_order(
        &mut self,
        data: impl Into<serde_json::Value>,
    ) -> Result<serde_json::Value, ApiRequestError> {
        self.post("orders", Some(data.into()), None)
    }

    /// Returns order data.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn order_info(&mut self, id: impl Display) -> Result<serde_json::Value, ApiRequestError> {
        self.get(&format!("orders/{id}"), None)
    }

    /// Cancels an order.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn cancel_order(&mut self, id: impl Display) -> Result<serde_json::Value, ApiRequestError> {
        self.delete(&format!("orders/{id}"), None)
    }

    /// Updates order data.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn update_order(
        &mut self,
        id: impl Display,
        data: impl Into<serde_json::Value>,
    ) -> Result<serde_json::Value, ApiRequestError> {
        self.put(&format!("orders/{id}"), Some(data.into()), None)
    }

    /// Confirms a draft order for fulfillment.
    ///
    /// # Errors
    ///
    /// See [`PrintfulClient::request`].
    pub fn confirm_order(&mut self, id: impl Display) -> Result<serde_json::Value, ApiRequestError> {
        self.post(&format!("orders/{id}/confirm"), None, None)
    }
}
