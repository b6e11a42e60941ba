//! Endpoint methods of the Printful API.
//!
//! Each submodule adds methods to [`PrintfulClient`](crate::PrintfulClient)
//! for one group of vendor resources. Every method picks an HTTP verb and a
//! path, then delegates to [`PrintfulClient::request`](crate::PrintfulClient::request),
//! so all of them return the `result` payload of the response envelope.
//!
//! | Module        | Paths                                        |
//! |---------------|----------------------------------------------|
//! | [`products`]  | `products`, `products/{id}`, `products/variant/{id}` |
//! | [`orders`]    | `orders`, `orders/{id}`, `orders/{id}/confirm` |
//! | [`files`]     | `files`, `files/{id}`                        |
//! | [`shipping`]  | `shipping/rates`                             |
//! | [`sync`]      | `sync/products`, `sync/products/{id}`, `sync/variant/{id}` |
//! | [`countries`] | `countries`                                  |
//! | [`tax`]       | `tax/rates`                                  |
//! | [`webhooks`]  | `webhooks`                                   |
//! | [`store`]     | `store`, `store/packing-slip`                |
//!
//! # Identifiers
//!
//! Identifiers are formatted into the path as-is, without escaping. Callers
//! must pass URL-safe values: numeric ids, or external ids prefixed with `@`
//! that contain no reserved characters.

pub mod countries;
pub mod files;
pub mod orders;
pub mod products;
pub mod shipping;
pub mod store;
pub mod sync;
pub mod tax;
pub mod webhooks;
