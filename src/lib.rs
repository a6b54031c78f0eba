//! Storefront
//!
//! Client-side state slices for an e-commerce frontend: authentication
//! session and product catalog, each a pure reducer over a typed action
//! vocabulary, composed in an explicit [`store::Store`].

pub mod auth;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod replay;
pub mod slice;
pub mod store;
