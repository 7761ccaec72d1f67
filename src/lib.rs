//! Product recommendation client and the small backend it talks to.
//!
//! The [`ui`] module holds the client: a controller that loads the catalog,
//! submits free-text preferences and tracks what to render. [`client`] is the
//! HTTP side of that. [`api`] and [`services`] implement the service itself.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
pub mod ui;
