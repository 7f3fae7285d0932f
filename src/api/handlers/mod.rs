//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod encode;
pub mod links;
pub mod redirect;
pub mod status;

pub use encode::encode_handler;
pub use links::{delete_link_handler, list_links_handler};
pub use redirect::redirect_handler;
pub use status::{greeting_handler, metrics_handler};
