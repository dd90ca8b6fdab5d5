//! Raw payloads of the upstream endpoints, decoded leniently.

pub mod percentages;
pub mod schema;
pub mod store_search;
