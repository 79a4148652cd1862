//! Cache-storage host-service adapters.

pub mod cache_api;
