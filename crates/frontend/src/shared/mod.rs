pub mod api_utils;
pub mod fetch_guard;
