//! API client for the Okta organization

mod client;
mod groups;
mod users;

pub use client::ApiClient;
