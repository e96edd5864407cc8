//! API client module

pub mod client;
pub mod edgegrid;
pub mod error;
pub mod models;

pub use client::GtmClient;
