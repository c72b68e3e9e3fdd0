pub mod chat;
pub mod endpoints;
pub mod payment;
pub mod service;
pub mod suggestion;
pub mod trip;

#[cfg(feature = "client")]
pub mod client;
