pub mod chat;
pub mod payments;
pub mod suggestions;
pub mod system;
pub mod trips;
