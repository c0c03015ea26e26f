pub mod assertions;
pub mod config;
pub mod logger;
pub mod requester;
pub mod schema;
pub mod suite;
