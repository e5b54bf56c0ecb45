pub mod client;
pub mod ddragon_client;
pub mod handlers;
pub mod models;
pub mod routes;
