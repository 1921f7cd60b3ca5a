// Interface adapters: HTTP surface, auth gate and outbound clients.

pub mod auth;
pub mod body;
pub mod clients;
pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
