//! Serenity-backed implementation of the platform adapter.
//!
//! [`SerenityGateway`] maps the [`Gateway`](porter_gateway::Gateway) contract
//! onto serenity's HTTP client; [`PorterHandler`] translates serenity gateway
//! events into [`GatewayEvent`](porter_gateway::GatewayEvent)s; [`PorterBot`]
//! owns the client lifecycle.

mod adapter;
mod bot;
mod handler;

pub use adapter::SerenityGateway;
pub use bot::PorterBot;
pub use handler::PorterHandler;
