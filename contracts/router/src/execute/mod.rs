//! Execute handlers for the router contract.
//!
//! - `messaging` - outgoing sends and incoming deliveries
//! - `admin` - peers, delegate and escrow configuration

mod admin;
mod messaging;

pub use admin::*;
pub use messaging::*;
