//! Execute handlers for the escrow contract.
//!
//! - `order` - create, cancel and remote execution of orders
//! - `admin` - router and fee configuration

mod admin;
mod order;

pub use admin::*;
pub use order::*;
