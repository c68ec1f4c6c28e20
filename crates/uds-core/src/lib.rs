//! UDS Core - Fundamental types and primitives
//!
//! This crate defines the core types shared by the UDS data-frame layers:
//! - Addressing (MacAddress, NodeId)
//! - Network identity (NetworkInfo)
//! - Error types

pub mod error;
pub mod id;
pub mod network;

pub use error::*;
pub use id::*;
pub use network::*;
