//! 거래소별 REST 커넥터.

pub mod bybit;

pub use bybit::{BybitClient, BybitConfig};
