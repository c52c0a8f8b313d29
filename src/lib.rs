//! KryptoN Signals - trading signal feed pipeline
//!
//! This library fetches a delimited signal feed on a timer, parses it into
//! typed records, and holds the current set in memory with derived display
//! views for consumers.

pub mod config;
pub mod error;
pub mod feed;
pub mod services;
pub mod session;
pub mod signals;

// Re-export commonly used types
pub use config::{AppConfig, FeedConfig};
pub use error::{RowError, SignalError};
pub use feed::client::{HttpFeed, SignalFeed};
pub use feed::parser::parse_feed;
pub use services::refresh::RefreshService;
pub use session::Session;
pub use signals::record::{Direction, SignalRecord};
pub use signals::repository::SignalRepository;
