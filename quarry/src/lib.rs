//! Quarry - search, history, and saved-search engine for knowledge records
//!
//! The engine is synchronous and single-threaded: a corpus of records is
//! loaded once per session, queries match and rank in memory, and the
//! history ledger / saved-search registry persist through an injected
//! key-value port (SQLite and in-memory backends provided).

pub mod history;
pub mod interface;
pub mod matcher;
pub mod models;
pub mod ranking;
pub mod saved;
pub mod session;
pub mod storage;

pub use interface::*;
pub use session::SearchSession;
