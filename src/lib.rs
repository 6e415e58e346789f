pub mod config;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod merge;
pub mod table;
