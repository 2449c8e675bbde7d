pub mod aggregate;
pub mod columns;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod rank;
pub mod record;
pub mod storage;
pub mod table;

pub use error::{Error, Result};
pub use record::Record;
