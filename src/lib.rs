pub mod api;
pub mod assembler;
pub mod config;
pub mod corpus;
pub mod error;
pub mod sentiment;
pub mod sheets;
pub mod text;

pub use assembler::ReviewRecord;
pub use config::Config;
pub use error::ApiError;
pub use sentiment::{Sentiment, SentimentLabel};
pub use sheets::SinkOutcome;
