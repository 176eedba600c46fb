pub mod candle;
pub mod prompt;
pub mod respond;
