pub mod calc;
pub mod config;
pub mod rounds;
pub mod score;
