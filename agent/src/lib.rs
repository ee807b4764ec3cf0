#![warn(clippy::pedantic)]
#![allow(
    clippy::missing_panics_doc,
    clippy::similar_names,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation
)]

pub mod agent;
pub mod board;
pub mod connect;
pub mod eval;
pub mod movegen;
pub mod path;
pub mod search;

pub use agent::{Agent, ProtocolError};
pub use board::Board;
pub use eval::Score;
