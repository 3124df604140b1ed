//! reckon-kernel: the core of the reckon calculator.
//!
//! This crate provides:
//!
//! - **Engine**: pure arithmetic over `f64`, rounded to a fixed precision,
//!   with a static operator dispatch table
//! - **Format**: number rendering for results and prompts
//! - **Session**: the interactive state machine, fed one input line at a time
//!
//! Nothing here touches the terminal. Front-ends (see `reckon-repl`) own
//! line editing and output, and drive a [`Session`] with the lines they read.

pub mod engine;
pub mod error;
pub mod format;
pub mod session;

pub use engine::{Operator, Outcome, MAX_DECIMAL_PLACES};
pub use error::{DomainError, UnknownChoice, UnknownOperator};
pub use format::format_number;
pub use session::{Choice, Output, Phase, Session, FAREWELL};
