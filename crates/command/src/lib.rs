//! Command layer for todobot.
//!
//! Holds the static command catalogue, turns raw chat messages into a
//! fixed-length list of operands, and reports failures back to the user
//! with usage help.
//!
//! # Example
//!
//! ```
//! use command::Command;
//! use command::extract;
//!
//! let money = Command::money();
//! let operands = extract(Some(&money), "/money@DnJTodoBot 100; ; 02-15").unwrap();
//! assert_eq!(operands.get(0), Some("100"));
//! assert_eq!(operands.get(1), None);
//! assert_eq!(operands.get(2), Some("02-15"));
//! ```

mod command;
pub mod error;
mod operands;
mod report;
mod table;

pub use command::BOT_MENTION;
pub use command::Command;
pub use command::DELIMITER;
pub use error::ArgKind;
pub use error::CommandError;
pub use error::OperandError;
pub use error::TransportError;
pub use operands::OperandParser;
pub use operands::Operands;
pub use operands::extract;
pub use operands::strip_tokens;
pub use report::ChatId;
pub use report::ErrorReporter;
pub use report::GENERIC_FAILURE;
pub use report::Messenger;
pub use report::compose;
pub use table::CommandTable;
