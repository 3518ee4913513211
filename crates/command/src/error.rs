//! Error types for the command layer.

use std::fmt;

use thiserror::Error;

/// Kind of value handed to the extractor in place of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgKind {
	/// A registered command definition
	Command,
	/// Nothing was supplied
	Missing,
	/// A command name that is not part of the catalogue
	Unregistered(String),
}

impl fmt::Display for ArgKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ArgKind::Command => write!(f, "command"),
			ArgKind::Missing => write!(f, "none"),
			ArgKind::Unregistered(name) => write!(f, "unregistered command '{}'", name),
		}
	}
}

/// Errors raised while extracting operands from a message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperandError {
	/// The command argument was not a usable command definition
	#[error("Illegal argument types: expected '{expected}', actual '{actual}'")]
	IllegalArgument { expected: ArgKind, actual: ArgKind },

	/// The message carries more fields than the command accepts
	#[error("Too many arguments")]
	TooManyArguments { max: usize, given: usize },
}

impl OperandError {
	pub(crate) fn illegal(actual: ArgKind) -> Self {
		OperandError::IllegalArgument {
			expected: ArgKind::Command,
			actual,
		}
	}
}

/// Errors raised while building a command catalogue.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
	#[error("Command name is empty")]
	EmptyName,

	#[error("Invalid command name '{0}'")]
	InvalidName(String),

	#[error("Duplicate command name '{0}'")]
	DuplicateName(String),
}

/// Errors reported by a [`Messenger`](crate::Messenger) implementation.
#[derive(Error, Debug)]
pub enum TransportError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Transport closed")]
	Closed,
}
