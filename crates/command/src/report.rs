use std::error::Error;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use log::error;
use serde::Deserialize;
use serde::Serialize;

use crate::Command;
use crate::error::TransportError;

/// Body sent when no command is known for the failing update.
pub const GENERIC_FAILURE: &str = "An error occurred";

/// Identifier of the chat an update came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(pub i64);

impl fmt::Display for ChatId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Outbound side of the chat transport.
#[async_trait]
pub trait Messenger: Send + Sync {
	async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<(), TransportError>;
}

#[async_trait]
impl<T: Messenger + ?Sized> Messenger for Arc<T> {
	async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<(), TransportError> {
		(**self).send_message(chat_id, text).await
	}
}

/// Build the help text for a failed command.
///
/// With a command the body is the custom message followed by the usage
/// format and the example, one per line. Without one it is
/// [`GENERIC_FAILURE`]. A failure, when given, is appended as the last line.
pub fn compose(
	command: Option<&Command>,
	custom_msg: &str,
	failure: Option<&(dyn Error + Send + Sync)>,
) -> String {
	let mut msg = match command {
		None => GENERIC_FAILURE.to_string(),
		Some(cmd) => format!("{}\n{}\n{}", custom_msg, cmd.format(), cmd.example()),
	};
	if let Some(failure) = failure {
		msg.push('\n');
		msg.push_str(&failure.to_string());
	}
	msg
}

/// Turns failures into help messages and delivers them to the user.
pub struct ErrorReporter<M> {
	messenger: M,
}

impl<M: Messenger> ErrorReporter<M> {
	pub fn new(messenger: M) -> Self {
		Self { messenger }
	}

	pub fn messenger(&self) -> &M {
		&self.messenger
	}

	pub fn into_messenger(self) -> M {
		self.messenger
	}

	/// Send one help message to `chat_id`.
	///
	/// The failure, if any, is logged at error level. Delivery errors are
	/// logged and swallowed.
	pub async fn report(
		&self,
		chat_id: ChatId,
		command: Option<&Command>,
		custom_msg: &str,
		failure: Option<&(dyn Error + Send + Sync)>,
	) {
		if let Some(failure) = failure {
			error!("{}", failure);
		}
		let msg = compose(command, custom_msg, failure);

		if let Err(e) = self.messenger.send_message(chat_id, &msg).await {
			error!("Failed to deliver error report to chat {}: {}", chat_id, e);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::OperandError;

	#[test]
	fn test_compose_without_command() {
		assert_eq!(compose(None, "ignored", None), GENERIC_FAILURE);
	}

	#[test]
	fn test_compose_with_command() {
		let money = Command::money();
		assert_eq!(
			compose(Some(&money), "Bad amount", None),
			"Bad amount\n/money сумма [; цель; дата]\n/money 100; котята; 02-23"
		);
	}

	#[test]
	fn test_compose_empty_custom_message_keeps_line() {
		let diary = Command::diary();
		assert_eq!(
			compose(Some(&diary), "", None),
			"\n/diary text\n/diary what a great day today!"
		);
	}

	#[test]
	fn test_compose_appends_failure() {
		let err = OperandError::TooManyArguments { max: 1, given: 2 };
		assert_eq!(
			compose(None, "", Some(&err)),
			"An error occurred\nToo many arguments"
		);
	}
}
