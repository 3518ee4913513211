use std::sync::Arc;

use command::ChatId;
use command::Command;
use command::CommandTable;
use command::ErrorReporter;
use command::Messenger;
use command::Operands;
use command::TransportError;
use tokio::io::AsyncBufRead;
use tokio::io::AsyncBufReadExt;
use tracing::debug;
use tracing::info;

/// Placeholder printed for an absent operand
const ABSENT: &str = "-";

const INVALID_ARGUMENTS: &str = "Invalid arguments";

/// Routes incoming lines to commands and answers on one chat.
pub struct Bot<M> {
	table: Arc<CommandTable>,
	reporter: ErrorReporter<M>,
	chat_id: ChatId,
}

impl<M: Messenger> Bot<M> {
	pub fn new(table: Arc<CommandTable>, messenger: M, chat_id: ChatId) -> Self {
		Self {
			table,
			reporter: ErrorReporter::new(messenger),
			chat_id,
		}
	}

	pub fn messenger(&self) -> &M {
		self.reporter.messenger()
	}

	pub fn into_messenger(self) -> M {
		self.reporter.into_messenger()
	}

	/// Handle one incoming message.
	///
	/// Lines that do not start with `/` are ignored. Unknown commands get the
	/// generic failure notice, bad operands get usage help.
	pub async fn handle_line(&self, line: &str) -> Result<(), TransportError> {
		let line = line.trim();
		if !line.starts_with('/') {
			debug!("Ignoring non-command message: {:?}", line);
			return Ok(());
		}

		let Some(cmd) = self.table.resolve(line) else {
			debug!("Unknown command: {:?}", line);
			self.reporter.report(self.chat_id, None, "", None).await;
			return Ok(());
		};

		match self.table.operands(cmd.name(), line) {
			Ok(operands) => {
				debug!(command = %cmd.name(), operands = ?operands, "Executing command");
				self.messenger()
					.send_message(self.chat_id, &summarize(cmd, &operands))
					.await
			}
			Err(e) => {
				self.reporter
					.report(self.chat_id, Some(cmd), INVALID_ARGUMENTS, Some(&e))
					.await;
				Ok(())
			}
		}
	}

	/// Handle lines from `reader` until it is exhausted
	pub async fn run<R>(&self, reader: R) -> Result<(), TransportError>
	where
		R: AsyncBufRead + Unpin,
	{
		let mut lines = reader.lines();
		while let Some(line) = lines.next_line().await? {
			self.handle_line(&line).await?;
		}
		info!("Input closed, shutting down");
		Ok(())
	}
}

/// Render parsed operands as `name: a | - | c`
pub fn summarize(cmd: &Command, operands: &Operands) -> String {
	let fields: Vec<&str> = operands.iter().map(|v| v.unwrap_or(ABSENT)).collect();
	format!("{}: {}", cmd.name(), fields.join(" | "))
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;
	use crate::console::ConsoleMessenger;

	async fn replies(input: &str) -> String {
		let bot = Bot::new(
			Arc::new(CommandTable::new()),
			ConsoleMessenger::new(Vec::new()),
			ChatId(3),
		);
		bot.run(input.as_bytes()).await.unwrap();
		String::from_utf8(bot.into_messenger().into_inner()).unwrap()
	}

	#[rstest]
	#[case("/money@DnJTodoBot 100; ; 02-15", "money: 100 | - | 02-15")]
	#[case("/diary", "diary: -")]
	#[case("/taskdelete 76", "taskdelete: 76")]
	fn test_summarize(#[case] line: &str, #[case] expected: &str) {
		let table = CommandTable::new();
		let cmd = table.resolve(line).unwrap();
		let operands = table.operands(cmd.name(), line).unwrap();
		assert_eq!(summarize(cmd, &operands), expected);
	}

	#[tokio::test]
	async fn test_run_answers_commands() {
		let output = replies("/money 100; котята\n/moneyedit 1; 02-23\n").await;
		assert_eq!(
			output,
			"[3] money: 100 | котята | -\n[3] moneyedit: 1 | 02-23 | - | - | -\n"
		);
	}

	#[tokio::test]
	async fn test_run_ignores_plain_text() {
		assert_eq!(replies("hello there\n\n").await, "");
	}

	#[tokio::test]
	async fn test_unknown_command_gets_generic_notice() {
		assert_eq!(replies("/weather today\n").await, "[3] An error occurred\n");
	}

	#[tokio::test]
	async fn test_bad_operands_get_usage_help() {
		let output = replies("/moneylist 02-23; 02-24\n").await;
		assert_eq!(
			output,
			"[3] Invalid arguments\n/moneylist [дата]\n/moneylist 02-23\nToo many arguments\n"
		);
	}
}
