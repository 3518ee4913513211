use log::debug;

use crate::BOT_MENTION;
use crate::Command;
use crate::DELIMITER;
use crate::error::ArgKind;
use crate::error::OperandError;

/// Fixed-length list of operands parsed for one command.
///
/// Every slot is either a trimmed, non-empty value or `None` when the field
/// was blank or not supplied at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Operands(Vec<Option<String>>);

impl Operands {
	/// Operand at `idx`, `None` when absent or out of range
	pub fn get(&self, idx: usize) -> Option<&str> {
		self.0.get(idx).and_then(|v| v.as_deref())
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = Option<&str>> {
		self.0.iter().map(|v| v.as_deref())
	}

	pub fn as_slice(&self) -> &[Option<String>] {
		&self.0
	}

	pub fn into_vec(self) -> Vec<Option<String>> {
		self.0
	}
}

impl From<Operands> for Vec<Option<String>> {
	fn from(value: Operands) -> Self {
		value.0
	}
}

impl IntoIterator for Operands {
	type Item = Option<String>;
	type IntoIter = std::vec::IntoIter<Option<String>>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

/// Erase every occurrence of each token from `message`.
///
/// Empty tokens are skipped.
pub fn strip_tokens<S: AsRef<str>>(message: &str, tokens: &[S]) -> String {
	tokens
		.iter()
		.map(AsRef::as_ref)
		.filter(|token| !token.is_empty())
		.fold(message.to_string(), |acc, token| acc.replace(token, ""))
}

/// Splits raw message text into the operands a command expects.
#[derive(Debug, Clone)]
pub struct OperandParser {
	ignorable: Vec<String>,
}

impl Default for OperandParser {
	fn default() -> Self {
		Self::new([BOT_MENTION])
	}
}

impl OperandParser {
	/// Create a parser that erases `ignorable` tokens (e.g. the bot mention)
	/// before splitting
	pub fn new<I, S>(ignorable: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			ignorable: ignorable.into_iter().map(Into::into).collect(),
		}
	}

	pub fn ignorable(&self) -> &[String] {
		&self.ignorable
	}

	/// Remove the command token and ignorable tokens, then trim
	pub fn normalize(&self, command: &Command, message: &str) -> String {
		let without_cmd = strip_tokens(message, &[command.token()]);
		strip_tokens(&without_cmd, self.ignorable.as_slice()).trim().to_string()
	}

	/// Extract operands for `command` from `message`.
	///
	/// The result always holds exactly `command.max_operands()` slots. Blank
	/// fields keep their position as `None`, missing trailing fields are
	/// padded with `None`.
	///
	/// # Errors
	///
	/// - [`OperandError::IllegalArgument`] when no command is given
	/// - [`OperandError::TooManyArguments`] when the message splits into more
	///   fields than the command accepts, blank or not
	pub fn parse(&self, command: Option<&Command>, message: &str) -> Result<Operands, OperandError> {
		let command = command.ok_or_else(|| OperandError::illegal(ArgKind::Missing))?;

		let normalized = self.normalize(command, message);
		// Splitting an empty string still yields a single empty field
		let fields: Vec<&str> = normalized.split(DELIMITER).collect();

		let max = command.max_operands();
		if fields.len() > max {
			return Err(OperandError::TooManyArguments {
				max,
				given: fields.len(),
			});
		}

		let mut operands: Vec<Option<String>> = fields
			.into_iter()
			.map(str::trim)
			.map(|field| (!field.is_empty()).then(|| field.to_string()))
			.collect();
		operands.resize(max, None);

		debug!(
			"Parsed operands for '{}': {:?}",
			command.name(),
			operands
		);
		Ok(Operands(operands))
	}
}

/// Extract operands with the default parser (bot mention ignored).
pub fn extract(command: Option<&Command>, message: &str) -> Result<Operands, OperandError> {
	OperandParser::default().parse(command, message)
}
