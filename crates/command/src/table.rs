use std::collections::HashMap;

use crate::Command;
use crate::DELIMITER;
use crate::OperandParser;
use crate::Operands;
use crate::error::ArgKind;
use crate::error::CommandError;
use crate::error::OperandError;

/// Read-only catalogue of the commands the bot understands.
#[derive(Debug, Clone)]
pub struct CommandTable {
	commands: Vec<Command>,
	index: HashMap<String, usize>,
	parser: OperandParser,
}

impl Default for CommandTable {
	fn default() -> Self {
		Self::new()
	}
}

impl CommandTable {
	pub fn new() -> Self {
		// The built-in catalogue is known to be valid
		let commands = Command::builtin();
		let index = commands
			.iter()
			.enumerate()
			.map(|(i, c)| (c.name().to_string(), i))
			.collect();
		Self {
			commands,
			index,
			parser: OperandParser::default(),
		}
	}

	/// Build a table from a custom catalogue.
	///
	/// Names must be non-empty, free of `/`, whitespace and the operand
	/// delimiter, and unique.
	pub fn from_commands(commands: Vec<Command>) -> Result<Self, CommandError> {
		let mut index = HashMap::with_capacity(commands.len());
		for (i, cmd) in commands.iter().enumerate() {
			let name = cmd.name();
			if name.is_empty() {
				return Err(CommandError::EmptyName);
			}
			if name
				.chars()
				.any(|c| c == '/' || c == DELIMITER || c.is_whitespace())
			{
				return Err(CommandError::InvalidName(name.to_string()));
			}
			if index.insert(name.to_string(), i).is_some() {
				return Err(CommandError::DuplicateName(name.to_string()));
			}
		}
		Ok(Self {
			commands,
			index,
			parser: OperandParser::default(),
		})
	}

	/// Replace the parser used by [`CommandTable::operands`]
	pub fn with_parser(mut self, parser: OperandParser) -> Self {
		self.parser = parser;
		self
	}

	pub fn parser(&self) -> &OperandParser {
		&self.parser
	}

	pub fn get(&self, name: &str) -> Option<&Command> {
		self.index.get(name).map(|&i| &self.commands[i])
	}

	pub fn iter(&self) -> impl Iterator<Item = &Command> {
		self.commands.iter()
	}

	pub fn len(&self) -> usize {
		self.commands.len()
	}

	pub fn is_empty(&self) -> bool {
		self.commands.is_empty()
	}

	/// Find the command addressed by the leading `/name` token of a message.
	///
	/// A `@mention` glued to the token is ignored.
	pub fn resolve(&self, message: &str) -> Option<&Command> {
		let token = message.trim_start().split_whitespace().next()?;
		let name = token.strip_prefix('/')?;
		let name = name.split('@').next().unwrap_or(name);
		let name = name.split(DELIMITER).next().unwrap_or(name);
		self.get(name)
	}

	/// Look `name` up and extract its operands from `message`
	pub fn operands(&self, name: &str, message: &str) -> Result<Operands, OperandError> {
		match self.get(name) {
			Some(cmd) => self.parser.parse(Some(cmd), message),
			None => Err(OperandError::illegal(ArgKind::Unregistered(
				name.to_string(),
			))),
		}
	}
}
