use serde::Deserialize;
use serde::Serialize;

/// Handle the bot answers to in group chats, e.g. `/money@DnJTodoBot`.
pub const BOT_MENTION: &str = "@DnJTodoBot";

/// Separator between operand fields.
pub const DELIMITER: char = ';';

/// Static definition of a bot command.
///
/// `name` is stored without the leading slash and matched case-sensitively.
/// `max_operands` is the fixed length of every operand list parsed for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
	name: String,
	max_operands: usize,
	format: String,
	example: String,
}

impl Command {
	pub fn new(
		name: impl Into<String>,
		max_operands: usize,
		format: impl Into<String>,
		example: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			max_operands,
			format: format.into(),
			example: example.into(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn max_operands(&self) -> usize {
		self.max_operands
	}

	/// Usage template shown when the command is misused
	pub fn format(&self) -> &str {
		&self.format
	}

	pub fn example(&self) -> &str {
		&self.example
	}

	/// The `/name` token as it appears in messages
	pub fn token(&self) -> String {
		format!("/{}", self.name)
	}

	pub fn money() -> Self {
		Self::new(
			"money",
			3,
			"/money сумма [; цель; дата]",
			"/money 100; котята; 02-23",
		)
	}

	pub fn money_list() -> Self {
		Self::new("moneylist", 1, "/moneylist [дата]", "/moneylist 02-23")
	}

	pub fn task_delete() -> Self {
		Self::new("taskdelete", 1, "/taskdelete [id]", "/taskdelete 76")
	}

	pub fn money_edit() -> Self {
		Self::new(
			"moneyedit",
			5,
			"/moneyedit id[; дата; категория; сумма; цель]",
			"/moneyedit 100; 02-23; Подарки; 200; котята",
		)
	}

	pub fn diary() -> Self {
		Self::new("diary", 1, "/diary text", "/diary what a great day today!")
	}

	/// Commands shipped with the bot
	pub fn builtin() -> Vec<Command> {
		vec![
			Self::money(),
			Self::money_list(),
			Self::task_delete(),
			Self::money_edit(),
			Self::diary(),
		]
	}
}
