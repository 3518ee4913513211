use std::sync::Arc;

use todobot::bot::Bot;
use todobot::bot_config;
use todobot::config::BOT_CONF;
use todobot::config::Cli;
use todobot::config::Parser;
use todobot::console::ConsoleMessenger;
use tokio::io::BufReader;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
	let args = Cli::parse();
	todobot::config::setup(args)?;

	let config = BOT_CONF.load();
	let table = Arc::new(config.command_table()?);
	todobot::logo::show_logo(&config.bot_name, table.len());

	let chat_id = config.chat();
	info!(
		"Listening for commands on stdin for chat {} ({} commands)",
		bot_config!(chat_id),
		table.len()
	);

	let bot = Bot::new(table, ConsoleMessenger::stdout(), chat_id);
	bot.run(BufReader::new(tokio::io::stdin())).await?;
	Ok(())
}
