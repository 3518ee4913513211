use async_trait::async_trait;
use command::ChatId;
use command::Messenger;
use command::TransportError;
use tokio::io::AsyncWrite;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Messenger that prints outgoing messages, one `[chat] text` block per send.
pub struct ConsoleMessenger<W> {
	out: Mutex<W>,
}

impl ConsoleMessenger<tokio::io::Stdout> {
	pub fn stdout() -> Self {
		Self::new(tokio::io::stdout())
	}
}

impl<W> ConsoleMessenger<W> {
	pub fn new(out: W) -> Self {
		Self {
			out: Mutex::new(out),
		}
	}

	pub fn into_inner(self) -> W {
		self.out.into_inner()
	}
}

#[async_trait]
impl<W> Messenger for ConsoleMessenger<W>
where
	W: AsyncWrite + Unpin + Send,
{
	async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<(), TransportError> {
		let mut out = self.out.lock().await;
		out.write_all(format!("[{}] {}\n", chat_id, text).as_bytes())
			.await?;
		out.flush().await?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_send_message_prefixes_chat() {
		let messenger = ConsoleMessenger::new(Vec::new());
		messenger.send_message(ChatId(5), "hello").await.unwrap();
		messenger
			.send_message(ChatId(-5), "line one\nline two")
			.await
			.unwrap();

		let written = String::from_utf8(messenger.into_inner()).unwrap();
		assert_eq!(written, "[5] hello\n[-5] line one\nline two\n");
	}
}
