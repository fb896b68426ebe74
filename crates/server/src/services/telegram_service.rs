use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::utils::command::BotCommands;
use teloxide::RequestError;
use tracing::{error, info};

use dispatch::{MessageSender, SendError};
use storage::{SignalStore, SubscriberRegistry};

/// Outbound half: delivers rendered broadcast text to one chat.
pub struct TelegramSender {
    bot: Bot,
}

impl TelegramSender {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl MessageSender for TelegramSender {
    // Legacy Markdown is deprecated upstream but keeps the message
    // formatting compatible without MarkdownV2 escaping of names and
    // prices.
    #[allow(deprecated)]
    async fn send_text(&self, recipient_id: i64, text: &str) -> Result<(), SendError> {
        self.bot
            .send_message(ChatId(recipient_id), text)
            .parse_mode(ParseMode::Markdown)
            .await
            .map(|_| ())
            .map_err(classify)
    }
}

/// Telegram rejecting the chat (blocked bot, deleted account) is a
/// recipient problem; everything else is the transport acting up.
fn classify(e: RequestError) -> SendError {
    match e {
        RequestError::Api(api) => SendError::RecipientUnreachable(api.to_string()),
        other => SendError::Transport(other.to_string()),
    }
}

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    #[command(description = "register and show the welcome message")]
    Start,
    #[command(description = "receive signal broadcasts")]
    Subscribe,
    #[command(description = "stop receiving broadcasts")]
    Stop,
    #[command(description = "show system status")]
    Status,
}

/// Inbound half: long-polls Telegram and routes recognized commands.
/// Anything that is not a known command is ignored.
pub async fn run_commands(
    bot: Bot,
    registry: Arc<dyn SubscriberRegistry>,
    store: Arc<dyn SignalStore>,
) {
    info!("Starting Telegram command listener");

    let handler = Update::filter_message()
        .filter_command::<Command>()
        .endpoint(answer);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![registry, store])
        .default_handler(|_| async {})
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

// Replies use legacy Markdown, same as the outbound sender above.
#[allow(deprecated)]
async fn answer(
    bot: Bot,
    msg: Message,
    cmd: Command,
    registry: Arc<dyn SubscriberRegistry>,
    store: Arc<dyn SignalStore>,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id;
    let display_name = msg
        .chat
        .username()
        .or_else(|| msg.chat.first_name())
        .map(str::to_string);

    let reply = match cmd {
        Command::Start => match registry
            .upsert_on_contact(chat_id.0, display_name.as_deref())
            .await
        {
            Ok(_) => welcome_text(display_name.as_deref()),
            Err(e) => {
                error!("Registration for {} failed: {}", chat_id, e);
                unavailable_text()
            }
        },
        Command::Subscribe => match registry.set_subscribed(chat_id.0, true).await {
            Ok(_) => "✅ *Subscription active!* You will receive signal broadcasts.".to_string(),
            Err(e) => {
                error!("Subscribe for {} failed: {}", chat_id, e);
                unavailable_text()
            }
        },
        Command::Stop => match registry.set_subscribed(chat_id.0, false).await {
            Ok(_) => "❌ *Subscription stopped.* Use /subscribe to opt back in.".to_string(),
            Err(e) => {
                error!("Unsubscribe for {} failed: {}", chat_id, e);
                unavailable_text()
            }
        },
        Command::Status => {
            match tokio::try_join!(registry.count_subscribed(), store.count()) {
                Ok((subscribers, signals)) => status_text(subscribers, signals),
                Err(e) => {
                    error!("Status query failed: {}", e);
                    unavailable_text()
                }
            }
        }
    };

    bot.send_message(chat_id, reply)
        .parse_mode(ParseMode::Markdown)
        .await?;
    Ok(())
}

fn welcome_text(display_name: Option<&str>) -> String {
    let greeting = match display_name {
        Some(name) => format!("Hello *{name}*!"),
        None => "Hello!".to_string(),
    };

    format!(
        "🤖 *Crypto Signal Bot*\n\
         \n\
         {greeting} You are registered for automated trade signals.\n\
         \n\
         🎯 *Commands:*\n\
         /subscribe — receive signal broadcasts\n\
         /stop — stop receiving broadcasts\n\
         /status — system status\n\
         \n\
         ⚠️ *Educational use only*"
    )
}

fn status_text(subscribers: i64, signals: i64) -> String {
    format!(
        "📊 *System Status*\n\
         \n\
         • 🤖 Bot: 🟢 online\n\
         • 👥 Subscribers: {subscribers}\n\
         • 📈 Signals: {signals}\n\
         • 🏦 Exchange: Binance\n\
         \n\
         🕒 {}",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )
}

fn unavailable_text() -> String {
    "⚠️ The service is temporarily unavailable. Please try again later.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::ApiError;

    #[test]
    fn api_rejections_are_recipient_failures() {
        let err = classify(RequestError::Api(ApiError::BotBlocked));
        assert!(matches!(err, SendError::RecipientUnreachable(_)));
    }

    #[test]
    fn welcome_mentions_the_user_when_known() {
        assert!(welcome_text(Some("alice")).contains("*alice*"));
        assert!(welcome_text(None).starts_with("🤖"));
    }

    #[test]
    fn status_reports_both_counters() {
        let text = status_text(12, 345);
        assert!(text.contains("Subscribers: 12"));
        assert!(text.contains("Signals: 345"));
    }
}
