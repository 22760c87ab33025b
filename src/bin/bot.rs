use anyhow::Result;
use dotenvy::dotenv;
use log::{debug, error, info};
use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;

use discord_commands::commands::builtin_commands;
use discord_commands::config::Config;
use discord_commands::executor::Executor;
use discord_commands::message::IncomingMessage;

struct Handler {
    executor: Arc<Executor>,
    trigger: String,
    ignore_bots: bool,
    shutdown: CancellationToken,
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        let incoming = IncomingMessage::from(&msg);

        if self.ignore_bots && incoming.author_bot {
            return;
        }

        if !self.executor.has_match(&self.trigger, &incoming.content) {
            return;
        }

        let dispatched = self
            .executor
            .apply(&self.shutdown, &self.trigger, incoming, ctx.http.clone())
            .await;

        debug!("Dispatched {} command(s) for message {}", dispatched, msg.id);
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);

        if let Some(shard) = ready.shard {
            info!("⚡ Shard: {}/{}", shard[0] + 1, shard[1]);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting command bot with trigger '{}'...", config.trigger);

    let commands = builtin_commands(&config.trigger, Instant::now());
    info!("Registered {} command(s)", commands.len());

    let shutdown = CancellationToken::new();
    let handler = Handler {
        executor: Arc::new(Executor::new(commands)),
        trigger: config.trigger.clone(),
        ignore_bots: config.ignore_bots,
        shutdown: shutdown.clone(),
    };

    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {}", e);
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for ctrl-c: {}", e);
            return;
        }
        info!("Shutting down...");
        shutdown.cancel();
        shard_manager.lock().await.shutdown_all().await;
    });

    info!("Establishing WebSocket connection to Discord gateway...");

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {:?}", why);
        return Err(anyhow::anyhow!("Failed to establish gateway connection: {}", why));
    }

    Ok(())
}
