mod events;

use std::sync::atomic::Ordering;

use poise::serenity_prelude as serenity;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rustls::crypto::ring::default_provider;

use maple_commands::fallback::resolve_fallback;
use maple_content::ContentService;
use maple_core::config::ConfigError;
use maple_core::error::classify;
use maple_core::reply::{ReplyPath, reply_path, was_deferred};
use maple_core::{CommandError, Config, Context, Data, Error};
use maple_database::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_filter(filter_fn(|metadata| {
        let target = metadata.target();

        !(target.starts_with("serenity::gateway::bridge::shard_manager")
            || target.starts_with("serenity::gateway::bridge::shard_runner"))
    }));

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt_layer)
        .init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            if let ConfigError::Missing(keys) = &err {
                for key in keys {
                    error!(key, "missing required environment variable");
                }
            } else {
                error!(%err, "invalid configuration");
            }
            return Err(err.into());
        }
    };
    info!(
        token = %config.token_preview(),
        client_id = config.client_id,
        guild_id = ?config.guild_id,
        "configuration loaded"
    );

    let db = Database::in_memory();
    info!(backend = db.backend_name(), "store initialised");
    let content = ContentService::from_env();
    let data = Data::new(db, content);

    let commands = maple_commands::commands();
    if let Err(err) = register_commands(&config, &commands).await {
        error!(?err, "failed to register application commands");
        return Err(err);
    }

    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT
        | serenity::GatewayIntents::GUILD_MEMBERS
        | serenity::GatewayIntents::GUILD_MODERATION
        | serenity::GatewayIntents::GUILD_VOICE_STATES;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands,
            event_handler: |ctx, event, framework, data| {
                Box::pin(handle_event(ctx, event, framework, data))
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, _framework| {
            Box::pin(async move {
                info!(tag = %ready.user.tag(), "Maple is ready");
                ctx.set_activity(Some(serenity::ActivityData::playing("with Discord API")));
                Ok(data)
            })
        })
        .build();

    info!("Maple is connecting...");

    let mut client = serenity::ClientBuilder::new(&config.token, intents)
        .framework(framework)
        .await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        info!("shutdown signal received, stopping shards");
        shard_manager.shutdown_all().await;
    });

    if let Err(err) = client.start().await {
        error!(?err, "Discord client stopped with an error");
        return Err(err.into());
    }

    info!("Maple stopped");
    Ok(())
}

/// Replace every application command over REST before the gateway login.
async fn register_commands(
    config: &Config,
    commands: &[poise::Command<Data, Error>],
) -> anyhow::Result<()> {
    let http = serenity::Http::new(&config.token);
    http.set_application_id(serenity::ApplicationId::new(config.client_id));

    let create_commands = poise::builtins::create_application_commands(commands);
    let count = create_commands.len();

    match config.guild_id {
        Some(guild_id) => {
            serenity::GuildId::new(guild_id)
                .set_commands(&http, create_commands)
                .await?;
            info!(guild_id, count, "registered guild application commands");
        }
        None => {
            serenity::Command::set_global_commands(&http, create_commands).await?;
            info!(count, "registered global application commands");
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(?err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(?err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = sigterm => {}
    }
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            let kind = classify(&error);
            match kind {
                CommandError::Internal => {
                    error!(?error, command = %ctx.command().name, "command error");
                }
                _ => {
                    warn!(?error, command = %ctx.command().name, "command failed");
                }
            }

            send_error_reply(ctx, &kind).await;
        }
        poise::FrameworkError::MissingUserPermissions {
            missing_permissions,
            ctx,
            ..
        } => {
            debug!(?missing_permissions, user_id = %ctx.author().id, "missing user permissions");
            let kind = CommandError::PermissionDenied {
                action: "use this command",
            };
            send_error_reply(ctx, &kind).await;
        }
        poise::FrameworkError::GuildOnly { ctx, .. } => {
            if let Err(err) = ctx
                .send(
                    poise::CreateReply::default()
                        .content("❌ This command can only be used in a server.")
                        .ephemeral(true),
                )
                .await
            {
                warn!(?err, "failed to send guild-only notice");
            }
        }
        poise::FrameworkError::UnknownInteraction {
            ctx,
            framework,
            interaction,
            ..
        } => {
            let name = &interaction.data.name;
            let reply = match resolve_fallback(&framework.user_data.db, name).await {
                Ok(reply) => reply,
                Err(err) => {
                    error!(?err, command = %name, "fallback lookup failed");
                    CommandError::Internal.user_message()
                }
            };

            let response = serenity::CreateInteractionResponse::Message(
                serenity::CreateInteractionResponseMessage::new().content(reply),
            );
            if let Err(err) = interaction.create_response(&ctx.http, response).await {
                warn!(?err, command = %name, "failed to answer unknown interaction");
            }
        }
        other => {
            error!(?other, "framework error");
        }
    }
}

/// Deliver the single error reply for an invocation on the path its state allows.
async fn send_error_reply(ctx: Context<'_>, kind: &CommandError) {
    let text = kind.user_message();
    let ephemeral = kind.is_ephemeral();

    let result = match ctx {
        poise::Context::Application(app) => {
            let replied = app.has_sent_initial_response.load(Ordering::SeqCst);
            match reply_path(was_deferred(ctx).await, replied) {
                ReplyPath::EditDeferred => app
                    .interaction
                    .edit_response(
                        ctx.http(),
                        serenity::EditInteractionResponse::new().content(text),
                    )
                    .await
                    .map(|_| ()),
                ReplyPath::Reply => {
                    let response = serenity::CreateInteractionResponse::Message(
                        serenity::CreateInteractionResponseMessage::new()
                            .content(text)
                            .ephemeral(ephemeral),
                    );
                    let sent = app.interaction.create_response(ctx.http(), response).await;
                    if sent.is_ok() {
                        app.has_sent_initial_response.store(true, Ordering::SeqCst);
                    }
                    sent
                }
                ReplyPath::FollowUp => app
                    .interaction
                    .create_followup(
                        ctx.http(),
                        serenity::CreateInteractionResponseFollowup::new()
                            .content(text)
                            .ephemeral(ephemeral),
                    )
                    .await
                    .map(|_| ()),
            }
        }
        poise::Context::Prefix(_) => ctx.say(text).await.map(|_| ()),
    };

    if let Err(err) = result {
        warn!(?err, "failed to send error reply");
    }
}

async fn handle_event(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    if let serenity::FullEvent::Message { new_message } = event {
        events::afk::handle_message_afk(ctx, data, new_message).await;
        events::custom_commands::handle_message_custom_command(ctx, data, new_message).await;
    }

    Ok(())
}
