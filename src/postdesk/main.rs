//! The `postdesk` binary: a thin terminal client over [`postdesk::api::PostApi`].
//!
//! Everything user-facing lives here: argument parsing, the editor round
//! trip, printing, exit codes and installing the tracing subscriber.

use clap::Parser;
use directories::ProjectDirs;
use postdesk::api::{CmdMessage, ConfigAction, PostApi};
use postdesk::commands;
use postdesk::config::PostdeskConfig;
use postdesk::editor::{edit_content, EditorContent};
use postdesk::error::{PostdeskError, Result};
use postdesk::image::ImageSource;
use postdesk::model::PostType;
use postdesk::store::fs::FileStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod args;
mod print;
use args::{Cli, Commands};
use print::{print_messages, print_posts};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: PostApi<FileStore>,
    data_dir: PathBuf,
}

struct PostArgs {
    title: Option<String>,
    description: Option<String>,
    tags: Option<String>,
    post_type: PostType,
    image: Option<PathBuf>,
    no_editor: bool,
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Post {
            title,
            description,
            tags,
            post_type,
            image,
            no_editor,
        }) => {
            let args = PostArgs {
                title,
                description,
                tags,
                post_type,
                image,
                no_editor,
            };
            handle_post(&ctx, args).await
        }
        Some(Commands::List) | None => handle_list(&ctx).await,
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("POSTDESK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("postdesk={}", default_level)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "postdesk", "postdesk")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PostdeskError::Config("Could not determine data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = PostdeskConfig::load(&data_dir)?;
    let store = FileStore::new(config.store_config(&data_dir));
    tracing::debug!(dir = %store.config().collection_dir().display(), "using document store");

    Ok(AppContext {
        api: PostApi::new(Arc::new(store)),
        data_dir,
    })
}

async fn handle_post(ctx: &AppContext, args: PostArgs) -> Result<()> {
    let mut title = args.title.unwrap_or_default();
    let mut description = args.description.unwrap_or_default();

    if !args.no_editor && (title.is_empty() || description.is_empty()) {
        let edited = edit_content(&EditorContent::new(title, description))?;
        title = edited.title;
        description = edited.description;
    }

    let api = &ctx.api;
    api.set_type(args.post_type);
    api.set_title(title);
    api.set_description(description);
    api.set_tags(args.tags.unwrap_or_default());

    if let Some(path) = args.image {
        match api.attach_image(&ImageSource::File(path)).await {
            Ok(result) => print_messages(&result.messages),
            // text-only post still goes through
            Err(e) => print_messages(&[CmdMessage::warning(e.to_string())]),
        }
    }

    if !api.can_submit() {
        let draft = api.draft();
        return Err(PostdeskError::Api(format!(
            "Both a title and a description are required for your {}",
            draft.post_type
        )));
    }

    match api.submit().await {
        Ok(result) => {
            print_messages(&result.messages);
            Ok(())
        }
        Err(e) => {
            if let Some(status) = api.status() {
                print_messages(&[CmdMessage::from(status)]);
            }
            Err(e)
        }
    }
}

async fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_posts().await?;
    print_posts(&result.listed_posts);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = commands::config::run(&ctx.data_dir, action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            println!("collection = {}", config.collection);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
