use std::sync::Arc;

use colored::Colorize;

use atrium_server::{redirects, ServerConfig, SiteServer};
use atrium_store::{seed, InMemoryStore};

use crate::cli::{Cli, Command, ContentArgs, ContentKind, ServeArgs};

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Content(args) => cmd_content(&args),
        Command::Routes => cmd_routes(),
    }
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = &args.bind {
        config.bind_addr = bind.parse()?;
    }
    if args.empty {
        config.seed_sample_content = false;
    }

    let store = if config.seed_sample_content {
        InMemoryStore::with_sample_content()
    } else {
        InMemoryStore::new()
    };

    println!(
        "{} atrium content API on {}",
        "✓".green().bold(),
        config.bind_addr.to_string().bold()
    );
    SiteServer::new(config, Arc::new(store)).serve().await?;
    Ok(())
}

fn cmd_content(args: &ContentArgs) -> anyhow::Result<()> {
    let json = match args.kind {
        ContentKind::Categories => serde_json::to_string_pretty(&seed::categories())?,
        ContentKind::BlogPosts => serde_json::to_string_pretty(&seed::blog_posts())?,
        ContentKind::Services => serde_json::to_string_pretty(&seed::services())?,
        ContentKind::Projects => serde_json::to_string_pretty(&seed::projects())?,
        ContentKind::TeamMembers => serde_json::to_string_pretty(&seed::team_members())?,
        ContentKind::Testimonials => serde_json::to_string_pretty(&seed::testimonials())?,
    };
    println!("{json}");
    Ok(())
}

fn cmd_routes() -> anyhow::Result<()> {
    for (from, to) in redirects::redirect_rules() {
        println!("{} {} {}", from.yellow(), "→".dimmed(), to.green());
    }
    Ok(())
}
