use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "atrium",
    about = "Atrium Digital — site content service",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the content API server
    Serve(ServeArgs),
    /// Print seeded sample content of one kind as JSON
    Content(ContentArgs),
    /// Print the legacy-path redirect table
    Routes,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Bind address, overriding the config file
    #[arg(long)]
    pub bind: Option<String>,
    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<String>,
    /// Start with an empty store instead of the sample content
    #[arg(long)]
    pub empty: bool,
}

#[derive(Args)]
pub struct ContentArgs {
    pub kind: ContentKind,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum ContentKind {
    Categories,
    BlogPosts,
    Services,
    Projects,
    TeamMembers,
    Testimonials,
}
