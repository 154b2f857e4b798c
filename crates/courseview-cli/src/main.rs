mod app;
mod cmd_home;
mod cmd_open;
mod cmd_render;
mod cmd_route;
mod cmd_tree;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "courseview")]
#[command(about = "Browse a courseview site's session docs and code from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Site root: a local directory or an http(s) base URL
    #[arg(long, global = true, default_value = ".")]
    site: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a session's sidebar tree
    Tree {
        /// Session id from the manifest
        session: String,

        /// Which tree to show (docs or code); defaults to the session's view
        #[arg(long)]
        view: Option<String>,

        /// Emit the HTML render plan instead of a text outline
        #[arg(long)]
        html: bool,
    },
    /// Render a single document through the content pipeline
    Render {
        /// Path relative to the site root
        path: String,
    },
    /// Render the home page
    Home,
    /// Open a fragment and show the resulting viewer state
    Open {
        /// URL fragment, e.g. "#s=S1&v=docs&p=sessions/001/docs/readme.md"
        fragment: String,
    },
    /// Read or write route fragments
    Route {
        #[command(subcommand)]
        op: cmd_route::RouteOp,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Tree {
            session,
            view,
            html,
        } => cmd_tree::run(&cli.site, &session, view.as_deref(), html).await,
        Commands::Render { path } => cmd_render::run(&cli.site, &path).await,
        Commands::Home => cmd_home::run(&cli.site).await,
        Commands::Open { fragment } => cmd_open::run(&cli.site, &fragment).await,
        Commands::Route { op } => cmd_route::run(op),
    }
}
