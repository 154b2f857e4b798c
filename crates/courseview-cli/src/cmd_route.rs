use anyhow::{Result, bail};
use clap::Subcommand;

use courseview::route::{read_fragment, write_fragment};
use courseview::types::View;

#[derive(Subcommand, Debug)]
pub enum RouteOp {
    /// Decode a fragment into its session, view, and path
    Read {
        /// URL fragment (with or without the leading '#')
        fragment: String,

        /// Session substituted when the fragment names none
        #[arg(long, default_value = "MAIN")]
        default_session: String,
    },
    /// Encode navigation state into a fragment
    Write {
        /// Session id
        session: String,

        /// View (docs or code)
        #[arg(long, default_value = "docs")]
        view: String,

        /// Selected document path
        #[arg(long)]
        path: Option<String>,
    },
}

pub fn run(op: RouteOp) -> Result<()> {
    match op {
        RouteOp::Read {
            fragment,
            default_session,
        } => {
            let route = read_fragment(&fragment, &default_session);
            println!("{}", serde_json::to_string_pretty(&route)?);
            Ok(())
        }
        RouteOp::Write {
            session,
            view,
            path,
        } => {
            let Some(view) = View::parse(&view) else {
                bail!("알 수 없는 view: {view} (docs 또는 code)");
            };
            println!("{}", write_fragment(&session, view, path.as_deref()));
            Ok(())
        }
    }
}
