//! # objdispatch-cli
//!
//! Route inspection for object dispatch, run against a built-in demo site.
//!
//! ## Usage
//!
//! ```bash
//! # Walk a path and invoke whatever it lands on
//! objdispatch resolve /user/GothAlice/foo --call
//!
//! # See what a handler could dispatch to
//! objdispatch trace /user
//!
//! # List every discoverable route, private ones included
//! objdispatch --no-protect routes
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;
pub mod error;
pub mod render;
pub mod site;

pub use error::{Error, Result};

/// objdispatch - Inspect object dispatch over the demo site
#[derive(Parser, Debug)]
#[command(name = "objdispatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON dispatcher configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Allow private names and built-ins
    #[arg(long)]
    pub no_protect: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Log dispatch steps to stderr
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Walk a path from the site root
    Resolve {
        path: String,

        /// Invoke the endpoint with the unconsumed segments
        #[arg(long)]
        call: bool,
    },
    /// List what the handler at a path could dispatch to
    Trace { path: String },
    /// List every discoverable route
    Routes,
}

/// Execute the parsed command line, returning the text to print.
pub fn run(cli: &Cli) -> Result<String> {
    let config = commands::load_config(cli.config.as_deref(), cli.no_protect)?;
    let resolver = config.resolver();

    match &cli.command {
        Command::Resolve { path, call } => {
            let resolution = commands::resolve(&resolver, path, *call)?;
            if cli.json {
                render::json(&resolution)
            } else {
                Ok(render::resolution(&resolution))
            }
        }
        Command::Trace { path } => {
            let crumbs = commands::trace(&resolver, path)?;
            if cli.json {
                render::json(&crumbs)
            } else {
                Ok(render::crumbs(&crumbs))
            }
        }
        Command::Routes => {
            let routes = commands::routes(&resolver);
            if cli.json {
                render::json(&routes)
            } else {
                Ok(render::routes(&routes))
            }
        }
    }
}
