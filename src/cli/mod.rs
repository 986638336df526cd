//! Command-line front end.
//!
//! The CLI is the presentation consumer of the repository: one subcommand
//! per operation, plain-text output, no business logic.

mod commands;

use clap::{Parser, Subcommand};

/// Cinedex - cached movie catalog browser
#[derive(Parser)]
#[command(name = "cinedex")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show popular movies (served from the cache once populated)
    #[command(alias = "p")]
    Popular,

    /// Show upcoming movies (served from the cache once populated)
    #[command(alias = "u")]
    Upcoming,

    /// Show popular and upcoming movies together
    Home,

    /// Show the full record for one movie
    #[command(alias = "i")]
    Detail {
        /// Catalog identifier of the movie
        id: String,
    },

    /// List trailers and clips for one movie
    #[command(alias = "v")]
    Videos {
        /// Catalog identifier of the movie
        id: String,
    },

    /// Search the catalog by title
    #[command(alias = "s")]
    Search {
        /// Search query
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub use commands::{
    cmd_detail, cmd_home, cmd_init, cmd_popular, cmd_search, cmd_upcoming, cmd_videos,
};
