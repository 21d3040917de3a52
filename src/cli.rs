use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "doctui")]
#[command(about = "A terminal viewer for the Hono API reference", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the reference (or a single resource) to stdout
    Show {
        /// Resource name: products, users or posts
        resource: Option<String>,
    },
    /// Copy a code block to the system clipboard by its token
    Copy {
        /// Block token, e.g. 'get-products-response'
        token: Option<String>,

        /// List all available tokens
        #[arg(short, long)]
        list: bool,
    },
}
