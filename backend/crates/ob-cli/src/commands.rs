use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Authenticate a verified claim set and print the resulting user
    Authenticate {
        /// JSON file holding the claim object, or '-' for stdin
        #[arg(long)]
        claims: String,
    },

    /// Print a stored user
    User {
        /// Local (already truncated) username
        username: String,
    },

    /// Load and validate configuration, then print a summary
    CheckConfig,
}
