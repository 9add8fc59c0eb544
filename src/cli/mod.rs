pub mod commands;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "doit-etre")]
#[command(about = "doit-etre phrase API server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP API (default)")]
    Serve(commands::serve::ServeArgs),

    #[command(about = "Apply pending database migrations and exit")]
    Migrate,
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    match cli.command {
        Some(Commands::Serve(args)) => commands::serve::handle(args, config).await,
        Some(Commands::Migrate) => commands::migrate::handle(config).await,
        None => commands::serve::handle(commands::serve::ServeArgs::default(), config).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["doit-etre"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn serve_accepts_host_and_port() {
        let cli = Cli::try_parse_from(["doit-etre", "serve", "--host", "127.0.0.1", "--port", "9000"]).unwrap();
        match cli.command {
            Some(Commands::Serve(args)) => {
                assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
                assert_eq!(args.port, Some(9000));
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn migrate_takes_no_arguments() {
        assert!(Cli::try_parse_from(["doit-etre", "migrate"]).is_ok());
        assert!(Cli::try_parse_from(["doit-etre", "migrate", "extra"]).is_err());
    }
}
