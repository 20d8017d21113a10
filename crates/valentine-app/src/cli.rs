use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "valentine", version, about = "Will you be my Valentine?")]
pub struct Cli {
    /// TOML file with decoration ranges, window and asset settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Fixed seed for the decoration layout (overrides the config file)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Directory holding the card's images (overrides the config file)
    #[arg(short, long)]
    pub assets: Option<PathBuf>,

    /// Print the generated decorations as JSON and exit
    #[arg(long)]
    pub dump_decorations: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_valid() {
        let cli = Cli::try_parse_from(["valentine"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.seed.is_none());
        assert!(!cli.dump_decorations);
    }

    #[test]
    fn all_flags_parse() {
        let cli = Cli::try_parse_from([
            "valentine",
            "--config",
            "card.toml",
            "--seed",
            "14",
            "--assets",
            "public",
            "--dump-decorations",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("card.toml")));
        assert_eq!(cli.seed, Some(14));
        assert_eq!(cli.assets, Some(PathBuf::from("public")));
        assert!(cli.dump_decorations);
    }

    #[test]
    fn seed_must_be_numeric() {
        assert!(Cli::try_parse_from(["valentine", "--seed", "roses"]).is_err());
    }
}
