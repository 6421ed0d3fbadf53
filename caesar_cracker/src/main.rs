use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use shift_cryptanalysis::{KeyRanker, LanguageProfile, ScoringConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod report;

/// Command-line arguments for the Caesar cipher cracker.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Ciphertext to attack
    #[arg(conflicts_with = "file")]
    ciphertext: Option<String>,

    /// Path to a file containing the ciphertext
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: Option<String>,

    /// Path to a file where the best decryption will be saved
    #[arg(short, long, help = "Path to the output file for the decrypted text")]
    output: Option<String>,

    /// Number of best candidates to detail
    #[arg(short, long, default_value_t = 5)]
    top: usize,

    /// Print the decryption under every key
    #[arg(short, long, default_value_t = false)]
    all: bool,

    /// JSON file overriding the scoring weights and constants
    #[arg(short, long)]
    weights: Option<String>,

    /// JSON file describing another plaintext language
    #[arg(short, long)]
    language: Option<String>,

    /// Emit the full ranking as JSON instead of the report
    #[arg(long, default_value_t = false)]
    json: bool,

    /// List sample ciphertexts and exit
    #[arg(long, default_value_t = false)]
    samples: bool,
}

/// Main entry point for the Caesar cipher cracker.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli: Cli = Cli::parse();

    if cli.samples {
        print!("{}", report::samples()?);
        return Ok(());
    }

    let ciphertext = read_ciphertext(&cli)?;

    let profile = match &cli.language {
        Some(path) => Arc::new(
            LanguageProfile::from_json_file(path)
                .with_context(|| format!("Failed to load language profile {}", path))?,
        ),
        None => LanguageProfile::french(),
    };
    let config = match &cli.weights {
        Some(path) => ScoringConfig::from_json_file(path)
            .with_context(|| format!("Failed to load scoring weights {}", path))?,
        None => ScoringConfig::default(),
    };

    let ranker = KeyRanker::new(profile, config);
    let ranking = ranker.rank(&ciphertext);
    let verdict = ranking.verdict();
    info!(
        "Attacked {} letters against the {} profile",
        ranking.original_length,
        ranker.profile().name
    );

    if cli.json {
        println!("{}", report::json(&ranking, &verdict)?);
    } else {
        print!("{}", report::header(&ciphertext, ranking.original_length)?);
        if cli.all {
            print!("{}", report::table(&ranking)?);
        }
        print!("{}", report::top(&ranking, cli.top)?);
        print!("{}", report::verdict(&verdict)?);
    }

    if let Some(path) = &cli.output {
        std::fs::write(path, &verdict.plaintext)
            .with_context(|| format!("Failed to write the output file {}", path))?;
        info!("Best decryption saved to {}", path);
    }

    Ok(())
}

/// Takes the ciphertext from the command line or from the input file.
fn read_ciphertext(cli: &Cli) -> Result<String> {
    let ciphertext = match (&cli.ciphertext, &cli.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read the input file {}", path))?,
        (None, None) => bail!("No ciphertext given; pass it as an argument or with --file"),
    };

    let ciphertext = ciphertext.trim().to_string();
    if ciphertext.is_empty() {
        bail!("Empty ciphertext");
    }

    Ok(ciphertext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_read_ciphertext_from_argument() {
        let cli = Cli::parse_from(["caesar_cracker", "  ERQMRXU\n"]);
        assert_eq!(read_ciphertext(&cli).unwrap(), "ERQMRXU");
        assert_eq!(cli.top, 5);
        assert!(!cli.all);
    }

    #[test]
    fn test_read_ciphertext_rejects_missing_and_empty() {
        let cli = Cli::parse_from(["caesar_cracker"]);
        assert!(read_ciphertext(&cli).is_err());

        let cli = Cli::parse_from(["caesar_cracker", "   "]);
        assert!(read_ciphertext(&cli).is_err());
    }

    #[test]
    fn test_argument_and_file_conflict() {
        let result = Cli::try_parse_from(["caesar_cracker", "ERQMRXU", "--file", "in.txt"]);
        assert!(result.is_err());
    }
}
