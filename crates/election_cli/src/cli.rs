use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use scrape_logging::LogOptions;

#[derive(Debug, Parser)]
#[command(
    name = "senate_scrape",
    version,
    about = "Discover and fetch per-state U.S. Senate election pages for a year"
)]
pub struct Cli {
    /// Election year whose overview page is scanned.
    #[arg(long, value_name = "YEAR", default_value_t = 2022, value_parser = clap::value_parser!(u32).range(1..))]
    pub year: u32,

    /// Fetch only this state page and exit, skipping discovery.
    #[arg(long, value_name = "URL")]
    pub state_url: Option<String>,

    /// Seconds to wait after every fetch.
    #[arg(long, value_name = "SECONDS", default_value = "0.5", value_parser = parse_delay)]
    pub delay: Duration,

    /// Log discovery and fetch progress to stdout.
    #[arg(long)]
    pub verbose: bool,

    /// RON file overriding the site constants.
    #[arg(long, value_name = "PATH")]
    pub site_config: Option<PathBuf>,

    /// Also write debug logs to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn log_options(&self) -> LogOptions {
        LogOptions {
            verbose: self.verbose,
            log_file: self.log_file.clone(),
        }
    }
}

fn parse_delay(raw: &str) -> Result<Duration, String> {
    let seconds: f64 = raw
        .trim()
        .parse()
        .map_err(|err| format!("invalid delay {raw:?}: {err}"))?;
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(format!("delay must be a non-negative number of seconds, got {raw}"));
    }
    Duration::try_from_secs_f64(seconds).map_err(|err| format!("invalid delay {raw:?}: {err}"))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::{parse_delay, Cli};

    #[test]
    fn defaults_match_documented_values() {
        let cli = Cli::try_parse_from(["senate_scrape"]).unwrap();
        assert_eq!(cli.year, 2022);
        assert_eq!(cli.state_url, None);
        assert_eq!(cli.delay, Duration::from_millis(500));
        assert!(!cli.verbose);
        assert!(!cli.log_options().verbose);
    }

    #[test]
    fn all_flags_parse() {
        let cli = Cli::try_parse_from([
            "senate_scrape",
            "--year",
            "2018",
            "--state-url",
            "https://ballotpedia.org/United_States_Senate_election_in_Ohio,_2018",
            "--delay",
            "1.25",
            "--verbose",
            "--site-config",
            "site.ron",
            "--log-file",
            "scrape.log",
        ])
        .unwrap();
        assert_eq!(cli.year, 2018);
        assert_eq!(
            cli.state_url.as_deref(),
            Some("https://ballotpedia.org/United_States_Senate_election_in_Ohio,_2018")
        );
        assert_eq!(cli.delay, Duration::from_millis(1250));
        assert!(cli.verbose);
        assert_eq!(cli.site_config.as_deref(), Some(std::path::Path::new("site.ron")));
        assert_eq!(
            cli.log_options().log_file.as_deref(),
            Some(std::path::Path::new("scrape.log"))
        );
    }

    #[test]
    fn year_must_be_positive() {
        assert!(Cli::try_parse_from(["senate_scrape", "--year", "0"]).is_err());
        assert!(Cli::try_parse_from(["senate_scrape", "--year", "-4"]).is_err());
    }

    #[test]
    fn delay_rejects_negative_and_non_finite() {
        assert_eq!(parse_delay("0"), Ok(Duration::ZERO));
        assert!(parse_delay("-0.5").is_err());
        assert!(parse_delay("NaN").is_err());
        assert!(parse_delay("inf").is_err());
        assert!(parse_delay("soon").is_err());
    }
}
