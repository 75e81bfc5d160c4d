use crate::args::Cli;
use crate::config::Config;
use crate::logging;
use crate::terminal;
use crate::transport::{Endpoint, FetchRequest, Fetcher, HttpFetcher, SERVER_PATH, SESSIONS_PATH};
use anyhow::{Context, Result};
use nowplaying_core::{ColorTheme, Layout, Reporter, ServerIdentity};
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info};

/// Effective options after merging the config file with the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub hosts: Vec<String>,
    pub port: u16,
    pub token: Option<String>,
    pub timeout: Duration,
    pub columns: usize,
    pub color: bool,
    pub verbose: bool,
    pub leader: char,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: Config) -> Result<Self> {
        let leader = match cli.leader {
            Some(leader) => leader,
            None => config.leader_char()?,
        };
        let hosts = if cli.hosts.is_empty() {
            config.hosts
        } else {
            cli.hosts.clone()
        };

        Ok(Self {
            hosts,
            port: cli.port.unwrap_or(config.port),
            token: cli.token.clone().or(config.token).filter(|t| !t.is_empty()),
            timeout: Duration::from_secs(cli.timeout.unwrap_or(config.timeout_secs)),
            columns: terminal::terminal_width(cli.columns.or(config.columns)),
            color: terminal::stdout_color_enabled(cli.color.unwrap_or(config.color)),
            verbose: cli.verbose || config.verbose,
            leader,
        })
    }
}

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config = Config::load(cli.config.as_deref())?;
    let settings = Settings::resolve(&cli, config)?;
    debug!(hosts = ?settings.hosts, columns = settings.columns, "resolved settings");

    let stdout = std::io::stdout();
    run_with(&settings, &HttpFetcher, stdout.lock())
}

/// Report on every configured host in turn, stopping at the first failure.
pub fn run_with<F: Fetcher, W: Write>(settings: &Settings, fetcher: &F, out: W) -> Result<()> {
    let theme = ColorTheme::new(settings.color);
    let layout = Layout::new(settings.columns).with_leader(settings.leader);
    let mut reporter = Reporter::new(out, theme, layout, settings.verbose);

    for host in &settings.hosts {
        let endpoint = Endpoint::parse(host, settings.port);
        let fetch = |path: &str| {
            fetcher.fetch(&FetchRequest {
                endpoint: &endpoint,
                path,
                timeout: settings.timeout,
                token: settings.token.as_deref(),
            })
        };

        let server_document = fetch(SERVER_PATH)
            .with_context(|| format!("could not fetch server info from {}", host))?;
        let mut server = ServerIdentity::default();
        server.scan(&server_document, host, settings.token.is_some())?;

        let sessions_document = fetch(SESSIONS_PATH)
            .with_context(|| format!("could not fetch sessions from {}", host))?;
        let count = reporter.scan_sessions(&sessions_document, host, &server)?;
        info!(host = %host, server = server.friendly_name(), sessions = count, "host done");
    }

    reporter.into_inner().flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use nowplaying_core::Error;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct CannedFetcher {
        documents: HashMap<(String, String), String>,
        calls: RefCell<Vec<String>>,
    }

    impl CannedFetcher {
        fn with(mut self, host: &str, path: &'static str, body: &str) -> Self {
            self.documents
                .insert((host.to_string(), path.to_string()), body.to_string());
            self
        }
    }

    impl Fetcher for CannedFetcher {
        fn fetch(&self, request: &FetchRequest<'_>) -> Result<String> {
            self.calls
                .borrow_mut()
                .push(request.endpoint.url(request.path));
            let key = (request.endpoint.host.clone(), request.path.to_string());
            match self.documents.get(&key) {
                Some(body) => Ok(body.clone()),
                None => bail!("connection refused"),
            }
        }
    }

    fn settings(hosts: &[&str]) -> Settings {
        Settings {
            hosts: hosts.iter().map(|h| h.to_string()).collect(),
            port: 32400,
            token: None,
            timeout: Duration::from_secs(1),
            columns: 40,
            color: false,
            verbose: true,
            leader: '.',
        }
    }

    const SERVER: &str = "<MediaContainer friendlyName=\"attic\" version=\"1\">\n";
    const ONE_MOVIE: &str = "<MediaContainer size=\"1\">\n<Video title=\"Alien\" type=\"movie\">\n</Video>\n</MediaContainer>\n";
    const EMPTY: &str = "<MediaContainer size=\"0\">\n</MediaContainer>\n";

    #[test]
    fn test_run_renders_each_host() -> Result<()> {
        let fetcher = CannedFetcher::default()
            .with("a", SERVER_PATH, SERVER)
            .with("a", SESSIONS_PATH, ONE_MOVIE)
            .with("b", SERVER_PATH, SERVER)
            .with("b", SESSIONS_PATH, EMPTY);

        let mut out = Vec::new();
        run_with(&settings(&["a", "b"]), &fetcher, &mut out)?;
        let out = String::from_utf8(out)?;

        assert!(out.contains("Now playing on attic"));
        assert!(out.contains("1. Alien"));
        assert!(out.contains("Nothing is playing on attic (b)"));
        assert_eq!(fetcher.calls.borrow().len(), 4);
        Ok(())
    }

    #[test]
    fn test_unauthorized_stops_the_run() {
        let fetcher = CannedFetcher::default()
            .with("a", SERVER_PATH, "<html><h1>401 Unauthorized</h1></html>")
            .with("a", SESSIONS_PATH, ONE_MOVIE)
            .with("b", SERVER_PATH, SERVER);

        let mut out = Vec::new();
        let err = run_with(&settings(&["a", "b"]), &fetcher, &mut out).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::Unauthorized {
                token_supplied: false,
                ..
            })
        ));
        assert_eq!(*fetcher.calls.borrow(), vec!["http://a:32400/".to_string()]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_transport_failure_names_host() {
        let fetcher = CannedFetcher::default();
        let mut out = Vec::new();

        let err = run_with(&settings(&["nas:32401"]), &fetcher, &mut out).unwrap_err();
        assert!(format!("{:#}", err).contains("could not fetch server info from nas:32401"));
        assert_eq!(*fetcher.calls.borrow(), vec!["http://nas:32401/".to_string()]);
    }

    #[test]
    fn test_resolve_prefers_command_line() -> Result<()> {
        let cli = <Cli as clap::Parser>::try_parse_from([
            "nowplaying",
            "nas",
            "--columns",
            "90",
            "--color",
            "never",
            "--timeout",
            "9",
            "--token",
            "secret",
        ])?;
        let config = Config {
            hosts: vec!["ignored".to_string()],
            port: 32401,
            leader: "-".to_string(),
            ..Config::default()
        };

        let settings = Settings::resolve(&cli, config)?;
        assert_eq!(settings.hosts, vec!["nas"]);
        assert_eq!(settings.port, 32401);
        assert_eq!(settings.columns, 90);
        assert_eq!(settings.timeout, Duration::from_secs(9));
        assert_eq!(settings.token.as_deref(), Some("secret"));
        assert!(!settings.color);
        assert_eq!(settings.leader, '-');
        Ok(())
    }
}
