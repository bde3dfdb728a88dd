//! folio-os entry point.
//!
//! Hosts the portfolio terminal in a text console. Each stdin line is typed
//! into the terminal and submitted; lines starting with `:` drive the
//! desktop instead (`:help` lists them). Live cells resolve in the
//! background and the screen is redrawn whenever something changes.

mod desktop;
mod meta;
mod render;

use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::json;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use folio_net::{Fetcher, HttpFetcher, MockFetcher, MockResponse};
use folio_skin::resolve_theme;
use folio_terminal::{CommandRegistry, Terminal, TokioCellSpawner, register_builtins};
use folio_types::config::{FetchConfig, FolioConfig};
use folio_wm::WindowManager;

use desktop::{Desktop, Reply};
use render::Renderer;

/// Command-line options.
#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    theme: Option<String>,
    offline: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--offline" => parsed.offline = true,
            other if other.starts_with("--") => anyhow::bail!("unknown option {other}"),
            _ if parsed.theme.is_none() => parsed.theme = Some(arg.clone()),
            _ => anyhow::bail!("unexpected argument {arg}"),
        }
    }
    Ok(parsed)
}

/// Canned responses for running without network access.
fn offline_fetcher(endpoints: &FetchConfig) -> MockFetcher {
    MockFetcher::new()
        .route_delayed(
            &endpoints.joke_url,
            MockResponse::Json(json!({
                "error": false,
                "type": "twopart",
                "setup": "Why do programmers prefer dark mode?",
                "delivery": "Because light attracts bugs.",
            })),
            Duration::from_millis(400),
        )
        .route_delayed(
            &endpoints.waifu_url,
            MockResponse::Fail("offline".to_string()),
            Duration::from_millis(400),
        )
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args(std::env::args().skip(1))?;

    // Resolve config from --config, then FOLIO_CONFIG, then defaults.
    let config_path = args
        .config
        .clone()
        .or_else(|| std::env::var_os("FOLIO_CONFIG").map(PathBuf::from));
    let config = match &config_path {
        Some(path) => FolioConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => FolioConfig::default(),
    };

    // Resolve theme from CLI arg, FOLIO_THEME env var, or config.
    let theme_id = args
        .theme
        .clone()
        .or_else(|| std::env::var("FOLIO_THEME").ok())
        .unwrap_or_else(|| config.theme.clone());
    let theme = resolve_theme(&theme_id)?;
    log::info!("Starting folio-os as {} with theme {}", config.user, theme.name);

    let fetcher: Arc<dyn Fetcher> = if args.offline {
        log::info!("Offline mode: live commands use canned responses");
        Arc::new(offline_fetcher(&config.fetch))
    } else {
        Arc::new(HttpFetcher::new(Duration::from_secs(config.fetch.timeout_secs))?)
    };
    let (tx, mut rx) = mpsc::unbounded_channel();
    let spawner = TokioCellSpawner::new(fetcher, config.fetch.clone(), tx);

    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    log::info!("Registered {} commands", registry.len());

    let terminal = Terminal::new(Arc::new(registry), theme, config.user.clone(), Box::new(spawner));
    let wm = WindowManager::new(
        config.window.position(),
        config.window.size(),
        config.viewport.size(),
    );
    let mut desktop = Desktop::new(terminal, wm);
    let renderer = Renderer {
        color: std::io::stdout().is_terminal(),
    };

    draw(&renderer, &desktop, None)?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let notice = tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match meta::parse(&line).and_then(|input| desktop.handle(input)) {
                    Ok(Reply::Quit) => break,
                    Ok(Reply::Redraw) => None,
                    Ok(Reply::Notice(msg)) => Some(msg),
                    Err(e) => Some(e.to_string()),
                }
            }
            Some(update) = rx.recv() => {
                if !desktop.apply_cell_update(update) {
                    continue;
                }
                None
            }
        };
        draw(&renderer, &desktop, notice.as_deref())?;
    }

    log::info!("Shutting down");
    Ok(())
}

fn draw(renderer: &Renderer, desktop: &Desktop, notice: Option<&str>) -> Result<()> {
    let frame = renderer.frame(desktop, notice);
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(frame.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn positional_theme_and_flags() {
        let a = args(&["matrix", "--offline", "--config", "folio.toml"]).unwrap();
        assert_eq!(a.theme.as_deref(), Some("matrix"));
        assert!(a.offline);
        assert_eq!(a.config, Some(PathBuf::from("folio.toml")));
    }

    #[test]
    fn config_flag_needs_value() {
        assert!(args(&["--config"]).is_err());
    }

    #[test]
    fn rejects_unknown_option_and_extra_positional() {
        assert!(args(&["--verbose"]).is_err());
        assert!(args(&["cmd", "ubuntu"]).is_err());
    }

    #[tokio::test]
    async fn offline_fetcher_serves_joke_and_fails_waifu() {
        let endpoints = FetchConfig::default();
        let f = offline_fetcher(&endpoints);
        let joke = f.get_json(&endpoints.joke_url).await.unwrap();
        assert_eq!(joke["type"], "twopart");
        assert!(f.get_json(&endpoints.waifu_url).await.is_err());
    }
}
