//! Entry point for the sysglance TUI. Parses args, resolves the endpoint and runs the App.

mod app;
mod ui;

use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use app::App;
use sysglance::classify::classify;
use sysglance::fetch::{HttpSource, SnapshotSource};
use sysglance::logging;
use sysglance::poller::DEFAULT_INTERVAL;
use sysglance::profiles::{
    load_profiles, save_profiles, ProfileEntry, ProfileRequest, ProfilesFile, ResolveProfile,
};

const USAGE_ARGS: &str = "[--tls-ca CERT_PEM|-t CERT_PEM] [--profile NAME|-P NAME] [--save] [--interval MS|-i MS] [--once] [--dry-run] [http://HOST:PORT]";

#[derive(Debug, Default, PartialEq)]
struct ParsedArgs {
    url: Option<String>,
    tls_ca: Option<String>,
    profile: Option<String>,
    interval_ms: Option<u64>,
    save: bool,
    once: bool,
    dry_run: bool,
}

fn parse_interval(v: Option<String>, prog: &str) -> Result<Option<u64>, String> {
    let Some(v) = v else {
        return Err(format!("--interval needs a value. Usage: {prog} {USAGE_ARGS}"));
    };
    match v.parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Some(ms)),
        _ => Err(format!("invalid --interval '{v}' (milliseconds > 0 expected)")),
    }
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<ParsedArgs, String> {
    let mut it = args.into_iter();
    let prog = it.next().unwrap_or_else(|| "sysglance".into());
    let mut parsed = ParsedArgs::default();

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                return Err(format!("Usage: {prog} {USAGE_ARGS}"));
            }
            "--tls-ca" | "-t" => {
                parsed.tls_ca = it.next();
            }
            "--profile" | "-P" => {
                parsed.profile = it.next();
            }
            "--interval" | "-i" => {
                parsed.interval_ms = parse_interval(it.next(), &prog)?;
            }
            "--save" => parsed.save = true,
            "--once" => parsed.once = true,
            "--dry-run" => parsed.dry_run = true,
            _ if arg.starts_with("--tls-ca=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    if !v.is_empty() {
                        parsed.tls_ca = Some(v.to_string());
                    }
                }
            }
            _ if arg.starts_with("--profile=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    if !v.is_empty() {
                        parsed.profile = Some(v.to_string());
                    }
                }
            }
            _ if arg.starts_with("--interval=") => {
                let v = arg.split_once('=').map(|(_, v)| v.to_string());
                parsed.interval_ms = parse_interval(v, &prog)?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("Unknown flag '{arg}'. Usage: {prog} {USAGE_ARGS}"));
            }
            _ => {
                if parsed.url.is_none() {
                    parsed.url = Some(arg);
                } else {
                    return Err(format!(
                        "Unexpected argument. Usage: {prog} {USAGE_ARGS}"
                    ));
                }
            }
        }
    }
    Ok(parsed)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let parsed = match parse_args(env::args()) {
        Ok(v) => v,
        Err(msg) if msg.starts_with("Usage:") => {
            eprintln!("{msg}");
            return Ok(());
        }
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
    };

    let Some(entry) = resolve_endpoint(&parsed)? else {
        return Ok(());
    };
    let interval = parsed
        .interval_ms
        .or(entry.interval_ms)
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_INTERVAL);

    let source = HttpSource::new(&entry.url, entry.tls_ca.as_deref().map(Path::new))?;

    if parsed.dry_run {
        println!("endpoint: {}", source.url());
        println!("interval: {}ms", interval.as_millis());
        return Ok(());
    }

    if parsed.once {
        logging::init_stderr()?;
        return run_once(&source).await;
    }

    let log_path = logging::init_file()?;
    tracing::info!(endpoint = %source.url(), log = %log_path.display(), "starting dashboard");
    let mut app = App::new(source.url().to_string(), interval);
    app.run(source).await
}

/// Headless mode: one fetch, report printed to stdout.
async fn run_once(source: &HttpSource) -> anyhow::Result<()> {
    let snapshot = source
        .fetch()
        .await
        .with_context(|| format!("fetching {}", source.url()))?;
    let a = classify(&snapshot);
    println!("host: {}", snapshot.system.hostname);
    println!("label: {}", a.label);
    for i in &a.insights {
        println!("- {i}");
    }
    if a.alert_requested {
        println!("ALERT: system under critical load");
    }
    Ok(())
}

fn store_profile(profiles: &mut ProfilesFile, name: &str, entry: ProfileEntry) {
    profiles.profiles.insert(name.to_string(), entry);
    if let Err(e) = save_profiles(profiles) {
        eprintln!("warning: could not save profile '{name}': {e}");
    }
}

// Ok(None) means the user aborted or nothing could be resolved
fn resolve_endpoint(parsed: &ParsedArgs) -> anyhow::Result<Option<ProfileEntry>> {
    let mut profiles = load_profiles();
    let req = ProfileRequest {
        profile_name: parsed.profile.clone(),
        url: parsed.url.clone(),
        tls_ca: parsed.tls_ca.clone(),
    };

    let entry = match req.resolve(&profiles) {
        ResolveProfile::Direct(url, tls_ca) => {
            let entry = ProfileEntry {
                url,
                tls_ca,
                interval_ms: parsed.interval_ms,
            };
            if let Some(name) = parsed.profile.as_deref() {
                match profiles.profiles.get(name).cloned() {
                    // New profile: auto-save immediately
                    None => store_profile(&mut profiles, name, entry.clone()),
                    Some(existing) if existing != entry => {
                        let overwrite = parsed.save
                            || prompt_yes_no(&format!(
                                "Overwrite existing profile '{name}'? [y/N]: "
                            ));
                        if overwrite {
                            store_profile(&mut profiles, name, entry.clone());
                        }
                    }
                    Some(_) => {}
                }
            }
            entry
        }
        ResolveProfile::Loaded(entry) => entry,
        ResolveProfile::PromptSelect(names) => {
            eprintln!("Select profile:");
            for (i, n) in names.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, n);
            }
            let line = prompt_string("Enter number (or blank to abort): ")?;
            let picked = line
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|idx| idx.checked_sub(1))
                .and_then(|idx| names.get(idx))
                .and_then(|name| profiles.profiles.get(name));
            match picked {
                Some(entry) => entry.clone(),
                None => return Ok(None),
            }
        }
        ResolveProfile::PromptCreate(name) => {
            eprintln!("Profile '{name}' does not exist yet.");
            let url = prompt_string("Enter URL (http://HOST:PORT): ")?;
            if url.trim().is_empty() {
                return Ok(None);
            }
            let ca = prompt_string("Enter TLS CA path (or leave blank): ")?;
            let entry = ProfileEntry {
                url: url.trim().to_string(),
                tls_ca: Some(ca.trim().to_string()).filter(|c| !c.is_empty()),
                interval_ms: parsed.interval_ms,
            };
            store_profile(&mut profiles, &name, entry.clone());
            entry
        }
        ResolveProfile::None => {
            eprintln!("No URL provided and no profiles to select.");
            eprintln!("Usage: sysglance {USAGE_ARGS}");
            return Ok(None);
        }
    };
    Ok(Some(entry))
}

fn prompt_yes_no(prompt: &str) -> bool {
    eprint!("{prompt}");
    let _ = io::stderr().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_ok() {
        matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

fn prompt_string(prompt: &str) -> io::Result<String> {
    eprint!("{prompt}");
    let _ = io::stderr().flush();
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}
