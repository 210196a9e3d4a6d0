//! App Shell Entry Point
//!
//! Interactive simulator for the session/route-guard core. Plays the
//! role the SPA shell plays in production: it owns the current path per
//! tab, runs every navigation through the guard, and follows redirects.
//! Uses `anyhow` for startup errors; application-level errors go through
//! `session`'s unified error types.

use std::env;
use std::sync::Arc;

use anyhow::Result;
use platform::file::FileStorage;
use routing::{RouteClassifier, RouteTable};
use session::application::{CheckSessionUseCase, SignInUseCase, SignOutUseCase};
use session::config::SessionConfig;
use session::models::{LoginRequest, SessionStatusResponse, SignupRequest};
use session::presentation::guard::{
    GuardConfig, GuardDecision, NavigationGuard, resolve_return_to,
};
use session::store::{StorageSessionRepository, is_session_key};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Repo = StorageSessionRepository<FileStorage>;
type Guard = NavigationGuard<Repo>;

/// One simulated browser tab
struct Tab {
    path: String,
    /// Set when the guard bounced this tab to login
    pending_return_to: Option<String>,
}

impl Tab {
    fn new() -> Self {
        Self {
            path: "/".to_string(),
            pending_return_to: None,
        }
    }
}

struct TabSet {
    tabs: Vec<Tab>,
    current: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shell=info,session=info,routing=info,platform=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Durable state, standing in for the browser profile
    let state_path =
        env::var("SHELL_STATE_PATH").unwrap_or_else(|_| ".storefront/state.json".to_string());
    let storage = Arc::new(FileStorage::open(&state_path).await);
    let repo = Arc::new(StorageSessionRepository::new(storage));

    tracing::info!(path = %state_path, "Opened state storage");

    // Startup check: did a session survive the restart?
    let check = CheckSessionUseCase::new(repo.clone());
    match check.user_data().await {
        Some(data) => tracing::info!(
            email = data.email.as_deref().unwrap_or(""),
            "Restored persisted session"
        ),
        None => tracing::info!("No persisted session, starting as guest"),
    }

    // Route surface; a broken table should be loud but not fatal
    let table = RouteTable::default();
    if let Err(e) = table.validate() {
        tracing::warn!(error = %e, "Route table failed validation, guard may misbehave");
    }
    let classifier = Arc::new(RouteClassifier::new(table));

    let session_config = Arc::new(SessionConfig::default());
    let guard = NavigationGuard::new(
        repo.clone(),
        classifier.clone(),
        Arc::new(GuardConfig::default()),
    );

    let tabs = Arc::new(Mutex::new(TabSet {
        tabs: vec![Tab::new()],
        current: 0,
    }));

    // Cross-tab sync: when another tab mutates the session, every open
    // tab re-runs the guard for its current path.
    spawn_storage_watcher(guard.clone(), tabs.clone());

    println!("storefront shell - commands: go <path> | login <email> [password] | signup <name> <email> [phone] | logout | status | tab [n] | quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let args: Vec<&str> = parts.collect();

        match command {
            "go" => {
                let Some(path) = args.first() else {
                    println!("usage: go <path>");
                    continue;
                };
                let mut set = tabs.lock().await;
                let current = set.current;
                navigate(&guard, &mut set.tabs[current], path.to_string()).await;
            }
            "login" => {
                let Some(email) = args.first() else {
                    println!("usage: login <email> [password]");
                    continue;
                };
                let mut set = tabs.lock().await;
                let current = set.current;
                let tab = &mut set.tabs[current];

                let request = LoginRequest {
                    email: email.to_string(),
                    password: args.get(1).unwrap_or(&"demo").to_string(),
                    return_to: tab.pending_return_to.clone(),
                };
                match request.validate() {
                    Err(e) => println!("   {}", e.to_app_error()),
                    Ok(input) => {
                        let session = SignInUseCase::new(repo.clone(), session_config.clone())
                            .execute(input)
                            .await;
                        println!(
                            "   signed in as {}",
                            session.email.as_ref().map(|e| e.as_str()).unwrap_or("(no email)")
                        );
                        let target = resolve_return_to(request.return_to.as_deref(), guard.config());
                        tab.pending_return_to = None;
                        navigate(&guard, tab, target).await;
                    }
                }
            }
            "signup" => {
                let (Some(name), Some(email)) = (args.first(), args.get(1)) else {
                    println!("usage: signup <name> <email> [phone]");
                    continue;
                };
                let mut set = tabs.lock().await;
                let current = set.current;
                let tab = &mut set.tabs[current];

                let request = SignupRequest {
                    name: name.to_string(),
                    email: email.to_string(),
                    phone: args.get(2).map(|p| p.to_string()),
                    password: "demo".to_string(),
                };
                match request.validate() {
                    Err(e) => println!("   {}", e.to_app_error()),
                    Ok(input) => {
                        let session = SignInUseCase::new(repo.clone(), session_config.clone())
                            .execute(input)
                            .await;
                        println!(
                            "   welcome, {}",
                            session
                                .display_name
                                .as_ref()
                                .map(|n| n.as_str())
                                .unwrap_or("creator")
                        );
                        let target = resolve_return_to(None, guard.config());
                        tab.pending_return_to = None;
                        navigate(&guard, tab, target).await;
                    }
                }
            }
            "logout" => {
                SignOutUseCase::new(repo.clone()).execute().await;
                let mut set = tabs.lock().await;
                let current = set.current;
                let path = set.tabs[current].path.clone();
                navigate(&guard, &mut set.tabs[current], path).await;
            }
            "status" => {
                let status = SessionStatusResponse::from(check.user_data().await);
                println!("{}", serde_json::to_string_pretty(&status)?);
                let set = tabs.lock().await;
                let tab = &set.tabs[set.current];
                println!(
                    "   tab {} of {} at {} ({})",
                    set.current + 1,
                    set.tabs.len(),
                    tab.path,
                    classifier.classify(&tab.path)
                );
            }
            "tab" => {
                let mut set = tabs.lock().await;
                match args.first() {
                    None => {
                        set.tabs.push(Tab::new());
                        set.current = set.tabs.len() - 1;
                        println!("   opened tab {}", set.current + 1);
                    }
                    Some(n) => match n.parse::<usize>() {
                        Ok(n) if n >= 1 && n <= set.tabs.len() => {
                            set.current = n - 1;
                            println!("   tab {} at {}", n, set.tabs[set.current].path);
                        }
                        _ => println!("   no such tab"),
                    },
                }
            }
            "quit" | "exit" => break,
            _ => println!("unknown command: {command}"),
        }
    }

    Ok(())
}

/// Run a navigation through the guard, following redirects.
///
/// The route lists keep the two redirect rules mutually exclusive, so
/// the chain settles immediately; the hop bound is a backstop.
async fn navigate(guard: &Guard, tab: &mut Tab, target: String) {
    let mut path = target;
    for _ in 0..4 {
        match guard.evaluate(&path).await {
            GuardDecision::Render => {
                tab.path = path;
                println!("   -> {}", tab.path);
                return;
            }
            GuardDecision::Redirect(redirect) => {
                println!("   redirect ({}) -> {}", redirect.reason, redirect.to);
                if redirect.return_to.is_some() {
                    tab.pending_return_to = redirect.return_to;
                }
                path = redirect.to;
            }
        }
    }
    tracing::warn!(path = %path, "Redirect chain did not settle, staying on current path");
}

fn spawn_storage_watcher(guard: Guard, tabs: Arc<Mutex<TabSet>>) {
    tokio::spawn(async move {
        let mut events = guard.changes();
        loop {
            let event = match events.recv().await {
                Ok(event) => event,
                Err(tokio::sync::broadcast::error::RecvError::Lagged(_)) => continue,
                Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
            };

            if !is_session_key(&event.key) {
                continue;
            }

            // Idempotent: re-running the same checks is harmless
            let mut set = tabs.lock().await;
            for (i, tab) in set.tabs.iter_mut().enumerate() {
                if let GuardDecision::Redirect(redirect) = guard.evaluate(&tab.path).await {
                    tracing::info!(
                        tab = i + 1,
                        from = %tab.path,
                        to = %redirect.to,
                        "Session changed in storage, tab moved"
                    );
                    if redirect.return_to.is_some() {
                        tab.pending_return_to = redirect.return_to;
                    }
                    tab.path = redirect.to;
                }
            }
        }
    });
}
