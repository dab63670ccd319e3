use anyhow::Context;
use tokio::signal;
use tracing::{error, info};
use truthpulse::{
    AppState, TruthPulseConfig,
    cli::{
        Cli, Commands,
        init::{self, InitConfig, InitResult},
        output::Output,
    },
    create_app, init_tracing,
};
use truthpulse_core::Page;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the file is only a convenience for local runs.
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    match cli.command {
        None | Some(Commands::Serve) => serve(&cli, &output).await,
        Some(Commands::Init {
            ref path,
            force,
            ref host,
            port,
        }) => {
            let result = init::run(
                InitConfig {
                    path: path.clone(),
                    force,
                    host: host.clone(),
                    port,
                },
                &output,
            );
            match result {
                InitResult::Success | InitResult::AlreadyExists => Ok(()),
                InitResult::Error(e) => Err(anyhow::anyhow!("init failed: {e}")),
            }
        }
        Some(Commands::Config { full, validate }) => show_config(&cli, &output, full, validate),
        Some(Commands::Pages) => {
            list_pages(&output);
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<TruthPulseConfig> {
    let path = cli.config_path();
    TruthPulseConfig::load_or_default(&path, cli.config_is_explicit())
        .with_context(|| format!("failed to load configuration from {}", path.display()))
}

async fn serve(cli: &Cli, output: &Output) -> anyhow::Result<()> {
    let mut config = load_config(cli)?;
    if cli.verbose && std::env::var_os("RUST_LOG").is_none() {
        config.server.log_level = "debug".to_string();
    }
    init_tracing(&config.server);

    if cli.verbose {
        output.banner();
    }

    let bind_addr = config.server.bind_addr();
    let app = create_app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    let local_addr = listener.local_addr()?;

    info!("TruthPulse listening on http://{}", local_addr);
    info!("OpenAPI document at http://{}/api-docs/openapi.json", local_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("TruthPulse stopped");
    Ok(())
}

fn show_config(cli: &Cli, output: &Output, full: bool, validate: bool) -> anyhow::Result<()> {
    let path = cli.config_path();
    output.header("Configuration");

    let config = match load_config(cli) {
        Ok(config) => config,
        Err(e) => {
            output.error(&format!("{e:#}"));
            return Err(e);
        }
    };

    if validate {
        if path.exists() {
            output.success(&format!("{} is valid", path.display()));
        } else {
            output.success(&format!("no {}; defaults are valid", path.display()));
        }
    }

    if full {
        output.newline();
        output.block(&config.to_toml_string()?);
        return Ok(());
    }

    output.kv("file", &path.display().to_string());
    output.kv("file present", if path.exists() { "yes" } else { "no (defaults)" });
    output.kv("listen", &config.server.bind_addr());
    output.kv("log level", &config.server.log_level);
    output.kv("log format", &format!("{:?}", config.server.log_format).to_lowercase());
    output.kv("body limit", &format!("{} bytes", config.server.body_limit_bytes));
    output.kv(
        "cors",
        &if config.cors.allow_any_origin {
            "any origin".to_string()
        } else {
            config.cors.allowed_origins.join(", ")
        },
    );
    output.kv(
        "embedded ui",
        if config.ui.embed && cfg!(feature = "ui") {
            "on"
        } else {
            "off"
        },
    );
    output.hint("Use --full to print the effective configuration as TOML");
    Ok(())
}

fn list_pages(output: &Output) {
    output.header("Pages");
    output.newline();
    output.table_header(&["Path", "Title", "Navbar"]);
    for page in Page::ALL {
        output.table_row(&[page.path(), page.title(), if page.in_nav() { "yes" } else { "no" }]);
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {}", err);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => error!("failed to install SIGTERM handler: {}", err),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received SIGINT, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
