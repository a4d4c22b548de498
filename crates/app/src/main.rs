mod args;

use std::sync::Arc;

use asl_core::model::AuthToken;
use clap::Parser;
use color_eyre::eyre::Result;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, AuthApi, LessonApi, QueryCache};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

use crate::args::{Args, DEFAULT_LOG_LEVEL};

struct DesktopApp {
    services: AppServices,
    token: Option<AuthToken>,
}

impl UiApp for DesktopApp {
    fn auth_api(&self) -> Arc<dyn AuthApi> {
        self.services.auth()
    }

    fn lesson_api(&self) -> Arc<dyn LessonApi> {
        self.services.lessons()
    }

    fn query_cache(&self) -> QueryCache {
        self.services.queries()
    }

    fn initial_token(&self) -> Option<AuthToken> {
        self.token.clone()
    }
}

fn init_logging(args: &Args) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = args.log_directive(rust_log.as_deref());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn initial_token(raw: Option<&str>) -> Option<AuthToken> {
    let raw = raw?;
    match AuthToken::new(raw) {
        Ok(token) => Some(token),
        Err(err) => {
            warn!(error = %err, "ignoring configured token");
            None
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_logging(&args);

    let config = args.api_config();
    let services = AppServices::http(&config)?;
    let token = initial_token(args.token.as_deref());
    info!(
        base_url = %config.base_url,
        signed_in = token.is_some(),
        "starting ASL desktop client"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services, token });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("ASL")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}
