use models::Profile;
use serde::Serialize;
use service::{observability, ApiStatus, PublicClient};
use tracing::{debug, error, info};
use utils::{format_date_str, format_technologies, truncate_text, DateLocale};
use uuid::Uuid;

const SUMMARY_LEN: usize = 140;

fn init_logging() {
    // .env first so RUST_LOG and PUBLIC_API_URL apply
    common::env::load_dotenv();
    if common::env::var_non_empty("LOG_FORMAT").as_deref() == Some("json") {
        common::utils::logging::init_logging_json();
    } else {
        common::utils::logging::init_logging_default();
    }
    info!(service = "site", event = "logger_init", "tracing subscriber initialized");
}

/// What a project card on the home page needs.
#[derive(Debug, Serialize)]
struct ProjectCard {
    id: i64,
    title: String,
    summary: String,
    image_src: String,
    technologies: Vec<String>,
    github_link: Option<String>,
    live_demo_link: Option<String>,
    updated: Option<String>,
}

#[derive(Debug, Serialize)]
struct SiteSnapshot {
    api_status: ApiStatus,
    profile: Profile,
    projects: Vec<ProjectCard>,
}

async fn render_snapshot(client: &PublicClient) -> SiteSnapshot {
    let (projects, profile) = tokio::join!(client.get_projects(), client.get_profile());
    let projects = projects
        .into_iter()
        .map(|p| ProjectCard {
            technologies: format_technologies(p.tech_section.as_deref()),
            summary: truncate_text(&p.description, SUMMARY_LEN),
            updated: format_date_str(&p.updated_at, DateLocale::Es),
            id: p.id,
            title: p.title,
            image_src: p.image_src,
            github_link: p.github_link,
            live_demo_link: p.live_demo_link,
        })
        .collect();
    SiteSnapshot { api_status: client.status(), profile, projects }
}

async fn run() -> anyhow::Result<()> {
    let cfg = configs::AppConfig::load_and_validate()?;
    info!(base_url = %cfg.api.base_url, timeout_secs = cfg.api.public_timeout_secs, "building public client");
    let client = PublicClient::new(&cfg.api)?;

    let snapshot = render_snapshot(&client).await;
    if snapshot.api_status != ApiStatus::Available {
        info!(status = %snapshot.api_status, "rendering with fallback content");
    }
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    debug!(metrics = %observability::gather_metrics(), "client metrics");
    Ok(())
}

fn main() -> std::process::ExitCode {
    init_logging();

    let service_id = Uuid::new_v4();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(service = "site", event = "panic", %service_id, message = %info, "unhandled panic occurred");
    }));

    info!(service = "site", event = "start", %service_id, version, "site snapshot starting");

    let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "site", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    match rt.block_on(run()) {
        Ok(()) => {
            info!(service = "site", event = "stop", %service_id, "site snapshot finished");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "site", event = "run_failed", error = %e, "site snapshot failed");
            std::process::ExitCode::FAILURE
        }
    }
}
