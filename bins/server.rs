use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging() {
    // Load .env first so RUST_LOG from the file takes effect.
    dotenv().ok();
    common::utils::logging::init_logging_default();
    info!(service = "item-api", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    init_logging();

    // Per-process context for log correlation; no sensitive data.
    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    // Panics must end up in the structured log, not just stderr.
    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "item-api",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    // Thread count: config file first, TOKIO_WORKER_THREADS as fallback,
    // tokio's own default otherwise.
    let worker_threads = configs::AppConfig::load_and_validate()
        .ok()
        .and_then(|cfg| cfg.server.worker_threads)
        .or_else(|| {
            std::env::var("TOKIO_WORKER_THREADS")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
        });

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(
                service = "item-api",
                event = "runtime_build_failed",
                error = %e,
                "failed to build tokio runtime"
            );
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "item-api",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "item-api starting"
    );

    // Run the server in its own task and race it against ctrl-c. The store
    // is in-memory only, so shutdown has nothing to flush.
    rt.block_on(async move {
        let server_task = tokio::spawn(async move {
            if let Err(e) = server::run().await {
                error!(service = "item-api", event = "run_failed", error = %e, "server::run returned error");
                return Err(e);
            }
            Ok(())
        });

        tokio::select! {
            res = server_task => match res {
                Ok(Ok(())) => {
                    info!(service = "item-api", event = "stop", %service_id, pid, "server stopped normally");
                    std::process::ExitCode::SUCCESS
                }
                Ok(Err(_)) => std::process::ExitCode::FAILURE,
                Err(e) => {
                    error!(service = "item-api", event = "task_join_error", error = %e, "server task join error");
                    std::process::ExitCode::FAILURE
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!(service = "item-api", event = "shutdown_signal", %service_id, pid, "received ctrl-c, shutting down");
                std::process::ExitCode::SUCCESS
            }
        }
    })
}
