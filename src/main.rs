use newsdesk::application::client::SearchClient;
use newsdesk::application::system::Application;
use newsdesk::config::Config;
use newsdesk::interfaces::NewsDeskApp;
use newsdesk::interfaces::design_system::DesignSystem;

use tracing::{Level, info};
use tracing_subscriber::prelude::*;

// A writer that sends logs to the UI via a crossbeam channel
struct ChannelWriter {
    sender: crossbeam_channel::Sender<String>,
}

impl std::io::Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf).to_string();
        let _ = self.sender.try_send(msg);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[derive(Clone)]
struct ChannelWriterFactory {
    sender: crossbeam_channel::Sender<String>,
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for ChannelWriterFactory {
    type Writer = ChannelWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ChannelWriter {
            sender: self.sender.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Stdout + UI log panel
    let (log_tx, log_rx) = crossbeam_channel::unbounded();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    let ui_layer = tracing_subscriber::fmt::layer()
        .with_writer(ChannelWriterFactory { sender: log_tx })
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .with(ui_layer)
        .init();

    info!("Initializing Newsdesk...");

    let config = Config::from_env()?;
    let default_count = config.search.default_count;
    let verified_sources = config.search.verified_sources.clone();

    // The search pipeline lives on a tokio runtime in a background thread
    let (handle_tx, handle_rx) = crossbeam_channel::bounded(1);

    std::thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                tracing::error!("Failed to build Tokio runtime: {}", e);
                return;
            }
        };

        rt.block_on(async move {
            info!("Background Runtime Started.");

            let app = match Application::build(config) {
                Ok(app) => app,
                Err(e) => {
                    tracing::error!("Failed to build application: {}", e);
                    return;
                }
            };

            let _ = handle_tx.send(app.start());
            info!("Search pipeline running.");

            // Keep the runtime alive for the worker task
            std::future::pending::<()>().await;
        });
    });

    let search_handle = handle_rx
        .recv()
        .map_err(|_| anyhow::anyhow!("Search pipeline failed to start (see logs above)"))?;
    info!("Search pipeline connected. Launching UI.");

    let client = SearchClient::new(search_handle, log_rx);
    let app = NewsDeskApp::new(client, default_count, &verified_sources);

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_title("Newsdesk"),
        ..Default::default()
    };

    eframe::run_native(
        "Newsdesk",
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(DesignSystem::theme());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
