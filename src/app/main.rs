/**
 * MedConnect - Main Entry Point
 *
 * Builds the runtime configuration, installs the tracing subscriber
 * and hands the application state to eframe.
 */
use eframe::egui;
use medconnect::app::{state::AppState, theme, views, Config};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // A malformed environment is a wiring defect; abort loudly instead
    // of running with guessed values.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("startup aborted: {err}");
            std::process::exit(2);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "MedConnect",
        options,
        Box::new(move |cc| {
            theme::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(MedConnectApp::new(config)))
        }),
    )
}

/// Main application wrapper around [`AppState`].
struct MedConnectApp {
    state: AppState,
}

impl MedConnectApp {
    fn new(config: Config) -> Self {
        Self {
            state: AppState::with_config(config),
        }
    }
}

impl eframe::App for MedConnectApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.tick();

        views::render_top_bar(ctx, &mut self.state);
        views::render_footer(ctx);
        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint();
    }
}
