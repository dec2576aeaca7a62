mod bootstrap;
mod plain;

use anyhow::Result;
use dash_core::settings::Settings;
use dash_runtime::SessionCache;
use dash_ui::App;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("sales-dash v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Workbook: {}, View: {}, Theme: {}",
        settings.workbook.display(),
        settings.view,
        settings.theme
    );

    match settings.view.as_str() {
        "plain" => plain::run(&settings.workbook),
        _ => {
            let cache = SessionCache::new(settings.workbook.clone());
            App::new(&settings.theme, cache).run()?;
            Ok(())
        }
    }
}
