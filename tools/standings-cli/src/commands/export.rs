//! Export the overlay as a screenshot.

use std::path::PathBuf;
use std::sync::Arc;

use standings_common::config::AppConfig;
use standings_render::{ImageFileTarget, ScreenshotExporter, SurfaceRegistry, TracingNotifier};
use standings_store::StoreContext;

/// Id under which the rendered point-table page is registered.
const CAPTURE_TARGET: &str = "point-table-page";

pub async fn run(
    context: &StoreContext,
    config: &AppConfig,
    content: PathBuf,
    output_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut settings = config.export.clone();
    if let Some(dir) = output_dir {
        settings.download_dir = dir;
    }

    let mut surfaces = SurfaceRegistry::new();
    if content.exists() {
        surfaces.register(CAPTURE_TARGET, Arc::new(ImageFileTarget::new(&content)));
    }

    // Taken once so edits made while the export runs cannot leak into it.
    let snapshot = context.with(|store| store.snapshot());

    let exporter = ScreenshotExporter::new(settings, Arc::new(TracingNotifier));
    match exporter.capture(&snapshot, CAPTURE_TARGET, &surfaces).await {
        Some(path) => {
            println!("Screenshot saved to {}", path.display());
            Ok(())
        }
        None => anyhow::bail!("Screenshot export failed"),
    }
}
