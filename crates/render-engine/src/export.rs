//! Screenshot export: background skin + rendered overlay into one PNG.
//!
//! ```text
//!  snapshot.background_image ──► load (http(s) | file) ──┐
//!                                                        ├── composite ── PNG ── <download_dir>/<file_name>
//!  capture target ──► render(snapshot) (content layer) ──┘
//! ```
//!
//! The exporter works from a [`StoreSnapshot`] taken at invocation time.
//! Every failure is caught here and reported through the [`Notifier`];
//! nothing propagates to the caller as an error.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::{DynamicImage, RgbaImage};

use standings_common::config::ExportSettings;
use standings_common::error::StandingsError;
use standings_store::StoreSnapshot;

use crate::compositor::{composite, encode_png};

/// Why an export attempt failed.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("capture target {id:?} not found")]
    TargetNotFound { id: String },

    #[error("no background image configured")]
    NoBackground,

    #[error("failed to load background {reference:?}: {message}")]
    BackgroundLoad { reference: String, message: String },

    #[error("failed to render content layer: {message}")]
    ContentLoad { message: String },

    #[error("content layer has no area")]
    EmptyCanvas,

    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl From<ExportError> for StandingsError {
    fn from(err: ExportError) -> Self {
        StandingsError::export(err.to_string())
    }
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// Transient, non-blocking user notifications (toasts).
pub trait Notifier: Send + Sync {
    fn notify(&self, level: NotificationLevel, message: &str);
}

/// Notifier that writes to the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, level: NotificationLevel, message: &str) {
        match level {
            NotificationLevel::Info => tracing::info!(target: "notify", "{message}"),
            NotificationLevel::Success => tracing::info!(target: "notify", success = true, "{message}"),
            NotificationLevel::Error => tracing::error!(target: "notify", "{message}"),
        }
    }
}

/// A renderable region that can produce the overlay's content layer.
pub trait CaptureTarget: Send + Sync {
    /// Rasterize the region for `snapshot`. Transparent pixels let the
    /// background through.
    fn render(&self, snapshot: &StoreSnapshot) -> Result<RgbaImage, ExportError>;
}

/// Content layer pre-rendered to an image file by a presentation surface.
#[derive(Debug, Clone)]
pub struct ImageFileTarget {
    path: PathBuf,
}

impl ImageFileTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CaptureTarget for ImageFileTarget {
    fn render(&self, _snapshot: &StoreSnapshot) -> Result<RgbaImage, ExportError> {
        image::open(&self.path)
            .map(|img| img.to_rgba8())
            .map_err(|e| ExportError::ContentLoad {
                message: format!("{}: {e}", self.path.display()),
            })
    }
}

/// Capture targets addressable by id.
#[derive(Default)]
pub struct SurfaceRegistry {
    targets: HashMap<String, Arc<dyn CaptureTarget>>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: impl Into<String>, target: Arc<dyn CaptureTarget>) {
        self.targets.insert(id.into(), target);
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn CaptureTarget>> {
        self.targets.get(id).cloned()
    }
}

/// Produces the downloadable screenshot.
pub struct ScreenshotExporter {
    settings: ExportSettings,
    notifier: Arc<dyn Notifier>,
    client: reqwest::Client,
}

impl ScreenshotExporter {
    pub fn new(settings: ExportSettings, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            settings,
            notifier,
            client: reqwest::Client::new(),
        }
    }

    /// Where the next export will be written.
    pub fn output_path(&self) -> PathBuf {
        self.settings.output_path()
    }

    /// Capture `target_id` for `snapshot` and write the PNG.
    ///
    /// Returns the written path, or `None` after notifying the user of the
    /// failure.
    pub async fn capture(
        &self,
        snapshot: &StoreSnapshot,
        target_id: &str,
        surfaces: &SurfaceRegistry,
    ) -> Option<PathBuf> {
        let Some(target) = surfaces.get(target_id) else {
            tracing::warn!(target_id, "Capture target not registered");
            self.notifier
                .notify(NotificationLevel::Error, "Screenshot area not found!");
            return None;
        };

        self.notifier
            .notify(NotificationLevel::Info, "Capturing screenshot...");

        match self.render_to_file(snapshot, target.as_ref()).await {
            Ok(path) => {
                tracing::info!(output = %path.display(), "Screenshot exported");
                self.notifier
                    .notify(NotificationLevel::Success, "Screenshot saved!");
                Some(path)
            }
            Err(e) => {
                tracing::error!(error = %e, "Screenshot error");
                self.notifier
                    .notify(NotificationLevel::Error, "Failed to capture screenshot");
                None
            }
        }
    }

    /// The export pipeline without the notification boundary.
    pub async fn render_to_file(
        &self,
        snapshot: &StoreSnapshot,
        target: &dyn CaptureTarget,
    ) -> Result<PathBuf, ExportError> {
        let background =
            load_background(&self.client, &snapshot.tournament_info.background_image).await?;
        let content = target.render(snapshot)?;
        let composed = composite(&background, &content)?;
        let png = encode_png(&composed)?;

        let output = self.output_path();
        if let Some(parent) = output.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ExportError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }
        tokio::fs::write(&output, png)
            .await
            .map_err(|e| ExportError::Io {
                path: output.clone(),
                source: e,
            })?;

        Ok(output)
    }
}

/// Load a background image from an `http(s)://` URL, a `file://` URL, or a
/// plain filesystem path.
pub async fn load_background(
    client: &reqwest::Client,
    reference: &str,
) -> Result<DynamicImage, ExportError> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(ExportError::NoBackground);
    }

    let fail = |message: String| ExportError::BackgroundLoad {
        reference: reference.to_string(),
        message,
    };

    let bytes = if reference.starts_with("http://") || reference.starts_with("https://") {
        let response = client
            .get(reference)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| fail(e.to_string()))?;
        response
            .bytes()
            .await
            .map_err(|e| fail(e.to_string()))?
            .to_vec()
    } else {
        let path = Path::new(reference.strip_prefix("file://").unwrap_or(reference));
        tokio::fs::read(path).await.map_err(|e| fail(e.to_string()))?
    };

    image::load_from_memory(&bytes).map_err(|e| fail(e.to_string()))
}
