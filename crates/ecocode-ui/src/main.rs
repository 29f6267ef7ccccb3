//! Eco-Code Desktop Application
//!
//! GPUI-based desktop shell for the Eco-Code assistant workbench.

use ecocode_core::config::{data_dir, default_config_path};
use ecocode_core::WorkbenchConfig;
use ecocode_ui::{Theme, WorkbenchModel};
use gpui::*;
use std::borrow::Cow;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod window;

use window::WorkbenchWindow;

/// Asset source that loads from the filesystem relative to the executable or current directory
struct FileAssetSource {
    base_path: PathBuf,
}

impl FileAssetSource {
    fn new() -> Self {
        let base_path = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

        // Check common locations for assets
        let candidates = [
            base_path.join("assets"),
            PathBuf::from("assets"),
            base_path.join("../assets"),
            base_path.join("../../assets"),
        ];

        let base_path = candidates
            .into_iter()
            .find(|p| p.exists())
            .unwrap_or_else(|| PathBuf::from("assets"));

        info!("Asset base path: {:?}", base_path);
        Self { base_path }
    }
}

impl AssetSource for FileAssetSource {
    fn load(&self, path: &str) -> anyhow::Result<Option<Cow<'static, [u8]>>> {
        let full_path = self.base_path.join(path);
        match std::fs::read(&full_path) {
            Ok(bytes) => Ok(Some(Cow::Owned(bytes))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Asset not found: {:?}", full_path);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn list(&self, path: &str) -> anyhow::Result<Vec<SharedString>> {
        let full_path = self.base_path.join(path);
        let mut entries = Vec::new();
        if let Ok(dir) = std::fs::read_dir(&full_path) {
            for entry in dir.flatten() {
                if let Some(name) = entry.file_name().to_str() {
                    entries.push(name.to_string().into());
                }
            }
        }
        Ok(entries)
    }
}

fn load_config() -> WorkbenchConfig {
    let path = default_config_path();
    WorkbenchConfig::load_or_default(&path).unwrap_or_else(|e| {
        warn!("Ignoring unreadable config {:?}: {}", path, e);
        WorkbenchConfig::default()
    })
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Eco-Code v{}", env!("CARGO_PKG_VERSION"));

    let model = WorkbenchModel::new(load_config(), &data_dir())?;

    App::new()
        .with_assets(FileAssetSource::new())
        .run(move |cx: &mut AppContext| {
            let theme = Theme::dark();
            info!("Theme initialized: dark mode");

            let window_options = WindowOptions {
                titlebar: Some(TitlebarOptions {
                    title: Some("Eco-Code Assistant".into()),
                    appears_transparent: false,
                    traffic_light_position: None,
                }),
                window_bounds: Some(WindowBounds::Windowed(Bounds {
                    origin: point(px(100.0), px(100.0)),
                    size: size(px(1280.0), px(800.0)),
                })),
                focus: true,
                show: true,
                kind: WindowKind::Normal,
                is_movable: true,
                window_background: WindowBackgroundAppearance::Opaque,
                app_id: Some("dev.ecocode.app".to_string()),
                ..Default::default()
            };

            if let Err(e) = cx.open_window(window_options, |cx| {
                cx.new_view(|cx| WorkbenchWindow::new(cx, theme, model))
            }) {
                error!("Failed to open window: {}", e);
                cx.quit();
            }
        });

    Ok(())
}
