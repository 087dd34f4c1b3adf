//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    AnyView, App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, point, px, size,
};
use gpui_component::Root;
use tracing::{error, info};

use crate::assets::Assets;
use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::domain::config::LandingConfig;
use crate::domain::content::PageContent;
use crate::features::landing::LandingPage;
use crate::features::landing::controller::LandingController;
use crate::helpers::{MenuAction, new_key_bindings};
use crate::state::settings::LandingSettings;
use crate::state::store::LandingGlobalStore;

/// Run the landing application
pub fn run_app(config: LandingConfig, settings: LandingSettings, content: PageContent) {
    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        gpui_component::init(cx);

        // Set up action handlers
        cx.bind_keys(new_key_bindings());
        cx.on_action(|action: &MenuAction, cx: &mut App| match action {
            MenuAction::Quit => cx.quit(),
        });

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let bounds = settings.bounds().copied().unwrap_or_else(|| {
            Bounds::centered(
                None,
                size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
                cx,
            )
        });

        // Initialize global store
        let settings = cx.new(|_| settings);
        cx.set_global(LandingGlobalStore::new(settings));

        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(content.brand.name.clone())),
                appears_transparent: true,
                traffic_light_position: Some(point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        info!(
            variant = config.variant.name(),
            locale = config.locale.code(),
            "opening landing window"
        );
        let opened = cx.open_window(window_options, |window, cx| {
            window.on_window_should_close(cx, |window, cx| {
                LandingController::default().remember_bounds(window.bounds(), cx);
                true
            });
            let page = cx.new(|cx| LandingPage::new(config, content, window, cx));
            cx.new(|cx| Root::new(AnyView::from(page), window, cx))
        });

        if let Err(e) = opened {
            error!(error = %e, "failed to open window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
