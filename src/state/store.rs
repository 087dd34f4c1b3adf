//! Global Store
//!
//! Shares the settings entity with every view and persists changes.

use crate::state::settings::LandingSettings;
use gpui::{App, AppContext, Context, Entity, Global};
use tracing::{error, info};

/// Global store accessible via `cx.global::<LandingGlobalStore>()`
#[derive(Clone)]
pub struct LandingGlobalStore {
    settings: Entity<LandingSettings>,
}

impl LandingGlobalStore {
    pub fn new(settings: Entity<LandingSettings>) -> Self {
        Self { settings }
    }

    /// Get the settings entity
    pub fn settings(&self) -> Entity<LandingSettings> {
        self.settings.clone()
    }

    /// Read settings
    pub fn read<'a>(&self, cx: &'a App) -> &'a LandingSettings {
        self.settings.read(cx)
    }

    /// Update settings
    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut LandingSettings, &mut Context<LandingSettings>) -> R,
    ) -> C::Result<R> {
        self.settings.update(cx, update)
    }
}

impl Global for LandingGlobalStore {}

/// Update settings and save them to disk in the background
pub fn update_settings_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut LandingSettings, &mut Context<LandingSettings>) + 'static,
{
    let store = cx.global::<LandingGlobalStore>().clone();

    cx.spawn(async move |cx| {
        let current = store.update(cx, |settings, cx| {
            mutation(settings, cx);
            settings.clone()
        });

        if let Ok(settings) = current {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = settings.save() {
                        error!(error = %e, action = action_name, "Failed to save settings");
                    } else {
                        info!(action = action_name, "Settings saved");
                    }
                })
                .await;
        }

        cx.update(|cx| cx.refresh_windows()).ok();
    })
    .detach();
}
