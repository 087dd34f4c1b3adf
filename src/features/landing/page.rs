//! Landing Page
//!
//! Header over a scrolling column: hero, tagline, sections and footer. Each
//! scroll item owns a one-shot reveal driven by its on-screen bounds.

use std::rc::Rc;
use std::time::Instant;

use gpui::{
    App, Context, Entity, FocusHandle, Pixels, Point, Render, ScrollHandle, SharedString,
    Subscription, Window, div, point, prelude::*, px,
};
use gpui_component::input::{InputEvent, InputState};
use tracing::{debug, error, info, warn};

use crate::components::composite::dialog::Dialog;
use crate::components::layout::NavigateHandler;
use crate::components::layout::footer::Footer;
use crate::components::layout::header::Header;
use crate::components::layout::shell::Shell;
use crate::constants::REVEAL_THRESHOLD;
use crate::domain::config::{LandingConfig, PageVariant};
use crate::domain::content::{AnchorTarget, PageContent, TOP_ANCHOR};
use crate::domain::newsletter::NewsletterForm;
use crate::domain::reveal::{Reveal, RevealTimeline};
use crate::domain::viewport::{Extent, anchor_offset};
use crate::features::landing::blocks::{self, BlockContext, NewsletterBinding, cta_button};
use crate::features::landing::controller::LandingController;
use crate::helpers::{PAGE_CONTEXT, PageAction};
use crate::i18n::{Locale, tr, tr_email, tr_year};
use crate::state::settings::LandingSettings;
use crate::state::store::LandingGlobalStore;

/// One child of the scroll container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Hero,
    Tagline,
    Section(usize),
    Footer,
}

/// Scroll items of `content`, top to bottom
pub fn outline(content: &PageContent) -> Vec<PageItem> {
    let mut items = vec![PageItem::Hero];
    if content.tagline.is_some() {
        items.push(PageItem::Tagline);
    }
    items.extend((0..content.sections.len()).map(PageItem::Section));
    items.push(PageItem::Footer);
    items
}

/// Scroll item an anchor target lands on
pub fn item_index(items: &[PageItem], target: AnchorTarget) -> Option<usize> {
    match target {
        AnchorTarget::Top => Some(0),
        AnchorTarget::Section(section) => items
            .iter()
            .position(|item| *item == PageItem::Section(section)),
    }
}

fn reveal_for(item: PageItem, content: &PageContent) -> Reveal {
    match item {
        PageItem::Hero => Reveal::new(content.hero.presence().timeline()),
        PageItem::Tagline => Reveal::new(RevealTimeline::new(1)),
        PageItem::Section(ix) => match content.sections.get(ix) {
            Some(section) => Reveal::new(section.slot_presence().timeline()),
            None => Reveal::settled(RevealTimeline::new(1)),
        },
        PageItem::Footer => Reveal::settled(RevealTimeline::new(1)),
    }
}

/// Landing page view
pub struct LandingPage {
    variant: PageVariant,
    locale: Locale,
    year: i32,
    content: PageContent,
    items: Vec<PageItem>,
    reveals: Vec<Reveal>,
    scroll: ScrollHandle,
    last_offset: Point<Pixels>,
    controller: LandingController,
    form: NewsletterForm,
    email: Entity<InputState>,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl LandingPage {
    pub fn new(
        config: LandingConfig,
        content: PageContent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let placeholder = Self::placeholder(&content);
        let email = cx.new(|cx| InputState::new(window, cx).placeholder(placeholder));

        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        let mut subscriptions = vec![cx.subscribe_in(&email, window, Self::on_email_event)];

        // Follow persisted preferences changed from any window
        if let Some(store) = cx.try_global::<LandingGlobalStore>() {
            let settings = store.settings();
            subscriptions.push(cx.observe_in(&settings, window, Self::on_settings_changed));
        }

        let items = outline(&content);
        let reveals = items.iter().map(|item| reveal_for(*item, &content)).collect();

        Self {
            variant: config.variant,
            locale: config.locale,
            year: config.year,
            content,
            items,
            reveals,
            scroll: ScrollHandle::new(),
            last_offset: Point::default(),
            controller: LandingController::default(),
            form: NewsletterForm::new(),
            email,
            focus_handle,
            _subscriptions: subscriptions,
        }
    }

    fn placeholder(content: &PageContent) -> SharedString {
        content
            .newsletter()
            .map(|(_, newsletter)| SharedString::from(newsletter.placeholder.clone()))
            .unwrap_or_default()
    }

    fn on_email_event(
        &mut self,
        state: &Entity<InputState>,
        event: &InputEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match event {
            InputEvent::Change => {
                let value = state.read(cx).value();
                self.form.input(&value);
                cx.notify();
            }
            InputEvent::PressEnter { .. } => self.submit(window, cx),
            _ => {}
        }
    }

    fn on_settings_changed(
        &mut self,
        settings: Entity<LandingSettings>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let (variant, locale) = {
            let settings = settings.read(cx);
            (settings.variant(), settings.locale())
        };

        if locale != self.locale {
            info!(locale = locale.code(), "switching page language");
            self.locale = locale;
        }
        if variant != self.variant {
            self.load_variant(variant, window, cx);
        }
        cx.notify();
    }

    /// Rebuild the page for `variant`. The email draft starts over.
    fn load_variant(&mut self, variant: PageVariant, window: &mut Window, cx: &mut Context<Self>) {
        let content = match PageContent::for_variant(variant) {
            Ok(content) => content,
            Err(e) => {
                error!(error = %e, variant = variant.name(), "failed to load page content");
                return;
            }
        };
        info!(variant = variant.name(), "switching page layout");

        let placeholder = Self::placeholder(&content);
        self.email.update(cx, |state, cx| {
            state.set_value("", window, cx);
            state.set_placeholder(placeholder, window, cx);
        });

        self.items = outline(&content);
        self.reveals = self
            .items
            .iter()
            .map(|item| reveal_for(*item, &content))
            .collect();
        self.content = content;
        self.variant = variant;
        self.form = NewsletterForm::new();
        self.scroll.set_offset(Point::default());
        self.last_offset = Point::default();
    }

    fn submit(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        // The dialog is modal, so the field must stop taking keystrokes
        if self.controller.submit(&mut self.form) {
            window.focus(&self.focus_handle);
        }
        cx.notify();
    }

    fn dismiss(&mut self, cx: &mut Context<Self>) {
        if self.form.acknowledgement().is_some() {
            self.form.dismiss();
            cx.notify();
        }
    }

    /// Scroll so the item behind `anchor` sits at the top of the viewport
    pub fn navigate(&mut self, anchor: &str, cx: &mut Context<Self>) {
        let Some(ix) = self
            .content
            .resolve(anchor)
            .and_then(|target| item_index(&self.items, target))
        else {
            warn!(anchor, "link to unknown anchor");
            return;
        };
        info!(anchor, item = ix, "scrolling to anchor");

        let offset = self.scroll.offset();
        match self.on_screen(ix) {
            Some(item) => {
                let viewport_top = f32::from(self.scroll.bounds().origin.y);
                let y = anchor_offset(viewport_top, item.top, f32::from(offset.y));
                self.scroll.set_offset(point(offset.x, px(y)));
            }
            // Not laid out yet
            None => self.scroll.scroll_to_item(ix),
        }
        cx.notify();
    }

    fn navigate_handler(&self, cx: &mut Context<Self>) -> NavigateHandler {
        let page = cx.weak_entity();
        Rc::new(move |anchor: &SharedString, _: &mut Window, cx: &mut App| {
            page.update(cx, |this, cx| this.navigate(anchor, cx)).ok();
        })
    }

    fn on_page_action(&mut self, action: &PageAction, _: &mut Window, cx: &mut Context<Self>) {
        match action {
            PageAction::ToggleLocale => self.controller.toggle_locale(cx),
            PageAction::ToggleVariant => self.controller.toggle_variant(cx),
            PageAction::ScrollToTop => self.navigate(TOP_ANCHOR, cx),
            PageAction::DismissDialog => self.dismiss(cx),
        }
    }

    /// Vertical extent of scroll item `ix` as currently drawn
    fn on_screen(&self, ix: usize) -> Option<Extent> {
        let bounds = self.scroll.bounds_for_item(ix)?;
        let top = f32::from(bounds.origin.y + self.scroll.offset().y);
        Some(Extent::new(top, top + f32::from(bounds.size.height)))
    }

    /// Start reveals entering the viewport and advance running ones.
    /// Returns whether another frame is needed.
    fn drive_reveals(&mut self, now: Instant) -> bool {
        let bounds = self.scroll.bounds();
        let top = f32::from(bounds.origin.y);
        let viewport = Extent::new(top, top + f32::from(bounds.size.height));

        let mut pending = false;
        for ix in 0..self.reveals.len() {
            if self.reveals[ix].is_hidden() {
                match self.on_screen(ix) {
                    Some(item) if item.intersects(&viewport, REVEAL_THRESHOLD) => {
                        if self.reveals[ix].on_intersection(now) {
                            debug!(item = ?self.items[ix], "reveal started");
                        }
                    }
                    Some(_) => {}
                    None => pending = true,
                }
            }
            if self.reveals[ix].tick(now) {
                debug!(item = ?self.items[ix], "reveal settled");
            }
            pending |= self.reveals[ix].is_animating();
        }

        let offset = self.scroll.offset();
        if offset != self.last_offset {
            self.last_offset = offset;
            pending = true;
        }
        pending
    }

    fn render_header(&self, on_navigate: &NavigateHandler) -> Header {
        let header = self
            .content
            .nav
            .iter()
            .fold(
                Header::new(self.content.brand.name.clone(), self.locale, on_navigate.clone()),
                |header, link| header.link(link.label.clone(), link.anchor.clone()),
            );
        match &self.content.header_cta {
            Some(cta) => header.cta(cta_button("header-cta".into(), cta, on_navigate)),
            None => header,
        }
    }

    fn render_footer(&self, on_navigate: &NavigateHandler) -> Footer {
        let copyright = tr_year(self.locale, "footer.copyright", self.year);
        self.content
            .footer
            .links
            .iter()
            .fold(Footer::new(copyright, on_navigate.clone()), |footer, link| {
                footer.link(link.label.clone(), link.anchor.clone())
            })
    }

    fn render_dialog(&self, cx: &mut Context<Self>) -> Option<Dialog> {
        let acknowledgement = self.form.acknowledgement()?;
        let page = cx.weak_entity();
        Some(
            Dialog::new(
                tr(self.locale, "newsletter.acknowledged_title"),
                tr(self.locale, "dialog.close"),
            )
            .on_close(move |_, cx| {
                page.update(cx, |this, cx| this.dismiss(cx)).ok();
            })
            .child(tr_email(
                self.locale,
                "newsletter.acknowledged",
                &acknowledgement.email,
            )),
        )
    }
}

impl Render for LandingPage {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let now = Instant::now();
        if self.drive_reveals(now) {
            window.request_animation_frame();
        }

        let on_navigate = self.navigate_handler(cx);
        let page = cx.weak_entity();
        let ctx = BlockContext {
            locale: self.locale,
            on_navigate: on_navigate.clone(),
            newsletter: NewsletterBinding {
                state: self.email.clone(),
                constraint: self.form.constraint(),
                violation: self.form.violation(),
                on_submit: Rc::new(move |window: &mut Window, cx: &mut App| {
                    page.update(cx, |this, cx| this.submit(window, cx)).ok();
                }),
            },
        };

        let items = self.items.iter().enumerate().map(|(ix, item)| {
            let frame = self.reveals[ix].frame(now);
            match item {
                PageItem::Hero => blocks::hero(&self.content.hero, &frame, &ctx),
                PageItem::Tagline => blocks::tagline(
                    self.content.tagline.as_deref().unwrap_or_default(),
                    &frame,
                ),
                PageItem::Section(section) => match self.content.sections.get(*section) {
                    Some(content) => blocks::section(content, frame, &ctx).into_any_element(),
                    None => div().into_any_element(),
                },
                PageItem::Footer => self.render_footer(&on_navigate).into_any_element(),
            }
        });

        let shell = Shell::new()
            .child(self.render_header(&on_navigate))
            .child(
                div()
                    .id("landing-scroll")
                    .flex_1()
                    .w_full()
                    .overflow_y_scroll()
                    .track_scroll(&self.scroll)
                    .on_scroll_wheel(cx.listener(|_, _, _, cx| cx.notify()))
                    .children(items),
            )
            .children(self.render_dialog(cx));

        div()
            .size_full()
            .key_context(PAGE_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_page_action))
            .child(shell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_ok, assert_some, assert_some_eq};

    #[test]
    fn outline_puts_tagline_after_hero() {
        let content = assert_ok!(PageContent::for_variant(PageVariant::Consulting));
        let items = outline(&content);
        assert_eq!(items[0], PageItem::Hero);
        assert_eq!(items[1], PageItem::Tagline);
        assert_eq!(items.last(), Some(&PageItem::Footer));
        assert_eq!(items.len(), content.sections.len() + 3);
    }

    #[test]
    fn anchors_map_to_scroll_items() {
        let content = assert_ok!(PageContent::for_variant(PageVariant::Consulting));
        let items = outline(&content);

        assert_some_eq!(item_index(&items, AnchorTarget::Top), 0);
        let target = assert_some!(content.resolve("#contacto"));
        let ix = assert_some!(item_index(&items, target));
        assert_eq!(items[ix], PageItem::Section(content.sections.len() - 1));
        assert_none!(item_index(&items, AnchorTarget::Section(99)));
    }

    #[test]
    fn footer_never_animates() {
        let content = assert_ok!(PageContent::for_variant(PageVariant::Brand));
        let reveal = reveal_for(PageItem::Footer, &content);
        assert!(!reveal.is_hidden());
        assert!(!reveal.is_animating());
        assert!(reveal_for(PageItem::Hero, &content).is_hidden());
    }
}
