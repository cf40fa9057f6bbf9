// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct owns the navigation stack, localization, and the state of
//! the demo currently open, and routes window events to whichever screen is
//! on top.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::library::{AssetCatalog, Fixtures};
use crate::ui::demo::DemoConfig;
use crate::ui::gallery;
use crate::ui::navigation::{NavigationStack, Screen};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    navigation: NavigationStack<Screen>,
    /// Live only while the gallery demo is on the stack.
    gallery: Option<gallery::State>,
    demo_config: DemoConfig,
    theme_mode: ThemeMode,
    window_size: Option<Size>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", self.navigation.top())
            .field("depth", &self.navigation.depth())
            .field("gallery_open", &self.gallery.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Builds the window settings
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(None, &config::Config::default())
    }
}

impl App {
    /// Initializes application state from the persisted configuration.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);
        let (config, config_warning) = config::load();
        let app = Self::with_config(flags.lang, &config);

        if let Some(key) = config_warning {
            tracing::warn!(message = %app.i18n.tr(&key), "configuration problem");
        }

        (app, Task::none())
    }

    /// Builds the app without touching the filesystem.
    pub fn with_config(lang: Option<String>, config: &config::Config) -> Self {
        let catalog = AssetCatalog::bundled().unwrap_or_else(|err| {
            tracing::error!(%err, "bundled images could not be loaded");
            AssetCatalog::default()
        });
        let demo_config = DemoConfig::new(Fixtures::default(), Arc::new(catalog))
            .with_gesture(config.gesture.settings());

        Self {
            i18n: I18n::new(lang, config),
            navigation: NavigationStack::new(Screen::DemoList),
            gallery: None,
            demo_config,
            theme_mode: config.general.theme_mode,
            window_size: None,
        }
    }

    /// Screen currently shown.
    #[must_use]
    pub fn screen(&self) -> &Screen {
        self.navigation.top()
    }

    #[must_use]
    pub fn gallery(&self) -> Option<&gallery::State> {
        self.gallery.as_ref()
    }

    /// The window title is the title of the screen on top of the stack.
    pub fn title(&self) -> String {
        match self.navigation.top() {
            Screen::DemoList => self.i18n.tr("window-title"),
            Screen::Demo(kind) => kind.title().to_string(),
            Screen::Detail(detail) => detail.label().to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let gallery_sub = self
            .gallery
            .as_ref()
            .map_or_else(Subscription::none, |state| {
                state.subscription().map(Message::Gallery)
            });

        Subscription::batch([event_sub, gallery_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            navigation: &mut self.navigation,
            gallery: &mut self.gallery,
            demo_config: &self.demo_config,
            window_size: &self.window_size,
        };

        match message {
            Message::DemoList(msg) => update::handle_demo_list_message(&mut ctx, &msg),
            Message::Gallery(msg) => update::handle_gallery_message(&mut ctx, msg),
            Message::NavigateBack => update::handle_navigate_back(&mut ctx),
            Message::EscapePressed => update::handle_escape(&mut ctx),
            Message::PointerMoved(point) => update::handle_pointer_moved(&mut ctx, point),
            Message::PointerReleased => update::handle_pointer_released(&mut ctx),
            Message::WindowResized(size) => {
                let task = update::handle_window_resized(&mut ctx, size);
                self.window_size = Some(size);
                task
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            navigation: &self.navigation,
            gallery: self.gallery.as_ref(),
            theme_mode: self.theme_mode,
            title: self.title(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::demo::DemoKind;
    use crate::ui::demo_list;
    use crate::ui::gallery::DetailSurface;

    fn app() -> App {
        App::with_config(Some("en-US".to_string()), &config::Config::default())
    }

    fn open_gallery(app: &mut App) {
        let _ = app.update(Message::DemoList(demo_list::Message::Open(
            DemoKind::CollectionPreview,
        )));
    }

    #[test]
    fn starts_on_demo_list() {
        let app = app();
        assert_eq!(app.screen(), &Screen::DemoList);
        assert_eq!(app.title(), app.i18n.tr("window-title"));
        assert!(app.gallery().is_none());
    }

    #[test]
    fn opening_the_demo_pushes_its_screen() {
        let mut app = app();
        open_gallery(&mut app);
        assert_eq!(app.screen(), &Screen::Demo(DemoKind::CollectionPreview));
        assert_eq!(app.title(), "Preview (Collection View)");
        assert!(app.gallery().is_some());
    }

    #[test]
    fn committing_a_preview_shows_the_detail_screen() {
        let mut app = app();
        open_gallery(&mut app);
        let _ = app.update(Message::Gallery(gallery::Message::CellSecondaryPressed(4)));
        assert!(app.gallery().and_then(gallery::State::active_preview).is_some());

        let _ = app.update(Message::Gallery(gallery::Message::CommitPreview));

        assert_eq!(app.screen(), &Screen::Detail(DetailSurface::new("desert")));
        assert_eq!(app.title(), "Desert");
    }

    #[test]
    fn escape_dismisses_preview_before_popping() {
        let mut app = app();
        open_gallery(&mut app);
        let _ = app.update(Message::Gallery(gallery::Message::CellSecondaryPressed(0)));

        let _ = app.update(Message::EscapePressed);
        assert_eq!(app.screen(), &Screen::Demo(DemoKind::CollectionPreview));
        assert!(app.gallery().and_then(gallery::State::active_preview).is_none());

        let _ = app.update(Message::EscapePressed);
        assert_eq!(app.screen(), &Screen::DemoList);
        assert!(app.gallery().is_none());
    }

    #[test]
    fn back_from_detail_returns_to_the_grid() {
        let mut app = app();
        open_gallery(&mut app);
        let _ = app.update(Message::Gallery(gallery::Message::CellSecondaryPressed(1)));
        let _ = app.update(Message::Gallery(gallery::Message::CommitPreview));

        let _ = app.update(Message::NavigateBack);

        assert_eq!(app.screen(), &Screen::Demo(DemoKind::CollectionPreview));
        assert!(app.gallery().is_some());
        assert_eq!(
            app.gallery().map(|state| state.controller().open_sessions()),
            Some(0)
        );
    }

    #[test]
    fn back_at_root_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::NavigateBack);
        assert_eq!(app.screen(), &Screen::DemoList);
    }

    #[test]
    fn pointer_events_are_ignored_while_detail_is_shown() {
        let mut app = app();
        open_gallery(&mut app);
        let _ = app.update(Message::Gallery(gallery::Message::CellSecondaryPressed(2)));
        let _ = app.update(Message::Gallery(gallery::Message::CommitPreview));

        let _ = app.update(Message::Gallery(gallery::Message::CellPressed(3)));
        let _ = app.update(Message::PointerReleased);

        assert!(app.gallery().is_some_and(|state| !state.is_pressing()));
        assert_eq!(app.screen(), &Screen::Detail(DetailSurface::new("canyon")));
    }

    #[test]
    fn resize_reaches_gallery_opened_later() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(Size::new(600.0, 500.0)));
        open_gallery(&mut app);

        let viewport = app.gallery().map(gallery::State::viewport);
        assert_eq!(viewport.map(|v| v.width), Some(600.0));
    }

    #[test]
    fn narrowing_the_window_after_scrolling_keeps_the_grid_filled() {
        let mut app = app();
        open_gallery(&mut app);
        let _ = app.update(Message::WindowResized(Size::new(1200.0, 648.0)));
        let _ = app.update(Message::Gallery(gallery::Message::Scrolled {
            offset_y: 1003.0,
            bounds: Size::new(1200.0, 600.0),
        }));

        let _ = app.update(Message::WindowResized(Size::new(400.0, 648.0)));

        let state = app.gallery().expect("gallery is open");
        let viewport = state.viewport();
        let count = state.controller().item_count();
        let visible = state.controller().layout().visible_range(
            viewport.offset_y,
            viewport.height,
            viewport.width,
            count,
        );
        assert_eq!(viewport.offset_y, 0.0);
        assert!(!visible.is_empty());
        assert!(state.controller().prepared_cell(0).is_some());
    }

    #[test]
    fn gesture_config_reaches_the_demo() {
        let mut config = config::Config::default();
        config.gesture.long_press_ms = Some(900);
        let app = App::with_config(None, &config);
        assert_eq!(
            app.demo_config.gesture.hold,
            std::time::Duration::from_millis(900)
        );
    }
}
