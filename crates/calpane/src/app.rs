//! Application window, CSS loading, and the dispatch/render loop.
//!
//! The window owns the single [`ViewState`] value. Widgets receive the
//! state read-only and send [`Action`]s back through a shared dispatcher;
//! every dispatch applies the reducer and rebuilds the content tree from
//! scratch with a fresh clock read.

use std::cell::RefCell;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, Orientation, PolicyType, ScrolledWindow};
use tracing::{debug, error, info, warn};

use calpane_core::clock::{Clock, SystemClock};
use calpane_core::navigator::{Action, ViewState};
use calpane_core::{Config, ThemeMode, ThemePalette};

use crate::styles::class;
use crate::widgets::{self, css, Dispatcher};

/// Run the GTK application with the given config and initial state.
pub fn run(config: Config, initial_state: ViewState) -> ExitCode {
    let app = Application::builder()
        .application_id("io.github.calpane")
        .flags(gtk4::gio::ApplicationFlags::NON_UNIQUE)
        .build();

    let config_for_activate = config.clone();
    app.connect_activate(move |app| {
        info!("GTK application activated");
        build_window(app, &config_for_activate, initial_state);
    });

    app.connect_startup(|_| {
        info!("GTK application starting up");
    });

    app.connect_shutdown(|_| {
        info!("GTK application shutting down");
    });

    // Run the application with empty args (we already parsed with clap)
    let empty_args: Vec<String> = vec![];
    let status = app.run_with_args(&empty_args);

    if status == gtk4::glib::ExitCode::SUCCESS {
        ExitCode::SUCCESS
    } else {
        error!("GTK application exited with error");
        ExitCode::FAILURE
    }
}

/// Everything the dispatch/render loop needs to rebuild the view.
struct AppCtx {
    config: Config,
    clock: SystemClock,
    state: RefCell<ViewState>,
    content: gtk4::Box,
}

impl AppCtx {
    /// Apply one action and re-render. A theme change also swaps the CSS
    /// provider before the rebuild so the new tree picks up the variables.
    fn dispatch(self: &Rc<Self>, action: Action) {
        let current = *self.state.borrow();
        let next = current.apply(action);
        *self.state.borrow_mut() = next;
        debug!(?action, year = next.year, month = next.month_index, "dispatch");

        if next.theme != current.theme {
            load_css(&self.config, next.theme);
        }
        self.render();
    }

    /// Rebuild the content tree from the current state plus a fresh clock
    /// read. Idempotent: the same state and date produce the same tree.
    fn render(self: &Rc<Self>) {
        let state = *self.state.borrow();
        let today = self.clock.today();

        while let Some(child) = self.content.first_child() {
            self.content.remove(&child);
        }

        let dispatcher: Dispatcher = {
            let ctx = Rc::downgrade(self);
            Rc::new(move |action| {
                if let Some(ctx) = ctx.upgrade() {
                    ctx.dispatch(action);
                }
            })
        };

        self.content
            .append(&widgets::header::build(state, &self.clock, &dispatcher));
        self.content.append(&widgets::month_view::build(
            state,
            today,
            self.config.calendar.show_legend,
            &dispatcher,
        ));
        if self.config.calendar.show_month_picker {
            self.content
                .append(&widgets::month_picker::build(state, &dispatcher));
        }
        if self.config.calendar.show_stats {
            self.content.append(&widgets::stats::build(state, today));
        }
    }
}

/// Create the main window and render the initial state.
fn build_window(app: &Application, config: &Config, initial_state: ViewState) {
    load_css(config, initial_state.theme);

    let window = ApplicationWindow::builder()
        .application(app)
        .title("calpane")
        .default_width(config.window.width as i32)
        .default_height(config.window.height as i32)
        .resizable(config.window.resizable)
        .build();
    window.add_css_class(class::WINDOW);

    let content = gtk4::Box::new(Orientation::Vertical, 24);
    content.add_css_class(class::CONTENT);

    let scroller = ScrolledWindow::new();
    scroller.set_policy(PolicyType::Never, PolicyType::Automatic);
    scroller.set_child(Some(&content));
    window.set_child(Some(&scroller));

    let ctx = Rc::new(AppCtx {
        config: config.clone(),
        clock: SystemClock,
        state: RefCell::new(initial_state),
        content,
    });
    ctx.render();

    // Keep the context alive for the lifetime of the window.
    unsafe {
        window.set_data("calpane-app-ctx", ctx);
    }

    window.present();
}

// Thread-local storage for the active CSS providers so the theme toggle
// (and a future user-CSS reload) can replace them.
thread_local! {
    static THEME_CSS_PROVIDER: RefCell<Option<gtk4::CssProvider>> = const { RefCell::new(None) };
    static USER_CSS_PROVIDER: RefCell<Option<gtk4::CssProvider>> = const { RefCell::new(None) };
}

/// Priority for user CSS - above the generated theme so overrides work.
const USER_CSS_PRIORITY: u32 = gtk4::STYLE_PROVIDER_PRIORITY_USER + 100;

/// Load and apply CSS for the given theme mode, replacing any previously
/// installed provider. Called at startup and on every theme toggle.
pub fn load_css(config: &Config, mode: ThemeMode) {
    let palette = ThemePalette::from_config(config, mode);
    let generated = generate_css(&palette);

    debug!(
        "Generated theme CSS: mode={}, accent={:?}",
        palette.mode.as_str(),
        palette.accent_source
    );

    let provider = gtk4::CssProvider::new();
    provider.load_from_string(&generated);

    let Some(display) = gtk4::gdk::Display::default() else {
        warn!("No default display available, CSS styling not applied");
        return;
    };

    THEME_CSS_PROVIDER.with(|cell| {
        let mut slot = cell.borrow_mut();
        if let Some(old) = slot.take() {
            gtk4::style_context_remove_provider_for_display(&display, &old);
        }
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_USER,
        );
        *slot = Some(provider);
    });

    load_user_css(&display);
}

/// Generate the full CSS string: theme variables, utilities, widget styles.
fn generate_css(palette: &ThemePalette) -> String {
    format!(
        "{}\n{}\n{}",
        palette.css_vars_block(),
        css::utility_css(),
        css::app_css()
    )
}

/// Search paths for user style.css, following XDG conventions.
fn user_css_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. $XDG_CONFIG_HOME/calpane/style.css
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        paths.push(PathBuf::from(xdg_config).join("calpane/style.css"));
    }

    // 2. ~/.config/calpane/style.css
    if let Ok(home) = std::env::var("HOME") {
        paths.push(PathBuf::from(home).join(".config/calpane/style.css"));
    }

    // 3. ./style.css (current working directory)
    paths.push(PathBuf::from("style.css"));

    paths
}

/// Load the user's custom CSS with highest priority, replacing a previously
/// installed copy (theme toggles re-run this).
fn load_user_css(display: &gtk4::gdk::Display) {
    let Some(path) = user_css_search_paths().into_iter().find(|p| p.exists()) else {
        USER_CSS_PROVIDER.with(|cell| {
            if let Some(old) = cell.borrow_mut().take() {
                gtk4::style_context_remove_provider_for_display(display, &old);
            }
        });
        return;
    };

    match std::fs::read_to_string(&path) {
        Ok(user_css) => {
            let provider = gtk4::CssProvider::new();
            provider.load_from_string(&user_css);

            USER_CSS_PROVIDER.with(|cell| {
                let mut slot = cell.borrow_mut();
                if let Some(old) = slot.take() {
                    gtk4::style_context_remove_provider_for_display(display, &old);
                }
                gtk4::style_context_add_provider_for_display(display, &provider, USER_CSS_PRIORITY);
                *slot = Some(provider);
            });

            info!(
                "Loaded user CSS from: {} (priority={})",
                path.display(),
                USER_CSS_PRIORITY
            );
        }
        Err(e) => {
            warn!("Failed to read user CSS from {}: {}", path.display(), e);
        }
    }
}
