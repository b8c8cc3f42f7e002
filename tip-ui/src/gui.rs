use anyhow::Result;
use gpui::{
    AnyElement, App, AppContext, Bounds, Context, FontWeight, IntoElement, KeyBinding, Menu,
    MenuItem, ParentElement, Styled, TitlebarOptions, Window, WindowBounds, WindowOptions, div, rgb,
};
use gpui_component::{Root, v_flex};
use tracing::info;

use crate::components::{AppWindow, TipCalculator, WindowPreferences};
use crate::theme::{apply_splitter_theme, palette};
use crate::{Quit, quit};

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    apply_splitter_theme(app_cx);

    app_cx.activate(true);

    // Bind platform-appropriate quit shortcut
    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    // Register the quit action handler
    app_cx.on_action(quit);

    // Set up the application menu with Quit
    app_cx.set_menus(vec![Menu {
        name: "Splitter".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Builds the primary window content.
///
/// Returns a closure suitable for passing to `AppWindow::set_content`,
/// producing the title and calculator card on each render frame.
pub fn build_main_content(
    window: &mut Window,
    app_cx: &mut App,
) -> impl Fn() -> AnyElement + 'static {
    let calculator = app_cx.new(|calculator_cx: &mut Context<TipCalculator>| {
        TipCalculator::new(window, calculator_cx)
    });

    move || {
        v_flex()
            .size_full()
            .items_center()
            .justify_center()
            .gap_8()
            .child(
                div()
                    .text_lg()
                    .font_weight(FontWeight::BOLD)
                    .text_color(rgb(palette::CARD))
                    .child("SPLITTER"),
            )
            .child(calculator.clone())
            .into_any_element()
    }
}

/// Opens the single calculator window, wrapped in the gpui-component root.
pub fn open_main_window(app_cx: &mut App) -> Result<()> {
    let preferences = WindowPreferences::default();
    let bounds = Bounds::centered(None, preferences.size, app_cx);

    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some("Splitter".into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    app_cx.open_window(options, |window, cx| {
        let app_window = cx.new(AppWindow::new);
        let content = build_main_content(window, cx);
        app_window.update(cx, |win, _| win.set_content(content));
        cx.new(|root_cx| Root::new(app_window, window, root_cx))
    })?;

    info!("main window opened");
    Ok(())
}
