//! Terminal browser application using iocraft

use super::animation::{ScrollAnimation, UiAnimationConfig};
use super::browser::{action_for, demo_ids, scroll_by, BrowserAction, BrowserState, FocusRing};
use super::components::{Navbar, PageView, StatusLine};
use super::message::UiMessage;
use super::router::RouterHandle;
use anyhow::Result;
use blink_core::render::{StyledLine, TextRenderer};
use blink_core::router::{RoutePath, ScrollBehavior};
use blink_core::site::{nav_items, CompactMenu, DemoState, SiteContent};
use blink_core::SiteConfig;
use iocraft::prelude::*;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::debug;

/// Rows taken by the navbar border and row plus the status line
const CHROME_ROWS: usize = 4;

/// Everything the browser component needs, shared by cheap clones
#[derive(Clone)]
pub struct BrowserContext {
    pub router: RouterHandle,
    pub content: Arc<SiteContent>,
    pub menu: CompactMenu,
    pub ui_sender: broadcast::Sender<UiMessage>,
    pub ui_anim: UiAnimationConfig,
}

impl BrowserContext {
    pub fn new(config: &SiteConfig, content: SiteContent) -> Self {
        let (ui_sender, _) = broadcast::channel(64);
        Self {
            router: RouterHandle::new(config, ui_sender.clone()),
            content: Arc::new(content),
            menu: CompactMenu::new(),
            ui_sender,
            ui_anim: UiAnimationConfig::from_env(),
        }
    }
}

#[derive(Default, Props)]
pub struct BrowserAppProps {
    pub context: Option<BrowserContext>,
}

/// Run the terminal browser until the user quits
pub async fn run_browser(config: SiteConfig, content: SiteContent) -> Result<()> {
    let context = BrowserContext::new(&config, content);
    debug!("Starting browser at {}", context.router.current_path());

    tokio::task::spawn_blocking(move || {
        smol::block_on(async move {
            element!(BrowserApp(context: Some(context)))
                .fullscreen()
                .await
        })
    })
    .await??;

    Ok(())
}

#[component]
pub fn BrowserApp(mut hooks: Hooks, props: &BrowserAppProps) -> impl Into<AnyElement<'static>> {
    let mut system = hooks.use_context_mut::<SystemContext>();
    let (width, height) = hooks.use_terminal_size();

    let Some(context) = props.context.clone() else {
        return element! { View {} };
    };

    let current_path = hooks.use_state(|| context.router.current_path());
    let scroll = hooks.use_state(|| 0usize);
    let scroll_anim = hooks.use_state(|| None::<ScrollAnimation>);
    let focus = hooks.use_state(|| 0usize);
    let demos = hooks.use_state(DemoState::new);
    let menu_open = hooks.use_state(|| false);
    let should_exit = hooks.use_state(|| false);

    // Lay out the current page
    let page = context.router.current_page();
    let renderer = TextRenderer::new(&context.content, (width as usize).saturating_sub(4));
    let mut lines: Vec<StyledLine> = renderer.page(page.as_ref(), &demos.read());
    lines.push(StyledLine::blank());
    lines.extend(renderer.footer());
    let total_lines = lines.len();
    let menu_rows = if *menu_open.read() {
        context.content.nav.len() + 1
    } else {
        0
    };
    let body_height = (height as usize).saturating_sub(CHROME_ROWS + menu_rows).max(1);
    let ring = FocusRing::new(&context.content, &context.menu, page.as_ref());
    let demo_list = demo_ids(&context.content, page.as_ref());

    // Router events
    {
        let ui_sender = context.ui_sender.clone();
        let menu = context.menu.clone();
        let anim_cfg = context.ui_anim.clone();
        let mut current_path = current_path;
        let mut scroll = scroll;
        let mut scroll_anim = scroll_anim;
        let mut demos = demos;
        let mut menu_open = menu_open;
        let mut focus = focus;
        hooks.use_future(async move {
            let mut rx = ui_sender.subscribe();
            while let Ok(message) = rx.recv().await {
                match message {
                    UiMessage::PathChanged(path) => {
                        let fresh = BrowserState::on_path_changed(&menu);
                        current_path.set(path);
                        demos.set(fresh.demos);
                        menu_open.set(fresh.menu_open);
                        focus.set(fresh.focus);
                    }
                    UiMessage::ScrollToTop(ScrollBehavior::Smooth) => {
                        scroll_anim.set(Some(ScrollAnimation::new(scroll.get(), &anim_cfg)));
                    }
                    UiMessage::ScrollToTop(ScrollBehavior::Instant) => {
                        scroll_anim.set(None);
                        scroll.set(0);
                    }
                }
            }
        });
    }

    // Smooth scroll reset
    {
        let anim_cfg = context.ui_anim.clone();
        let mut scroll = scroll;
        let mut scroll_anim = scroll_anim;
        hooks.use_future(async move {
            loop {
                tokio::time::sleep(anim_cfg.frame_interval()).await;
                let offset = (*scroll_anim.read()).as_ref().map(ScrollAnimation::offset);
                if let Some(offset) = offset {
                    if scroll.get() != offset {
                        scroll.set(offset);
                    }
                    if offset == 0 {
                        scroll_anim.set(None);
                    }
                }
            }
        });
    }

    // Keyboard
    hooks.use_terminal_events({
        let router = context.router.clone();
        let menu = context.menu.clone();
        let ring = ring.clone();
        let mut scroll = scroll;
        let mut scroll_anim = scroll_anim;
        let mut focus = focus;
        let mut demos = demos;
        let mut menu_open = menu_open;
        let mut should_exit = should_exit;
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                modifiers,
                kind,
                ..
            }) if kind != KeyEventKind::Release => {
                let Some(action) = action_for(code, modifiers) else {
                    return;
                };

                match action {
                    BrowserAction::FocusNext => focus.set(ring.next(focus.get())),
                    BrowserAction::FocusPrev => focus.set(ring.prev(focus.get())),
                    BrowserAction::Activate => {
                        if let Some(link) = ring.get(focus.get()) {
                            router.activate(link);
                        }
                    }
                    BrowserAction::ToggleMenu => {
                        menu_open.set(menu.toggle());
                        focus.set(0);
                    }
                    BrowserAction::Back => {
                        router.go_back();
                    }
                    BrowserAction::Forward => {
                        router.go_forward();
                    }
                    BrowserAction::ScrollUp
                    | BrowserAction::ScrollDown
                    | BrowserAction::PageUp
                    | BrowserAction::PageDown => {
                        scroll_anim.set(None);
                        scroll.set(scroll_by(action, scroll.get(), total_lines, body_height));
                    }
                    BrowserAction::ToggleDemo(index) => {
                        if let Some(id) = demo_list.get(index) {
                            let mut state = demos.read().clone();
                            state.toggle(id);
                            demos.set(state);
                        }
                    }
                    BrowserAction::Quit => should_exit.set(true),
                }
            }
            _ => {}
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let path: RoutePath = current_path.read().clone();
    let history_len = context.router.history_len();

    element! {
        View(
            flex_direction: FlexDirection::Column,
            width: 100pct,
            height: 100pct,
        ) {
            Navbar(
                brand: context.content.brand.name.clone(),
                items: nav_items(&context.content, &path),
                focused: ring.nav_focus(focus.get()),
                menu_open: menu_open.get(),
            )
            PageView(
                lines: lines,
                scroll: scroll.get(),
                height: body_height,
                focused_link: ring.page_focus(focus.get()),
            )
            StatusLine(
                path: path.to_string(),
                scroll: scroll.get(),
                total_lines: total_lines,
                history_len: history_len,
            )
        }
    }
}
