//! End-to-end navigation scenarios against the real site pages

use blink_core::config::NotFoundMode;
use blink_core::render::{TextRenderer, DEFAULT_WIDTH};
use blink_core::router::{
    History, Link, MemoryHistory, RecordingViewport, RouterOptions, RoutePath, ScrollBehavior,
    Signal, SignalKind, SiteRouter,
};
use blink_core::site::{page_selector, DemoState, SiteContent, SitePage, SitePageKind};
use blink_core::KnownRoute;
use std::sync::{Arc, Mutex};

struct Site {
    router: SiteRouter<SitePage>,
    history: Arc<Mutex<MemoryHistory>>,
    viewport: Arc<Mutex<RecordingViewport>>,
}

fn site(initial: &str) -> Site {
    let history = MemoryHistory::new(RoutePath::from(initial)).shared();
    let viewport = RecordingViewport::new().shared();
    let router = SiteRouter::new(
        history.clone(),
        viewport.clone(),
        page_selector(NotFoundMode::Page),
        RouterOptions::default(),
    );
    Site {
        router,
        history,
        viewport,
    }
}

impl Site {
    fn history_len(&self) -> usize {
        self.history.lock().unwrap().len()
    }

    fn resets(&self) -> Vec<ScrollBehavior> {
        self.viewport.lock().unwrap().resets().to_vec()
    }

    fn page_title(&self, content: &SiteContent) -> String {
        let page = self.router.render().into_output();
        TextRenderer::new(content, DEFAULT_WIDTH)
            .page(page.as_ref(), &DemoState::new())
            .first()
            .map(|line| line.text.clone())
            .unwrap_or_default()
    }
}

#[test]
fn test_known_paths_select_one_page_deterministically() {
    let site = site("/");
    for route in KnownRoute::ALL {
        site.router.store().set(RoutePath::from(route));
        let first = site.router.render();
        let second = site.router.render();
        assert_eq!(first.route(), Some(route));
        assert_eq!(first, second);
    }
}

#[test]
fn test_repeated_navigation_to_same_path() {
    let site = site("/");
    site.router.navigate("/mission");
    site.router.navigate("/mission");
    site.router.navigate("/mission");

    assert_eq!(site.router.current_path().as_str(), "/mission");
    // Every request is a new history entry, like a repeated pushState
    assert_eq!(site.history_len(), 4);
}

#[test]
fn test_back_forward_round_trip() {
    let site = site("/");
    site.router.navigate("/how-it-works");
    let len = site.history_len();

    assert!(site.router.back());
    assert_eq!(site.router.current_path().as_str(), "/");
    assert_eq!(site.history_len(), len);

    assert!(site.router.forward());
    assert_eq!(site.router.current_path().as_str(), "/how-it-works");
    assert_eq!(site.history_len(), len);
}

#[test]
fn test_empty_start_location_returns_home_after_back() {
    let site = site("");
    assert_eq!(site.router.current_path().as_str(), "/");
    assert_eq!(site.router.render().route(), Some(KnownRoute::Home));

    site.router.navigate("/demo");
    assert!(site.router.back());

    assert_eq!(site.router.current_path().as_str(), "/");
    assert_eq!(site.router.render().route(), Some(KnownRoute::Home));
    assert_eq!(site.history_len(), 2);
}

#[test]
fn test_unrecognized_path_selects_no_known_page() {
    let site = site("/");
    for path in ["/pricing", "demo", "/DEMO", "/demo/", "/%20", "//"] {
        site.router.store().set(RoutePath::from(path));
        let selection = site.router.render();
        assert_eq!(selection.route(), None, "{}", path);
        assert_eq!(
            selection.into_output().map(|page| page.kind),
            Some(SitePageKind::NotFound)
        );
    }
}

#[test]
fn test_teardown_stops_all_signals() {
    let mut site = site("/");
    site.router.navigate("/demo");
    site.router.teardown();

    let updates = site.router.store().updates();
    site.router.navigate("/mission");
    site.router.back();
    site.router.bus().dispatch(Signal::PopState);

    assert_eq!(site.router.current_path().as_str(), "/demo");
    assert_eq!(site.router.store().updates(), updates);
    assert_eq!(site.router.bus().listener_count(SignalKind::Navigate), 0);
    assert_eq!(site.router.bus().listener_count(SignalKind::PopState), 0);
}

#[test]
fn test_home_to_demo_and_back() {
    let content = SiteContent::load_default().unwrap();
    let site = site("/");
    assert_eq!(site.page_title(&content), "Blink OS");

    let demo_link = content
        .nav_links()
        .into_iter()
        .find(|link| link.href() == "/demo")
        .unwrap();
    demo_link.activate(&site.router.navigator());

    assert_eq!(site.router.current_path().as_str(), "/demo");
    assert_eq!(site.history_len(), 2);
    assert_eq!(site.page_title(&content), "Experience Blink OS");
    assert_eq!(site.resets(), vec![ScrollBehavior::Smooth]);

    assert!(site.router.back());
    assert_eq!(site.router.current_path().as_str(), "/");
    assert_eq!(site.page_title(&content), "Blink OS");
    assert_eq!(site.history_len(), 2);
    assert_eq!(site.resets().len(), 2);
}

#[test]
fn test_link_callback_runs_after_navigation() {
    let site = site("/");
    let seen = Arc::new(Mutex::new(None));

    let store = site.router.store().clone();
    let recorder = seen.clone();
    let link = Link::new("/applications", "Applications").on_activate(move || {
        *recorder.lock().unwrap() = Some(store.current());
    });
    link.activate(&site.router.navigator());

    assert_eq!(
        seen.lock().unwrap().as_ref().map(RoutePath::as_str),
        Some("/applications")
    );
}

#[test]
fn test_subscribers_follow_navigation() {
    let site = site("/");
    let paths = Arc::new(Mutex::new(Vec::new()));
    let sink = paths.clone();
    site.router
        .subscribe(move |path| sink.lock().unwrap().push(path.to_string()));

    site.router.navigate("/mission");
    site.router.navigate("/demo");
    site.router.back();

    assert_eq!(
        *paths.lock().unwrap(),
        vec!["/mission".to_string(), "/demo".to_string(), "/mission".to_string()]
    );
}
