use std::rc::Rc;

use leptos::prelude::*;

use nodewatch_app::actions::ActionInvoker;
use nodewatch_app::config::DashboardConfig;
use nodewatch_app::poller::{Poller, start_polling};
use nodewatch_app::ports::LocalClock;
use nodewatch_domain::locale::Locale;

pub mod api;
mod components;
pub mod console;
mod labels;
pub mod notifier;
mod pages;
pub mod scheduler;
pub mod target;

use api::HttpStatsApi;
use notifier::AlertNotifier;
use pages::Dashboard;
use scheduler::BrowserScheduler;
use target::DisplaySignals;

pub type BrowserPoller = Poller<HttpStatsApi, DisplaySignals, LocalClock>;
pub type BrowserInvoker =
    ActionInvoker<HttpStatsApi, DisplaySignals, LocalClock, AlertNotifier, BrowserScheduler>;

/// Root application component.
///
/// Starts polling the node as soon as it is mounted and stops when it is
/// unmounted.
#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::default().with_locale(browser_locale());
    let signals = DisplaySignals::new();

    let poller: Rc<BrowserPoller> = Rc::new(Poller::new(
        HttpStatsApi::same_origin(),
        signals,
        LocalClock,
        config.locale,
    ));
    let handle = start_polling(Rc::clone(&poller), BrowserScheduler, config.poll_interval);
    on_cleanup(move || handle.cancel());

    let invoker: Rc<BrowserInvoker> = Rc::new(ActionInvoker::new(
        poller,
        AlertNotifier,
        BrowserScheduler,
        config.follow_up_delay,
    ));

    view! { <Dashboard signals=signals invoker=invoker locale=config.locale/> }
}

fn browser_locale() -> Locale {
    web_sys::window()
        .and_then(|window| window.navigator().language())
        .map_or(Locale::En, |tag| Locale::from_language_tag(&tag))
}
