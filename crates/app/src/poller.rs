//! Poller — fetches snapshots into the store and renders them.

use std::cell::{Ref, RefCell};
use std::rc::Rc;
use std::time::Duration;

use tokio::sync::watch;

use nodewatch_domain::display::RenderTarget;
use nodewatch_domain::locale::Locale;
use nodewatch_domain::render::{RenderContext, render};

use crate::ports::{Clock, Scheduler, StatsApi};
use crate::store::StatsStore;

/// Owns the dashboard state: the API client, the snapshot store and the
/// render target the store is rendered into.
pub struct Poller<A, T, C> {
    api: A,
    store: StatsStore,
    target: RefCell<T>,
    clock: C,
    locale: Locale,
}

impl<A, T, C> Poller<A, T, C>
where
    A: StatsApi,
    T: RenderTarget,
    C: Clock,
{
    /// Create a poller with an empty store.
    pub fn new(api: A, target: T, clock: C, locale: Locale) -> Self {
        Self {
            api,
            store: StatsStore::new(),
            target: RefCell::new(target),
            clock,
            locale,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &StatsStore {
        &self.store
    }

    /// Borrow the render target. Must not be held across an `.await`.
    pub fn target(&self) -> Ref<'_, T> {
        self.target.borrow()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Fetch a snapshot, store it and render it.
    ///
    /// Failures (non-success status, network, decoding) are logged and
    /// otherwise ignored: the store keeps the previous snapshot and nothing
    /// is rendered.
    pub async fn poll(&self) {
        match self.api.fetch_stats().await {
            Ok(snapshot) => {
                tracing::debug!(node_id = %snapshot.node_id, "stats loaded");
                self.store.set(snapshot);
                self.render();
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load stats");
            }
        }
    }

    /// Render the current snapshot, if any, at the current time.
    pub fn render(&self) {
        let snapshot = self.store.get();
        let ctx = RenderContext::new(self.clock.now(), self.locale);
        render(snapshot.as_deref(), &ctx, &mut *self.target.borrow_mut());
    }
}

/// Handle on a running polling loop.
///
/// Cancelling (or dropping the handle) stops future ticks; a poll already in
/// flight still completes.
#[derive(Debug)]
pub struct PollerHandle {
    stop: watch::Sender<bool>,
}

impl PollerHandle {
    pub fn cancel(&self) {
        self.stop.send_replace(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.stop.borrow()
    }
}

/// Poll once right away, then every `interval`, until the returned handle is
/// cancelled or dropped.
///
/// Every tick spawns its poll as an independent task, so a slow response
/// never delays the schedule. Overlapping polls are allowed; whichever
/// response arrives last wins the store.
pub fn start_polling<A, T, C, S>(
    poller: Rc<Poller<A, T, C>>,
    scheduler: S,
    interval: Duration,
) -> PollerHandle
where
    A: StatsApi + 'static,
    T: RenderTarget + 'static,
    C: Clock + 'static,
    S: Scheduler + Clone + 'static,
{
    let (stop, stopped) = watch::channel(false);
    let ticker = scheduler.clone();
    scheduler.spawn(tick(poller, ticker, interval, stopped));
    PollerHandle { stop }
}

async fn tick<A, T, C, S>(
    poller: Rc<Poller<A, T, C>>,
    scheduler: S,
    interval: Duration,
    mut stopped: watch::Receiver<bool>,
) where
    A: StatsApi + 'static,
    T: RenderTarget + 'static,
    C: Clock + 'static,
    S: Scheduler,
{
    tracing::debug!(interval_ms = interval.as_millis(), "stats polling started");
    loop {
        if *stopped.borrow_and_update() {
            break;
        }

        let current = Rc::clone(&poller);
        scheduler.spawn(async move { current.poll().await });

        tokio::select! {
            biased;
            // Cancelled, or the handle was dropped.
            _ = stopped.changed() => break,
            () = scheduler.sleep(interval) => {}
        }
    }
    tracing::debug!("stats polling stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::testing::{FakeApi, FixedClock, TokioScheduler, snapshot};
    use nodewatch_domain::display::{DisplayTarget, MemoryTarget};
    use tokio::task::LocalSet;
    use tokio::time::sleep;

    type TestPoller = Poller<Rc<FakeApi>, MemoryTarget, FixedClock>;

    fn poller(api: &Rc<FakeApi>) -> TestPoller {
        Poller::new(
            Rc::clone(api),
            MemoryTarget::new(),
            FixedClock::at("2024-05-01T10:00:00Z"),
            Locale::En,
        )
    }

    #[tokio::test]
    async fn should_store_and_render_snapshot_on_success() {
        let api = Rc::new(FakeApi::default());
        api.push_stats(Ok(snapshot("node-1")));
        let poller = poller(&api);

        poller.poll().await;

        assert_eq!(poller.store().get().unwrap().node_id, "node-1");
        assert_eq!(poller.target().writes(), DisplayTarget::COUNT);
        assert_eq!(
            poller.target().text(DisplayTarget::NodeId),
            Some("Node ID: node-1")
        );
    }

    #[tokio::test]
    async fn should_render_nothing_before_first_success() {
        let api = Rc::new(FakeApi::default());
        let poller = poller(&api);

        poller.render();
        poller.poll().await;

        assert!(poller.store().is_empty());
        assert_eq!(poller.target().writes(), 0);
        assert_eq!(api.fetches(), 1);
    }

    #[tokio::test]
    async fn should_keep_previous_snapshot_when_fetch_fails() {
        let api = Rc::new(FakeApi::default());
        api.push_stats(Ok(snapshot("node-1")));
        api.push_stats(Err(ApiError::Transport("connection refused".to_string())));
        let poller = poller(&api);

        poller.poll().await;
        let writes = poller.target().writes();
        poller.poll().await;

        assert_eq!(poller.store().get().unwrap().node_id, "node-1");
        assert_eq!(poller.target().writes(), writes);
    }

    #[tokio::test]
    async fn should_ignore_non_success_status() {
        let api = Rc::new(FakeApi::default());
        api.push_stats(Ok(snapshot("node-1")));
        api.push_stats(Err(ApiError::Status {
            status: 500,
            message: None,
        }));
        let poller = poller(&api);

        poller.poll().await;
        poller.poll().await;

        assert_eq!(poller.store().get().unwrap().node_id, "node-1");
    }

    #[tokio::test]
    async fn should_ignore_undecodable_body() {
        let api = Rc::new(FakeApi::default());
        let decode = nodewatch_domain::snapshot::Snapshot::from_json("not json").unwrap_err();
        api.push_stats(Err(decode.into()));
        let poller = poller(&api);

        poller.poll().await;

        assert!(poller.store().is_empty());
        assert_eq!(poller.target().writes(), 0);
    }

    #[tokio::test]
    async fn should_let_latest_response_win() {
        let api = Rc::new(FakeApi::default());
        api.push_stats(Ok(snapshot("node-1")));
        api.push_stats(Ok(snapshot("node-2")));
        let poller = poller(&api);

        poller.poll().await;
        poller.poll().await;

        assert_eq!(poller.store().get().unwrap().node_id, "node-2");
        assert_eq!(
            poller.target().text(DisplayTarget::NodeId),
            Some("Node ID: node-2")
        );
    }

    #[tokio::test]
    async fn should_keep_response_that_arrives_last_when_polls_overlap() {
        LocalSet::new()
            .run_until(async {
                let api = Rc::new(FakeApi::default());
                let slow = api.push_gated();
                api.push_stats(Ok(snapshot("node-2")));
                let poller = Rc::new(poller(&api));

                let first = tokio::task::spawn_local({
                    let poller = Rc::clone(&poller);
                    async move { poller.poll().await }
                });
                let second = tokio::task::spawn_local({
                    let poller = Rc::clone(&poller);
                    async move { poller.poll().await }
                });

                second.await.unwrap();
                assert_eq!(api.fetches(), 2);
                assert_eq!(poller.store().get().unwrap().node_id, "node-2");

                slow.send(Ok(snapshot("node-1"))).unwrap();
                first.await.unwrap();

                assert_eq!(poller.store().get().unwrap().node_id, "node-1");
                assert_eq!(
                    poller.target().text(DisplayTarget::NodeId),
                    Some("Node ID: node-1")
                );
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_poll_immediately_then_on_every_interval() {
        LocalSet::new()
            .run_until(async {
                let api = Rc::new(FakeApi::always(snapshot("node-1")));
                let poller = Rc::new(poller(&api));
                let handle =
                    start_polling(Rc::clone(&poller), TokioScheduler, Duration::from_secs(5));

                sleep(Duration::from_millis(1)).await;
                assert_eq!(api.fetches(), 1);
                assert!(!poller.store().is_empty());

                sleep(Duration::from_secs(5)).await;
                assert_eq!(api.fetches(), 2);

                sleep(Duration::from_secs(5)).await;
                assert_eq!(api.fetches(), 3);

                handle.cancel();
                assert!(handle.is_cancelled());
                sleep(Duration::from_secs(30)).await;
                assert_eq!(api.fetches(), 3);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_keep_ticking_when_fetches_fail() {
        LocalSet::new()
            .run_until(async {
                let api = Rc::new(FakeApi::default());
                let poller = Rc::new(poller(&api));
                let _handle =
                    start_polling(Rc::clone(&poller), TokioScheduler, Duration::from_secs(5));

                sleep(Duration::from_millis(10_001)).await;
                assert_eq!(api.fetches(), 3);
                assert!(poller.store().is_empty());
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn should_stop_when_handle_is_dropped() {
        LocalSet::new()
            .run_until(async {
                let api = Rc::new(FakeApi::always(snapshot("node-1")));
                let poller = Rc::new(poller(&api));
                let handle =
                    start_polling(Rc::clone(&poller), TokioScheduler, Duration::from_secs(5));

                sleep(Duration::from_millis(1)).await;
                drop(handle);
                sleep(Duration::from_secs(60)).await;
                assert_eq!(api.fetches(), 1);
            })
            .await;
    }
}
