//! In-memory port implementations shared by the unit tests of this crate.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use tokio::sync::oneshot;

use nodewatch_domain::action::{Action, ActionReply, Notice};
use nodewatch_domain::snapshot::Snapshot;

use crate::error::ApiError;
use crate::ports::{Clock, Notifier, Scheduler, StatsApi};

pub fn snapshot(node_id: &str) -> Snapshot {
    Snapshot::new(
        node_id,
        "wss://hub.example.org/ws",
        5000.0,
        "2024-05-01T08:00:00Z".parse().unwrap(),
    )
}

type StatsResult = Result<Snapshot, ApiError>;

/// A queued `fetch_stats` response.
enum Scripted {
    Ready(StatsResult),
    /// Resolves once the paired sender fires.
    Gated(oneshot::Receiver<StatsResult>),
}

/// Scripted [`StatsApi`]: queued responses first, then `fallback` (or a
/// transport error when there is none).
#[derive(Default)]
pub struct FakeApi {
    stats: RefCell<VecDeque<Scripted>>,
    fallback: Option<Snapshot>,
    replies: RefCell<VecDeque<Result<ActionReply, ApiError>>>,
    fetches: Cell<usize>,
    triggered: RefCell<Vec<Action>>,
}

impl FakeApi {
    pub fn always(snapshot: Snapshot) -> Self {
        Self {
            fallback: Some(snapshot),
            ..Self::default()
        }
    }

    pub fn push_stats(&self, response: StatsResult) {
        self.stats.borrow_mut().push_back(Scripted::Ready(response));
    }

    /// Queue a response that stays pending until the returned sender is used.
    pub fn push_gated(&self) -> oneshot::Sender<StatsResult> {
        let (tx, rx) = oneshot::channel();
        self.stats.borrow_mut().push_back(Scripted::Gated(rx));
        tx
    }

    pub fn push_reply(&self, response: Result<ActionReply, ApiError>) {
        self.replies.borrow_mut().push_back(response);
    }

    pub fn fetches(&self) -> usize {
        self.fetches.get()
    }

    pub fn triggered(&self) -> Vec<Action> {
        self.triggered.borrow().clone()
    }
}

impl StatsApi for FakeApi {
    fn fetch_stats(&self) -> impl Future<Output = Result<Snapshot, ApiError>> {
        self.fetches.set(self.fetches.get() + 1);
        let next = self.stats.borrow_mut().pop_front().unwrap_or_else(|| {
            Scripted::Ready(
                self.fallback
                    .clone()
                    .ok_or_else(|| ApiError::Transport("connection refused".to_string())),
            )
        });
        async move {
            match next {
                Scripted::Ready(response) => response,
                Scripted::Gated(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(ApiError::Transport("gate dropped".to_string()))),
            }
        }
    }

    fn trigger(&self, action: Action) -> impl Future<Output = Result<ActionReply, ApiError>> {
        self.triggered.borrow_mut().push(action);
        let response = self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("connection refused".to_string())));
        async move { response }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<FixedOffset>);

impl FixedClock {
    pub fn at(rfc3339: &str) -> Self {
        Self(DateTime::parse_from_rfc3339(rfc3339).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Records every notice instead of showing it.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.borrow_mut().push(notice.clone());
    }
}

/// [`Scheduler`] on tokio's current-thread runtime; tests run it inside a
/// `LocalSet`.
#[derive(Debug, Clone, Copy)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + 'static,
    {
        tokio::task::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + 'static {
        tokio::time::sleep(duration)
    }
}
