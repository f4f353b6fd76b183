//! Action invoker — user-triggered node commands and their follow-up poll.

use std::rc::Rc;
use std::time::Duration;

use nodewatch_domain::action::{Action, ActionOutcome};
use nodewatch_domain::display::RenderTarget;

use crate::error::ApiError;
use crate::poller::Poller;
use crate::ports::{Clock, Notifier, Scheduler, StatsApi};

/// Runs reconnect / refresh commands against the node.
///
/// Each invocation is independent: nothing debounces or serializes
/// concurrent clicks.
pub struct ActionInvoker<A, T, C, N, S> {
    poller: Rc<Poller<A, T, C>>,
    notifier: N,
    scheduler: S,
    follow_up_delay: Duration,
}

impl<A, T, C, N, S> ActionInvoker<A, T, C, N, S>
where
    A: StatsApi + 'static,
    T: RenderTarget + 'static,
    C: Clock + 'static,
    N: Notifier,
    S: Scheduler,
{
    pub fn new(
        poller: Rc<Poller<A, T, C>>,
        notifier: N,
        scheduler: S,
        follow_up_delay: Duration,
    ) -> Self {
        Self {
            poller,
            notifier,
            scheduler,
            follow_up_delay,
        }
    }

    /// Ask the node to re-establish its server connection.
    pub async fn reconnect(&self) -> ActionOutcome {
        self.invoke(Action::Reconnect).await
    }

    /// Ask the node to re-read its account status.
    pub async fn refresh_status(&self) -> ActionOutcome {
        self.invoke(Action::Refresh).await
    }

    /// Trigger `action`, notify the user of the outcome and, on success,
    /// schedule one poll after the follow-up delay.
    #[tracing::instrument(skip(self))]
    pub async fn invoke(&self, action: Action) -> ActionOutcome {
        let outcome = match self.poller.api().trigger(action).await {
            Ok(reply) => ActionOutcome::Succeeded {
                message: reply.message,
            },
            Err(ApiError::Status { status, message }) => {
                tracing::warn!(status, message = ?message, "node rejected action");
                ActionOutcome::Rejected { status, message }
            }
            Err(err) => {
                tracing::warn!(error = %err, "action request failed");
                ActionOutcome::Failed {
                    error: err.to_string(),
                }
            }
        };

        self.notifier
            .notify(&outcome.notice(action, self.poller.locale()));

        if outcome.is_success() {
            self.schedule_follow_up();
        }
        outcome
    }

    fn schedule_follow_up(&self) {
        let poller = Rc::clone(&self.poller);
        let delay = self.scheduler.sleep(self.follow_up_delay);
        self.scheduler.spawn(async move {
            delay.await;
            poller.poll().await;
        });
    }
}
