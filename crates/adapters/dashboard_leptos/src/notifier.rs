//! Blocking browser notification for action results.

use leptos::logging;

use nodewatch_app::ports::Notifier;
use nodewatch_domain::action::{Notice, NoticeTone};

/// Shows each notice with `window.alert`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, notice: &Notice) {
        if notice.tone == NoticeTone::Failure {
            logging::warn!("{}", notice.text);
        }
        let shown = web_sys::window().map(|window| window.alert_with_message(&notice.text));
        if !matches!(shown, Some(Ok(()))) {
            logging::error!("could not display notice: {}", notice.text);
        }
    }
}
