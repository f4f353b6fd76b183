//! Render target backed by one reactive signal per display target.

use leptos::prelude::*;

use nodewatch_domain::display::{Badge, DisplayTarget, DisplayValue, RenderTarget};

/// The page's display targets as signals. Copying it copies the handles, so
/// the poller and the view share the same slots.
#[derive(Debug, Clone, Copy)]
pub struct DisplaySignals {
    slots: [RwSignal<Option<DisplayValue>>; DisplayTarget::COUNT],
}

impl DisplaySignals {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| RwSignal::new(None)),
        }
    }

    pub fn slot(&self, target: DisplayTarget) -> RwSignal<Option<DisplayValue>> {
        self.slots[target.index()]
    }

    /// Current text of `target`; empty until the first render.
    pub fn text(&self, target: DisplayTarget) -> Signal<String> {
        let slot = self.slot(target);
        Signal::derive(move || {
            slot.with(|value| {
                value
                    .as_ref()
                    .and_then(DisplayValue::as_text)
                    .unwrap_or_default()
                    .to_string()
            })
        })
    }

    pub fn badge(&self, target: DisplayTarget) -> Signal<Option<Badge>> {
        let slot = self.slot(target);
        Signal::derive(move || {
            slot.with(|value| match value {
                Some(DisplayValue::Badge(badge)) => Some(badge.clone()),
                _ => None,
            })
        })
    }

    /// CSS width of a percent target; `0%` until the first render.
    pub fn width(&self, target: DisplayTarget) -> Signal<String> {
        let slot = self.slot(target);
        Signal::derive(move || {
            slot.with(|value| {
                value
                    .as_ref()
                    .and_then(DisplayValue::as_css_width)
                    .unwrap_or_else(|| "0%".to_string())
            })
        })
    }
}

impl Default for DisplaySignals {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTarget for DisplaySignals {
    fn write(&mut self, target: DisplayTarget, value: DisplayValue) {
        self.slots[target.index()].set(Some(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodewatch_domain::display::BadgeState;

    fn signals() -> (Owner, DisplaySignals) {
        let owner = Owner::new();
        owner.set();
        (owner, DisplaySignals::new())
    }

    #[test]
    fn should_read_defaults_before_first_render() {
        let (_owner, signals) = signals();

        assert_eq!(signals.text(DisplayTarget::NodeId).get_untracked(), "");
        assert_eq!(signals.width(DisplayTarget::GpProgress).get_untracked(), "0%");
        assert_eq!(signals.badge(DisplayTarget::QuotaStatus).get_untracked(), None);
    }

    #[test]
    fn should_expose_written_values() {
        let (_owner, mut signals) = signals();
        let badge = Badge {
            state: BadgeState::Connected,
            label: "Connected".to_string(),
            detail: None,
        };

        signals.write(DisplayTarget::NodeId, "Node ID: node-1".into());
        signals.write(DisplayTarget::GpProgress, DisplayValue::Percent(36.5));
        signals.write(DisplayTarget::ConnectionStatus, badge.clone().into());

        assert_eq!(
            signals.text(DisplayTarget::NodeId).get_untracked(),
            "Node ID: node-1"
        );
        assert_eq!(signals.width(DisplayTarget::GpProgress).get_untracked(), "36.5%");
        assert_eq!(
            signals.badge(DisplayTarget::ConnectionStatus).get_untracked(),
            Some(badge)
        );
    }

    #[test]
    fn should_share_slots_between_copies() {
        let (_owner, signals) = signals();
        let mut writer = signals;

        writer.write(DisplayTarget::Uptime, "1 day 1 hour".into());

        assert_eq!(
            signals.text(DisplayTarget::Uptime).get_untracked(),
            "1 day 1 hour"
        );
    }

    #[test]
    fn should_ignore_mismatched_value_kinds() {
        let (_owner, mut signals) = signals();

        signals.write(DisplayTarget::QuotaStatus, "not a badge".into());

        assert_eq!(signals.badge(DisplayTarget::QuotaStatus).get_untracked(), None);
        assert_eq!(signals.width(DisplayTarget::QuotaStatus).get_untracked(), "0%");
    }
}
