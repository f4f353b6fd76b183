use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use nodewatch_domain::action::Action;
use nodewatch_domain::display::DisplayTarget;
use nodewatch_domain::locale::Locale;

use crate::BrowserInvoker;
use crate::components::{ProgressBar, StatCard, StatusBadge};
use crate::labels::labels;
use crate::target::DisplaySignals;

/// The single dashboard page. Every value element carries the stable id of
/// its [`DisplayTarget`].
#[component]
pub fn Dashboard(
    signals: DisplaySignals,
    invoker: Rc<BrowserInvoker>,
    locale: Locale,
) -> impl IntoView {
    let labels = labels(locale);
    let text = move |target: DisplayTarget| {
        view! { <span id=target.dom_id()>{signals.text(target)}</span> }
    };
    let on_action = move |action: Action| {
        let invoker = Rc::clone(&invoker);
        move |_: leptos::ev::MouseEvent| {
            let invoker = Rc::clone(&invoker);
            spawn_local(async move {
                invoker.invoke(action).await;
            });
        }
    };

    view! {
        <header>
            <h1>{labels.title}</h1>
            <div class="node-info">
                <div>{text(DisplayTarget::NodeId)}</div>
                <div>{text(DisplayTarget::ServerUrl)}</div>
            </div>
            <div class="actions">
                <button class="btn" on:click=on_action(Action::Reconnect)>
                    {labels.reconnect}
                </button>
                <button class="btn" on:click=on_action(Action::Refresh)>
                    {labels.refresh}
                </button>
            </div>
        </header>
        <main class="grid">
            <StatCard label=labels.connection>
                <StatusBadge
                    id=DisplayTarget::ConnectionStatus.dom_id()
                    base="status-indicator"
                    badge=signals.badge(DisplayTarget::ConnectionStatus)
                />
            </StatCard>
            <StatCard label=labels.today_tasks>
                <div class="stat-value">{text(DisplayTarget::TodayTasksCompleted)}</div>
            </StatCard>
            <StatCard label=labels.total_tasks>
                <div class="stat-value">
                    {text(DisplayTarget::TasksCompleted)}
                    <span class="stat-sub">{text(DisplayTarget::TaskFailInfo)}</span>
                </div>
            </StatCard>
            <StatCard label=labels.gp_balance>
                <div class="stat-value">{text(DisplayTarget::GpBalance)}</div>
                <StatusBadge
                    id=DisplayTarget::QuotaStatus.dom_id()
                    base="quota-badge"
                    badge=signals.badge(DisplayTarget::QuotaStatus)
                />
            </StatCard>
            <StatCard label=labels.today_gp>
                <div class="stat-value">{text(DisplayTarget::TodayGpCost)}</div>
                <ProgressBar
                    id=DisplayTarget::GpProgress.dom_id()
                    width=signals.width(DisplayTarget::GpProgress)
                />
            </StatCard>
            <StatCard label=labels.total_gp>
                <div class="stat-value">{text(DisplayTarget::TotalGpCost)}</div>
            </StatCard>
            <StatCard label=labels.avg_gp>
                <div class="stat-value">{text(DisplayTarget::AvgGpPerTask)}</div>
            </StatCard>
            <StatCard label=labels.avg_size>
                <div class="stat-value">{text(DisplayTarget::AvgSizeMib)}</div>
            </StatCard>
            <StatCard label=labels.total_size>
                <div class="stat-value">
                    {text(DisplayTarget::TotalSizeValue)}
                    " "
                    <span class="stat-unit">{text(DisplayTarget::TotalSizeUnit)}</span>
                </div>
            </StatCard>
            <StatCard label=labels.uptime>
                <div class="stat-value">{text(DisplayTarget::Uptime)}</div>
                <div class="stat-sub">{text(DisplayTarget::StartTime)}</div>
            </StatCard>
        </main>
        <footer>
            {labels.last_update}
            {text(DisplayTarget::LastUpdate)}
        </footer>
    }
}
