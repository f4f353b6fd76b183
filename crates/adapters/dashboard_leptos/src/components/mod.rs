mod progress_bar;
mod stat_card;
mod status_badge;

pub use progress_bar::ProgressBar;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
