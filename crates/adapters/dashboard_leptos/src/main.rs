use nodewatch_dashboard_leptos::{App, console};

fn main() {
    console::init();
    leptos::mount::mount_to_body(App);
}
