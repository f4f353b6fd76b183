//! Notifier port — surfaces action results to the user.

use std::rc::Rc;

use nodewatch_domain::action::Notice;

/// Shows a notice to the user.
///
/// In the browser this is a blocking acknowledgment (`window.alert`): the
/// call returns once the user dismissed it.
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

impl<T: Notifier + ?Sized> Notifier for Rc<T> {
    fn notify(&self, notice: &Notice) {
        (**self).notify(notice);
    }
}
