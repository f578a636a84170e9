use gloo_timers::future::TimeoutFuture;
use tracing::debug;
use uuid::Uuid;
use yewdux::{Dispatch, Store};

use crate::auth::Notice;
use crate::auth::collaborators::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub notice: Notice,
}

impl Toast {
    pub fn new(kind: ToastKind, notice: Notice) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            notice,
        }
    }
}

/// Toasts currently on screen, oldest first.
#[derive(Debug, Default, Clone, PartialEq, Eq, Store)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    pub fn remove(&mut self, id: Uuid) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

/// Shows notices as toasts that dismiss themselves after a while.
#[derive(Clone)]
pub struct ToastNotifier {
    dispatch: Dispatch<ToastState>,
    duration_ms: u32,
}

impl ToastNotifier {
    pub fn new(dispatch: Dispatch<ToastState>, duration_ms: u32) -> Self {
        Self {
            dispatch,
            duration_ms,
        }
    }

    fn show(&self, kind: ToastKind, notice: Notice) {
        let toast = Toast::new(kind, notice);
        let id = toast.id;
        debug!(?kind, message = notice.fallback_text(), "showing toast");
        self.dispatch.reduce_mut(|state| state.push(toast));

        let dispatch = self.dispatch.clone();
        let duration_ms = self.duration_ms;
        yew::platform::spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            dispatch.reduce_mut(|state| state.remove(id));
        });
    }
}

impl Notifier for ToastNotifier {
    fn success(&self, notice: Notice) {
        self.show(ToastKind::Success, notice);
    }

    fn error(&self, notice: Notice) {
        self.show(ToastKind::Error, notice);
    }
}
