//! Toast notifications.
//!
//! Components talk to the [`Notifier`] trait; the site-wide implementation is
//! [`Toaster`], provided through Leptos context and rendered by the
//! `ToastStack` component.

use std::time::Duration;

use leptos::prelude::*;

use crate::common::CatalogError;
use crate::models::Course;

/// How long a toast stays on screen before it is dismissed automatically.
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Oldest toasts are dropped once this many are visible.
pub const MAX_VISIBLE_TOASTS: usize = 3;

pub const COURSE_NOT_FOUND: &str = "Course not found";
pub const COURSE_NOT_FOUND_DESC: &str = "The requested course could not be found.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastAction {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastOptions {
    pub description: Option<String>,
    pub action: Option<ToastAction>,
}

impl ToastOptions {
    pub fn described(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            action: None,
        }
    }

    pub fn with_action(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.action = Some(ToastAction {
            label: label.into(),
            href: href.into(),
        });
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub description: Option<String>,
    pub action: Option<ToastAction>,
}

/// Fire-and-forget notification sink.
pub trait Notifier {
    fn notify(&self, kind: ToastKind, message: &str, options: ToastOptions);

    fn info(&self, message: &str, options: ToastOptions) {
        self.notify(ToastKind::Info, message, options);
    }

    fn success(&self, message: &str, options: ToastOptions) {
        self.notify(ToastKind::Success, message, options);
    }

    fn error(&self, message: &str, options: ToastOptions) {
        self.notify(ToastKind::Error, message, options);
    }
}

/// The visible toasts, newest last.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: &str, options: ToastOptions) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.to_string(),
            description: options.description,
            action: options.action,
        });
        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.toasts.len() - MAX_VISIBLE_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Reactive toast queue shared through context.
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.try_update(|q| q.dismiss(id));
    }
}

impl Notifier for Toaster {
    fn notify(&self, kind: ToastKind, message: &str, options: ToastOptions) {
        let Some(id) = self.queue.try_update(|q| q.push(kind, message, options)) else {
            return;
        };
        tracing::debug!(id, message, "toast shown");

        #[cfg(feature = "hydrate")]
        {
            let toaster = *self;
            set_timeout(move || toaster.dismiss(id), TOAST_DURATION);
        }
    }
}

/// The site-wide toaster, or a detached one when none was provided.
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_default()
}

/// Surfaces a course lookup result: not-found raises exactly one error toast,
/// cancellation stays silent.
pub fn report_lookup<N>(notifier: &N, result: Result<Course, CatalogError>) -> Option<Course>
where
    N: Notifier + ?Sized,
{
    match result {
        Ok(course) => Some(course),
        Err(CatalogError::NotFound(id)) => {
            tracing::warn!(%id, "course not found");
            notifier.error(COURSE_NOT_FOUND, ToastOptions::described(COURSE_NOT_FOUND_DESC));
            None
        }
        Err(CatalogError::Cancelled) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<(ToastKind, String)>>);

    impl Notifier for Recorder {
        fn notify(&self, kind: ToastKind, message: &str, _options: ToastOptions) {
            self.0.borrow_mut().push((kind, message.to_string()));
        }
    }

    #[test]
    fn queue_assigns_ids_and_dismisses() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Info, "a", ToastOptions::default());
        let b = queue.push(ToastKind::Success, "b", ToastOptions::described("desc"));
        assert_ne!(a, b);
        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].description.as_deref(), Some("desc"));
    }

    #[test]
    fn queue_drops_oldest_beyond_limit() {
        let mut queue = ToastQueue::default();
        for i in 0..5 {
            queue.push(ToastKind::Info, &i.to_string(), ToastOptions::default());
        }
        let messages: Vec<_> = queue.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["2", "3", "4"]);
    }

    #[test]
    fn found_course_raises_no_toast() {
        let recorder = Recorder::default();
        let course = crate::catalog::find_course("3d-modeling").cloned();
        assert!(report_lookup(&recorder, course).is_some());
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn missing_course_raises_one_error_toast() {
        let recorder = Recorder::default();
        let result = crate::catalog::find_course("nope").cloned();
        assert!(report_lookup(&recorder, result).is_none());
        assert_eq!(
            *recorder.0.borrow(),
            vec![(ToastKind::Error, COURSE_NOT_FOUND.to_string())]
        );
    }

    #[test]
    fn cancelled_lookup_is_silent() {
        let recorder = Recorder::default();
        assert!(report_lookup(&recorder, Err(CatalogError::Cancelled)).is_none());
        assert!(recorder.0.borrow().is_empty());
    }
}
