use leptos::prelude::*;
use thaw::{Toast, ToastBody, ToastIntent, ToastOptions, ToastTitle, ToasterInjection};

use crate::state::{Notice, NoticeLevel};

/// Single funnel from editor notices to thaw toasts.
pub fn dispatch_notice(toaster: ToasterInjection, notice: Notice) {
    let (intent, title) = match notice.level() {
        NoticeLevel::Success => (ToastIntent::Success, "Success"),
        NoticeLevel::Warning => (ToastIntent::Warning, "Heads up"),
        NoticeLevel::Error => (ToastIntent::Error, "Something went wrong"),
    };
    dispatch_message(toaster, intent, title, notice.message().to_string());
}

pub fn dispatch_message(
    toaster: ToasterInjection,
    intent: ToastIntent,
    title: &'static str,
    body: String,
) {
    toaster.dispatch_toast(
        move || {
            view! {
                <Toast>
                    <ToastTitle>{title}</ToastTitle>
                    <ToastBody>{body}</ToastBody>
                </Toast>
            }
            .into_any()
        },
        ToastOptions::default().with_intent(intent),
    );
}
