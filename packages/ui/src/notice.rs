//! Transient toast notices.

use std::time::Duration;

use dioxus::prelude::*;

use crate::timer::sleep;

/// How long a notice stays on screen, in ticks of [`TICK`].
const NOTICE_TTL_TICKS: u32 = 5;
const TICK: Duration = Duration::from_secs(1);
/// Older notices are dropped beyond this.
const MAX_NOTICES: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
    remaining: u32,
}

#[derive(Clone, Debug, Default)]
pub struct Notices {
    entries: Vec<Notice>,
    next_id: u64,
}

impl Notices {
    /// Add a notice and return its id.
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notice {
            id,
            level,
            message: message.into(),
            remaining: NOTICE_TTL_TICKS,
        });
        if self.entries.len() > MAX_NOTICES {
            let excess = self.entries.len() - MAX_NOTICES;
            self.entries.drain(..excess);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|n| n.id != id);
    }

    /// Count every notice down by one tick and drop the expired ones.
    pub fn tick(&mut self) {
        for notice in &mut self.entries {
            notice.remaining = notice.remaining.saturating_sub(1);
        }
        self.entries.retain(|n| n.remaining > 0);
    }

    pub fn entries(&self) -> &[Notice] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn use_notices() -> Signal<Notices> {
    use_context::<Signal<Notices>>()
}

/// Show a notice. [`NoticeProvider`] dismisses it after a few seconds, even
/// when the caller has unmounted by then.
pub fn notify(notices: &mut Signal<Notices>, level: NoticeLevel, message: &str) {
    match level {
        NoticeLevel::Error => tracing::warn!("{message}"),
        _ => tracing::info!("{message}"),
    }
    notices.write().push(level, message);
}

#[component]
pub fn NoticeProvider(children: Element) -> Element {
    let mut notices = use_signal(Notices::default);
    use_context_provider(|| notices);

    // Expiry runs in the provider's scope, which outlives every page
    use_hook(move || {
        spawn(async move {
            loop {
                sleep(TICK).await;
                if !notices.peek().is_empty() {
                    notices.write().tick();
                }
            }
        })
    });

    rsx! {
        {children}
        NoticeTray {}
    }
}

#[component]
fn NoticeTray() -> Element {
    let mut notices = use_notices();

    if notices().is_empty() {
        return rsx! {};
    }

    let entries = notices().entries().to_vec();

    rsx! {
        div {
            class: "notice-tray",
            for notice in entries {
                div {
                    key: "{notice.id}",
                    class: match notice.level {
                        NoticeLevel::Error => "notice error",
                        NoticeLevel::Success => "notice success",
                        NoticeLevel::Info => "notice info",
                    },
                    role: "status",
                    span { "{notice.message}" }
                    button {
                        class: "notice-close",
                        title: "Dismiss",
                        onclick: move |_| notices.write().dismiss(notice.id),
                        "×"
                    }
                }
            }
        }
    }
}
