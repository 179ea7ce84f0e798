use std::time::Duration;

use leptos::prelude::*;

use crate::catalog::ROLE_DISPLAY;

/// Position in a fixed-length phrase list, wrapping back to the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleCycle {
    len: usize,
    index: usize,
}

impl RoleCycle {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(self) -> usize {
        self.index
    }

    /// Moves to the next phrase. A zero-length cycle never moves.
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }
}

/// Cycles through `phrases`, showing each for `display`.
///
/// The interval is armed in a client-side effect and cleared whenever the
/// effect re-runs (new phrases or duration) or the component is dropped.
/// An empty phrase list arms nothing and renders nothing. `on_advance`, when
/// given, receives the new index after every tick.
#[component]
pub fn RoleRotator(
    #[prop(into)] phrases: Signal<Vec<&'static str>>,
    #[prop(into, default = Signal::stored(ROLE_DISPLAY))] display: Signal<Duration>,
    #[prop(optional, into)] on_advance: Option<Callback<usize>>,
) -> impl IntoView {
    let cycle = RwSignal::new(RoleCycle::new(phrases.with_untracked(Vec::len)));

    Effect::new(move |_| {
        let len = phrases.with(Vec::len);
        let period = display.get();
        cycle.set(RoleCycle::new(len));
        if len == 0 {
            return;
        }

        let tick = move || {
            cycle.update(RoleCycle::advance);
            if let Some(on_advance) = on_advance {
                on_advance.run(cycle.get_untracked().index());
            }
        };

        match set_interval_with_handle(tick, period) {
            Ok(handle) => {
                log::debug!("role rotator armed: {len} phrases every {period:?}");
                on_cleanup(move || handle.clear());
            }
            Err(err) => log::warn!("role rotator could not arm its interval: {err:?}"),
        }
    });

    let current = move || phrases.with(|p| p.get(cycle.get().index()).copied());

    view! {
        <span class="role-rotator text-indigo-300 font-semibold" aria-live="polite">
            {move || {
                current()
                    .map(|phrase| {
                        view! { <span class="role-rotator__phrase inline-block animate-role-in">{phrase}</span> }
                    })
            }}
        </span>
    }
}
