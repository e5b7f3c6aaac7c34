//! Slide transition presenter component
//!
//! Every navigation mints a slide instance with a fresh identity; the
//! visible instances (at most one current, at most one exiting) render
//! through a single keyed collection, so the instance that loses
//! currency keeps its DOM subtree and local state while its style flips
//! to the exit descriptor. A removal timer keyed by the displaced
//! instance's identity drops it once the exit has run; a newer
//! navigation replaces any in-flight exit outright, so a stale timer
//! never removes the wrong slide (last-direction-wins, no queueing).
//!
//! A position that becomes current again while its old instance is
//! still exiting gets a new identity: the old instance finishes its
//! exit, the return mounts as a fresh entering instance.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::deck::Direction;
use crate::transition::phase::SlidePhase;
use crate::transition::spec::{SLIDE_DURATION_MS, TransitionSpec};

/// Delay before applying the end state, so the browser paints the mount
/// snapshot first and the CSS transition has something to animate from
const SETTLE_TICK_MS: u32 = 20;

/// Full-viewport layout shared by every slide panel, after the original
/// deck's slide container
const PANEL_BASE_CSS: &str = "width: 100vw; min-height: 100vh; display: flex; \
     flex-direction: column; justify-content: flex-start; align-items: center; \
     padding: 2rem 0; margin: 0; box-sizing: border-box; overflow: auto;";

/// The exiting instance overlays the entering one and must not eat input
const EXIT_OVERLAY_CSS: &str =
    "position: absolute; top: 0; left: 0; width: 100%; pointer-events: none; z-index: 1;";

/// One mounted slide: a deck position plus a per-navigation identity
///
/// Identity is the `id`, not the position: the same position mounted by
/// two navigations is two distinct instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SlideInstance {
    id: u64,
    position: usize,
}

/// Split the current instance off into the exiting role and mint its
/// replacement at `next_position`
const fn displace(
    current: SlideInstance,
    next_position: usize,
    next_id: u64,
) -> (SlideInstance, SlideInstance) {
    (
        current,
        SlideInstance {
            id: next_id,
            position: next_position,
        },
    )
}

/// The instances to render, exiting first so the overlay sits above
fn stack(exiting: Option<SlideInstance>, current: SlideInstance) -> Vec<SlideInstance> {
    match exiting {
        Some(out) => vec![out, current],
        None => vec![current],
    }
}

/// Animated swap between the outgoing and incoming slide
///
/// `render_slide` is the opaque content renderer: it is only ever asked
/// to mount a position; instance identity belongs to the presenter.
#[component]
pub fn SlideTransition(
    #[prop(into)] position: Signal<usize>,
    #[prop(into)] direction: Signal<Direction>,
    render_slide: Callback<usize, AnyView>,
) -> impl IntoView {
    let current = RwSignal::new(SlideInstance {
        id: 0,
        position: position.get_untracked(),
    });
    let exiting = RwSignal::new(None::<SlideInstance>);
    let next_id = StoredValue::new(1_u64);

    // Watch position changes; the instance losing currency keeps its
    // identity (and therefore its DOM and local state) while a fresh
    // instance takes over. A clamped move changes direction only and
    // must not displace anything.
    Effect::new(move || {
        let next_position = position.get();
        let prev = current.get_untracked();
        if prev.position == next_position {
            return;
        }

        let id = next_id.get_value();
        next_id.set_value(id.wrapping_add(1));

        let (out, incoming) = displace(prev, next_position, id);
        // Replaces any in-flight exit
        exiting.set(Some(out));
        current.set(incoming);

        let out_id = out.id;
        Timeout::new(SLIDE_DURATION_MS, move || {
            // A newer navigation owns the exit slot now; leave it alone
            exiting.try_update(|slot| {
                if slot.map(|i| i.id) == Some(out_id) {
                    *slot = None;
                }
            });
        })
        .forget();
    });

    let current_id = Signal::derive(move || current.get().id);

    view! {
        <div class="slide-stage" style="position: relative; overflow-x: hidden;">
            <For
                each=move || stack(exiting.get(), current.get())
                key=|instance| instance.id
                children=move |instance| {
                    // Direction at mint time shapes the enter; the exit
                    // descriptor reads the live direction later
                    let enter = TransitionSpec::enter(direction.get_untracked());
                    view! {
                        <SlidePanel
                            instance_id=instance.id
                            current_id=current_id
                            direction=direction
                            enter=enter
                            content=render_slide.run(instance.position)
                        />
                    }
                }
            />
        </div>
    }
}

/// One slide instance moving through its lifecycle
///
/// Mounts with the enter descriptor's start state, flips to its end
/// state one tick later so the CSS transition engine animates the
/// change, and settles after the duration. Losing currency flips the
/// style to the exit descriptor in place; removal is the owner's timer
/// unmounting the panel.
#[component]
fn SlidePanel(
    instance_id: u64,
    #[prop(into)] current_id: Signal<u64>,
    #[prop(into)] direction: Signal<Direction>,
    enter: TransitionSpec,
    content: AnyView,
) -> impl IntoView {
    let phase = RwSignal::new(SlidePhase::Entering);
    let arrived = RwSignal::new(false);

    Timeout::new(SETTLE_TICK_MS, move || {
        arrived.try_set(true);
    })
    .forget();

    Timeout::new(SLIDE_DURATION_MS, move || {
        phase.try_update(|p| {
            if p.can_become(SlidePhase::Settled) {
                *p = SlidePhase::Settled;
            }
        });
    })
    .forget();

    // Losing currency starts the exit. An instance displaced mid-enter
    // settles where it is first; phases are never skipped.
    Effect::new(move || {
        if current_id.get() != instance_id {
            phase.try_update(|p| {
                if *p == SlidePhase::Entering {
                    *p = SlidePhase::Settled;
                }
                if p.can_become(SlidePhase::Exiting) {
                    *p = SlidePhase::Exiting;
                }
            });
        }
    });

    let style = move || {
        if current_id.get() == instance_id {
            let motion = if arrived.get() {
                enter.end_css()
            } else {
                enter.start_css()
            };
            format!("{PANEL_BASE_CSS} position: relative; {motion}")
        } else {
            let motion = TransitionSpec::exit(direction.get()).end_css();
            format!("{PANEL_BASE_CSS} {EXIT_OVERLAY_CSS} {motion}")
        }
    };

    view! {
        <div class="slide-panel" style=style data-phase=move || phase.get().label()>
            {content}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_exists() {
        let _component = SlideTransition;
    }

    #[test]
    fn test_settle_tick_is_shorter_than_the_transition() {
        // The end state must be applied while the transition still has
        // time to run
        assert!(SETTLE_TICK_MS < SLIDE_DURATION_MS);
    }

    #[test]
    fn test_exit_overlay_does_not_capture_input() {
        assert!(EXIT_OVERLAY_CSS.contains("pointer-events: none"));
    }

    #[test]
    fn test_displaced_instance_keeps_its_identity() {
        // The slide losing currency must stay the same instance, so its
        // local state (counters, toggles, open notes) survives the exit
        let mounted = SlideInstance { id: 4, position: 2 };
        let (out, incoming) = displace(mounted, 3, 5);

        assert_eq!(out, mounted, "outgoing instance must be the live one, not a remount");
        assert_eq!(incoming, SlideInstance { id: 5, position: 3 });
    }

    #[test]
    fn test_stack_renders_exiting_below_current_key_order() {
        let out = SlideInstance { id: 1, position: 0 };
        let cur = SlideInstance { id: 2, position: 1 };
        assert_eq!(stack(Some(out), cur), vec![out, cur]);
        assert_eq!(stack(None, cur), vec![cur]);
    }

    #[test]
    fn test_return_mid_exit_mounts_a_fresh_instance() {
        // Position 0 -> 1, then back to 0 while the first instance is
        // still exiting: the return gets a new identity, so the keyed
        // collection keeps the old exit running and mounts fresh
        let first = SlideInstance { id: 0, position: 0 };
        let (exiting_first, second) = displace(first, 1, 1);
        let (exiting_second, returned) = displace(second, 0, 2);

        assert_eq!(returned.position, first.position);
        assert_ne!(returned.id, first.id, "no resurrection of the exiting instance");
        assert_ne!(returned.id, exiting_second.id);
        assert_eq!(exiting_first, first);
    }

    #[test]
    fn test_rapid_navigation_replaces_the_exit_slot() {
        // Two quick moves: the second displacement overwrites the first
        // exiting instance, and the stack never holds more than two
        let first = SlideInstance { id: 0, position: 0 };
        let (out_a, second) = displace(first, 1, 1);
        let (out_b, third) = displace(second, 2, 2);

        assert_ne!(out_a.id, out_b.id, "stale removal timers must not match");
        assert_eq!(stack(Some(out_b), third).len(), 2);
    }
}
