//! View-navigation state machine.
//!
//! Tracks which of the three top-level views is active, interprets
//! horizontal drag gestures, and produces the slide offset the renderer
//! applies when all views are mounted side by side.

use crate::models::{AnimationStyle, AppView};

/// Net horizontal displacement (in cells) a drag must exceed to count as
/// a swipe. Fixed, not configurable.
pub const SWIPE_THRESHOLD: i32 = 50;

/// Ticks a slide transition lasts, per easing preset (16ms tick).
fn duration_ticks(style: AnimationStyle) -> u64 {
    match style {
        AnimationStyle::FluidBlur => 31,      // ~0.5s
        AnimationStyle::FadeoutOverlay => 19, // ~0.3s
        AnimationStyle::FreeFall => 37,       // ~0.6s
        AnimationStyle::ElasticSlide => 50,   // ~0.8s
    }
}

/// Evaluate the easing curve for a preset at `t` in [0, 1].
///
/// Curve values are cosmetic; `FreeFall` and `ElasticSlide` overshoot past
/// 1.0 before settling, the other two ease monotonically.
pub fn ease(style: AnimationStyle, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match style {
        AnimationStyle::FluidBlur | AnimationStyle::FadeoutOverlay => {
            // Standard ease-in-out.
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
        AnimationStyle::FreeFall => {
            // Back-out: single overshoot, then settle.
            let c1 = 1.70158;
            let c3 = c1 + 1.0;
            let u = t - 1.0;
            1.0 + c3 * u.powi(3) + c1 * u.powi(2)
        }
        AnimationStyle::ElasticSlide => {
            // Stronger overshoot with a snap back.
            let c1 = 2.5949095;
            let c3 = c1 + 1.0;
            let u = t - 1.0;
            1.0 + c3 * u.powi(3) + c1 * u.powi(2)
        }
    }
}

/// Pure swipe decision: given net displacement and the current view index,
/// return the target index, if any.
///
/// Positive displacement is a leftward drag (start right of end), moving
/// to the next view; negative moves to the previous one.
pub fn decide_swipe(displacement: i32, current_index: usize) -> Option<usize> {
    let last = AppView::ORDER.len() - 1;
    if displacement > SWIPE_THRESHOLD && current_index < last {
        Some(current_index + 1)
    } else if displacement < -SWIPE_THRESHOLD && current_index > 0 {
        Some(current_index - 1)
    } else {
        None
    }
}

/// In-flight drag gesture, sampled from mouse press/drag columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Drag {
    start_col: u16,
    last_col: u16,
}

/// A slide transition between two horizontal offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Slide {
    from_offset: f32,
    started_at_tick: u64,
    style: AnimationStyle,
}

#[derive(Debug, Clone, Default)]
pub struct ViewNav {
    current: AppView,
    drag: Option<Drag>,
    slide: Option<Slide>,
}

impl ViewNav {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> AppView {
        self.current
    }

    /// Unconditional jump, used by bottom-navigation selection.
    pub fn set_view(&mut self, target: AppView, style: AnimationStyle, viewport: u16, tick: u64) {
        if target == self.current {
            return;
        }
        let from = self.offset(viewport, tick);
        self.current = target;
        self.slide = Some(Slide {
            from_offset: from,
            started_at_tick: tick,
            style,
        });
    }

    /// Record the start of a horizontal drag.
    pub fn drag_start(&mut self, col: u16) {
        self.drag = Some(Drag {
            start_col: col,
            last_col: col,
        });
    }

    /// Update the latest sampled drag column.
    pub fn drag_move(&mut self, col: u16) {
        if let Some(drag) = self.drag.as_mut() {
            drag.last_col = col;
        }
    }

    /// End the drag: transition when the net displacement clears the
    /// threshold and the target stays in bounds. Returns the new view on
    /// transition.
    pub fn drag_release(
        &mut self,
        style: AnimationStyle,
        viewport: u16,
        tick: u64,
    ) -> Option<AppView> {
        let drag = self.drag.take()?;
        let displacement = drag.start_col as i32 - drag.last_col as i32;
        let target_index = decide_swipe(displacement, self.current.index())?;
        let target = AppView::ORDER[target_index];
        self.set_view(target, style, viewport, tick);
        Some(target)
    }

    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Horizontal offset of the three-view strip: settles at
    /// `-(index × viewport)`, interpolated by the active easing preset
    /// while a transition is in flight.
    pub fn offset(&self, viewport: u16, tick: u64) -> f32 {
        let target = -((self.current.index() as f32) * viewport as f32);
        match self.slide {
            None => target,
            Some(slide) => {
                let elapsed = tick.saturating_sub(slide.started_at_tick);
                let duration = duration_ticks(slide.style);
                if elapsed >= duration {
                    target
                } else {
                    let t = elapsed as f32 / duration as f32;
                    let eased = ease(slide.style, t);
                    slide.from_offset + (target - slide.from_offset) * eased
                }
            }
        }
    }

    /// True while a slide transition is still animating.
    pub fn is_sliding(&self, tick: u64) -> bool {
        match self.slide {
            Some(slide) => tick.saturating_sub(slide.started_at_tick) < duration_ticks(slide.style),
            None => false,
        }
    }

    /// Drop any finished transition so `is_sliding` stops reporting work.
    pub fn settle(&mut self, tick: u64) {
        if let Some(slide) = self.slide {
            if tick.saturating_sub(slide.started_at_tick) >= duration_ticks(slide.style) {
                self.slide = None;
            }
        }
    }

    /// Jump home without animation (used by full resets).
    pub fn reset(&mut self) {
        self.current = AppView::Home;
        self.drag = None;
        self.slide = None;
    }
}
