pub const OVERLAY_FADE_MS: f32 = 500.0;

/// Fire-and-forget fade-in. Purely a function of the clock handed in by the
/// render loop; nothing in the core waits on it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeAnimation {
    pub start_ms: f32,
    pub duration_ms: f32,
}

impl FadeAnimation {
    pub fn new(start_ms: f32) -> Self {
        Self {
            start_ms,
            duration_ms: OVERLAY_FADE_MS,
        }
    }

    pub fn opacity_at(&self, now_ms: f32) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn finished(&self, now_ms: f32) -> bool {
        now_ms - self.start_ms >= self.duration_ms
    }
}

/// Tracks the completion overlay across snapshots. `observe` feeds it the
/// solved flag after each render; the overlay raises on the false-to-true
/// transition and re-raises if the board is broken and solved again.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompletionOverlay {
    fade: Option<FadeAnimation>,
    was_solved: bool,
}

impl CompletionOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, solved: bool, now_ms: f32) {
        if solved && !self.was_solved {
            self.fade = Some(FadeAnimation::new(now_ms));
        }
        if !solved {
            self.fade = None;
        }
        self.was_solved = solved;
    }

    pub fn visible(&self) -> bool {
        self.fade.is_some()
    }

    pub fn opacity(&self, now_ms: f32) -> f32 {
        self.fade
            .map(|fade| fade.opacity_at(now_ms))
            .unwrap_or(0.0)
    }
}
