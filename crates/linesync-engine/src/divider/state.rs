use tracing::trace;

pub const DEFAULT_RATIO: f64 = 0.5;
pub const KEYBOARD_STEP: f64 = 0.05;

/// Horizontal placement of the panel container, in the same unit as pointer samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerGeometry {
    pub left: f64,
    pub width: f64,
}

impl ContainerGeometry {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerBounds {
    pub min_ratio: f64,
    pub max_ratio: f64,
}

impl DividerBounds {
    /// Bounds that keep both panels at least `min_panel` wide. `None` when the
    /// container has no usable width.
    pub fn for_container(width: f64, min_panel: f64) -> Option<Self> {
        if !width.is_finite() || width <= 0.0 {
            return None;
        }
        let min_ratio = min_panel / width;
        Some(Self {
            min_ratio,
            max_ratio: 1.0 - min_ratio,
        })
    }

    // Lower bound first, so a container narrower than two panels pins to `max_ratio`.
    pub fn clamp(&self, ratio: f64) -> f64 {
        let mut clamped = ratio;
        if clamped < self.min_ratio {
            clamped = self.min_ratio;
        }
        if clamped > self.max_ratio {
            clamped = self.max_ratio;
        }
        clamped
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeDirection {
    Left,
    Right,
}

impl NudgeDirection {
    pub fn delta(self, step: f64) -> f64 {
        match self {
            Self::Left => -step,
            Self::Right => step,
        }
    }
}

/// Split position between the editor and output panels.
///
/// Pointer samples received while dragging are coalesced: only the latest
/// one is applied, on the next `on_frame` call.
#[derive(Debug, Clone, PartialEq)]
pub struct DividerState {
    ratio: f64,
    min_panel: f64,
    dragging: bool,
    pending: Option<f64>,
}

impl DividerState {
    pub fn new(min_panel: f64) -> Self {
        Self {
            ratio: DEFAULT_RATIO,
            min_panel,
            dragging: false,
            pending: None,
        }
    }

    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    pub fn begin_drag(&mut self, x: f64, container: ContainerGeometry) -> bool {
        self.dragging = true;
        self.pending = None;
        self.update_position(x, container)
    }

    pub fn pointer_moved(&mut self, x: f64) -> bool {
        if !self.dragging {
            return false;
        }
        self.pending = Some(x);
        true
    }

    pub fn on_frame(&mut self, container: ContainerGeometry) -> bool {
        match self.pending.take() {
            Some(x) => self.update_position(x, container),
            None => false,
        }
    }

    // A sample already scheduled still lands on the next frame.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub fn nudge(&mut self, direction: NudgeDirection, container: ContainerGeometry, step: f64) -> bool {
        let Some(bounds) = DividerBounds::for_container(container.width, self.min_panel) else {
            return false;
        };
        self.set_ratio(bounds.clamp(self.ratio + direction.delta(step)))
    }

    /// Pulls the current ratio inside the bounds of `container`, e.g. after a
    /// configured initial ratio meets a container narrower than expected.
    pub fn fit_to(&mut self, container: ContainerGeometry) -> bool {
        let Some(bounds) = DividerBounds::for_container(container.width, self.min_panel) else {
            return false;
        };
        self.set_ratio(bounds.clamp(self.ratio))
    }

    pub fn reset(&mut self) {
        self.ratio = DEFAULT_RATIO;
        self.dragging = false;
        self.pending = None;
    }

    pub fn panel_percentages(&self) -> (f64, f64) {
        (self.ratio * 100.0, (1.0 - self.ratio) * 100.0)
    }

    fn update_position(&mut self, x: f64, container: ContainerGeometry) -> bool {
        if !x.is_finite() {
            return false;
        }
        let Some(bounds) = DividerBounds::for_container(container.width, self.min_panel) else {
            return false;
        };
        self.set_ratio(bounds.clamp((x - container.left) / container.width))
    }

    fn set_ratio(&mut self, ratio: f64) -> bool {
        let changed = ratio != self.ratio;
        self.ratio = ratio;
        if changed {
            trace!(ratio, "divider moved");
        }
        changed
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
