mod state;

pub use state::{
    ContainerGeometry, DividerBounds, DividerState, NudgeDirection, DEFAULT_RATIO, KEYBOARD_STEP,
};
