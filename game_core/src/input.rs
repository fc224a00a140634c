//! Normalised input state and edge detection

/// Input polled by the host once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    pub axis_x: f32, // -1 = left, 1 = right, anything between for analog sticks
    pub fire: bool,
    pub boost: bool,
    pub start: bool,
    pub connected: bool, // a controller is plugged in (prompt wording only)
}

/// Pressed now, not pressed on the previous tick
pub fn rising_edge(current: bool, previous: bool) -> bool {
    current && !previous
}

/// Discrete actions derived from two consecutive input snapshots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Edges {
    pub start: bool,
    pub fire: bool,
}

/// Keeps the previous snapshot so held buttons trigger once per press
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDetector {
    previous: InputState,
}

impl EdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare against the last snapshot, then remember this one
    pub fn update(&mut self, current: &InputState) -> Edges {
        let edges = Edges {
            start: rising_edge(current.start, self.previous.start),
            fire: rising_edge(current.fire, self.previous.fire),
        };
        self.previous = *current;
        edges
    }
}
