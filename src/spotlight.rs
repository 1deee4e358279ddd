/// Last known pointer position in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

const RADIUS_PX: u32 = 600;
const GLOW: &str = "rgba(6, 182, 212, 0.15)";

impl Pointer {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// CSS `background` for the spotlight layer centred on the pointer.
    pub fn gradient(&self) -> String {
        format!(
            "radial-gradient({RADIUS_PX}px at {}px {}px, {GLOW}, transparent 80%)",
            self.x, self.y
        )
    }
}
