/// Rounding used when a real value enters the integer engine: halves go away from zero.
pub trait ClipperRound {
    fn clipper_rounded(self) -> Self;
}

impl ClipperRound for f64 {
    fn clipper_rounded(self) -> Self {
        self.round()
    }
}

impl ClipperRound for i64 {
    fn clipper_rounded(self) -> Self {
        self
    }
}

impl ClipperRound for i128 {
    fn clipper_rounded(self) -> Self {
        self
    }
}
