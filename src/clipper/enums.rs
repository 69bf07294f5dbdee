#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum PolyFillType {
    EvenOdd = 0,
    NonZero = 1,
    Positive = 2,
    Negative = 3,
}

impl PolyFillType {
    /// Whether a point with the given winding number counts as inside.
    pub fn is_filled(self, winding: i32) -> bool {
        match self {
            PolyFillType::EvenOdd => winding % 2 != 0,
            PolyFillType::NonZero => winding != 0,
            PolyFillType::Positive => winding > 0,
            PolyFillType::Negative => winding < 0,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum PolyType {
    Subject = 0,
    Clip = 1,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum ClipType {
    Intersection = 0,
    Union = 1,
    Difference = 2,
    Xor = 3,
}

impl ClipType {
    pub fn apply(self, in_subject: bool, in_clip: bool) -> bool {
        match self {
            ClipType::Intersection => in_subject && in_clip,
            ClipType::Union => in_subject || in_clip,
            ClipType::Difference => in_subject && !in_clip,
            ClipType::Xor => in_subject != in_clip,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum JoinType {
    Square = 0,
    Miter = 1,
    Round = 2,
}
