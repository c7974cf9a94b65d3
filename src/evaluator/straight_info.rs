/// Whether a hand is a straight, and whether that straight is the wheel
/// (A-2-3-4-5, where the ace plays low).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub is_wheel: bool,
}

const WHEEL: [u8; 5] = [2, 3, 4, 5, 14];

impl StraightInfo {
    /// Detect a straight from five rank values sorted ascending.
    pub fn detect(values: &[u8; 5]) -> Self {
        if values == &WHEEL {
            return StraightInfo { is_straight: true, is_wheel: true };
        }
        let consecutive = values.windows(2).all(|w| w[1] == w[0] + 1);
        StraightInfo { is_straight: consecutive, is_wheel: false }
    }
}
