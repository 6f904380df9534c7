/// Colour-belt progression, in rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BeltRank {
    White,  // 10th gup
    Yellow, // 8th gup
    Green,  // 6th gup
    Blue,   // 4th gup
    Red,    // 2nd gup
    Black,  // 1st dan and above
}

impl BeltRank {
    /// Parse a rank from its English name, case-insensitively.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "white" => Some(BeltRank::White),
            "yellow" => Some(BeltRank::Yellow),
            "green" => Some(BeltRank::Green),
            "blue" => Some(BeltRank::Blue),
            "red" => Some(BeltRank::Red),
            "black" => Some(BeltRank::Black),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BeltRank::White => "White",
            BeltRank::Yellow => "Yellow",
            BeltRank::Green => "Green",
            BeltRank::Blue => "Blue",
            BeltRank::Red => "Red",
            BeltRank::Black => "Black",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BeltRank::White => "White (beginner)",
            BeltRank::Yellow => "Yellow (8th gup)",
            BeltRank::Green => "Green (6th gup)",
            BeltRank::Blue => "Blue (4th gup)",
            BeltRank::Red => "Red (2nd gup)",
            BeltRank::Black => "Black (dan grades)",
        }
    }
}
