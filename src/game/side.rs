use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    /// Convert side to the token it drops
    pub fn to_cell(self) -> Cell {
        match self {
            Side::Player => Cell::Player,
            Side::Computer => Cell::Computer,
        }
    }

    /// Get side name for display
    pub fn name(self) -> &'static str {
        match self {
            Side::Player => "You",
            Side::Computer => "Computer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_side() {
        assert_eq!(Side::Player.other(), Side::Computer);
        assert_eq!(Side::Computer.other(), Side::Player);
    }

    #[test]
    fn test_to_cell() {
        assert_eq!(Side::Player.to_cell(), Cell::Player);
        assert_eq!(Side::Computer.to_cell(), Cell::Computer);
    }

    #[test]
    fn test_side_name() {
        assert_eq!(Side::Player.name(), "You");
        assert_eq!(Side::Computer.name(), "Computer");
    }
}
