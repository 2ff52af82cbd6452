use rand::random_range;

/// A single rolled die. The rules core never rolls anything itself; this
/// is the collaborator a game loop uses to produce the step counts it
/// feeds into the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Die {
    value: u8,
}

impl Die {
    pub const ALL: [Die; 6] = [
        Die { value: 1 },
        Die { value: 2 },
        Die { value: 3 },
        Die { value: 4 },
        Die { value: 5 },
        Die { value: 6 },
    ];

    pub fn roll() -> Self {
        Die {
            value: random_range(1..=6),
        }
    }

    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 6 {
            Some(Die { value })
        } else {
            None
        }
    }

    pub const fn value(self) -> u8 {
        self.value
    }

    /// A six both frees a token from base and grants another turn.
    pub const fn grants_extra_turn(self) -> bool {
        self.value == 6
    }
}
