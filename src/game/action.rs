//! Action codes returned by bombers.
//!
//! A bomber answers each turn with a single integer. Codes of
//! [`PLANT_FLAG`] and above ask for a bomb to be planted on the bomber's
//! field; the rest of the code (after subtracting the flag) is the movement:
//!
//! | movement | meaning   |
//! |----------|-----------|
//! | 0        | stay      |
//! | 1        | up        |
//! | 2        | down      |
//! | 3        | left      |
//! | 4        | right     |
//!
//! So `11` plants and then moves up, `3` only moves left.

use crate::game::Direction;

/// Offset added to a movement code to request a bomb plant.
pub const PLANT_FLAG: i32 = 10;

/// Movement code meaning "stay in place".
pub const STAY: i32 = 0;

/// A raw action code as received from a bomber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionCode(pub i32);

impl ActionCode {
    /// Whether the code asks for a bomb plant.
    #[must_use]
    pub const fn plants_bomb(self) -> bool {
        self.0 >= PLANT_FLAG
    }

    /// The movement component, with the plant flag removed.
    #[must_use]
    pub const fn movement_code(self) -> i32 {
        if self.plants_bomb() {
            self.0 - PLANT_FLAG
        } else {
            self.0
        }
    }

    /// The requested direction, if the movement component is one.
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        Direction::from_code(self.movement_code())
    }

    /// Whether the movement component is neither a direction nor "stay".
    ///
    /// Such codes break the bomber contract. They are played as "stay".
    #[must_use]
    pub const fn is_violation(self) -> bool {
        let movement = self.movement_code();
        movement != STAY && Direction::from_code(movement).is_none()
    }

    /// Decode into a structured action. Violations decode as "stay".
    #[must_use]
    pub const fn decode(self) -> Action {
        Action {
            plant_bomb: self.plants_bomb(),
            direction: self.direction(),
        }
    }
}

impl From<i32> for ActionCode {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

/// What a bomber does in one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Action {
    /// Plant a bomb on the current field before moving.
    pub plant_bomb: bool,
    /// Step to take after the optional plant; `None` stays in place.
    pub direction: Option<Direction>,
}

impl Action {
    /// Stay in place without planting.
    pub const STAY: Action = Action {
        plant_bomb: false,
        direction: None,
    };

    /// Move without planting.
    #[must_use]
    pub const fn step(direction: Direction) -> Self {
        Self {
            plant_bomb: false,
            direction: Some(direction),
        }
    }

    /// Plant a bomb, then optionally move.
    #[must_use]
    pub const fn plant(direction: Option<Direction>) -> Self {
        Self {
            plant_bomb: true,
            direction,
        }
    }

    /// Encode as a wire action code.
    #[must_use]
    pub const fn code(self) -> i32 {
        let movement = match self.direction {
            Some(direction) => direction.code(),
            None => STAY,
        };
        if self.plant_bomb {
            movement + PLANT_FLAG
        } else {
            movement
        }
    }
}

impl From<Action> for ActionCode {
    fn from(action: Action) -> Self {
        Self(action.code())
    }
}
