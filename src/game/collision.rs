/// Category tags carried by the two sides of a contact event. The numeric
/// masks let a contact pair be dispatched on the union regardless of which
/// side is which.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContactCategory {
    Player,
    Vehicle,
    Vegetation,
    ProbeFront,
    ProbeRight,
    ProbeLeft,
}

impl ContactCategory {
    pub const fn mask(self) -> u8 {
        match self {
            ContactCategory::Player => 1,
            ContactCategory::Vehicle => 2,
            ContactCategory::Vegetation => 4,
            ContactCategory::ProbeFront => 8,
            ContactCategory::ProbeRight => 16,
            ContactCategory::ProbeLeft => 32,
        }
    }
}

/// The three blocking-test volumes around the player.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Probe {
    Front,
    Right,
    Left,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContactOutcome {
    /// Player touched a vehicle; the game is over.
    Fatal,
    Blocked(Probe),
    Ignored,
}

const FATAL: u8 = ContactCategory::Player.mask() | ContactCategory::Vehicle.mask();
const BLOCK_FRONT: u8 = ContactCategory::Vegetation.mask() | ContactCategory::ProbeFront.mask();
const BLOCK_RIGHT: u8 = ContactCategory::Vegetation.mask() | ContactCategory::ProbeRight.mask();
const BLOCK_LEFT: u8 = ContactCategory::Vegetation.mask() | ContactCategory::ProbeLeft.mask();

/// Which hop directions are currently walled off by vegetation.
///
/// Flags are set the moment a contact event arrives and cleared only when
/// the post-hop poll finds the probe free, so a set flag outlives an
/// obstacle that vanishes between hops.
#[derive(Clone, Copy, Default, Debug)]
pub struct BlockTracker {
    pub front: bool,
    pub right: bool,
    pub left: bool,
}

impl BlockTracker {
    pub fn on_contact(&mut self, a: ContactCategory, b: ContactCategory) -> ContactOutcome {
        match a.mask() | b.mask() {
            FATAL => ContactOutcome::Fatal,
            BLOCK_FRONT => {
                self.front = true;
                ContactOutcome::Blocked(Probe::Front)
            }
            BLOCK_RIGHT => {
                self.right = true;
                ContactOutcome::Blocked(Probe::Right)
            }
            BLOCK_LEFT => {
                self.left = true;
                ContactOutcome::Blocked(Probe::Left)
            }
            _ => ContactOutcome::Ignored,
        }
    }

    /// Post-hop poll: each probe with no live contact drops its flag.
    pub fn refresh(&mut self, mut in_contact: impl FnMut(Probe) -> bool) {
        if !in_contact(Probe::Front) {
            self.front = false;
        }
        if !in_contact(Probe::Right) {
            self.right = false;
        }
        if !in_contact(Probe::Left) {
            self.left = false;
        }
    }

    pub fn is_blocked(&self, probe: Probe) -> bool {
        match probe {
            Probe::Front => self.front,
            Probe::Right => self.right,
            Probe::Left => self.left,
        }
    }

    pub fn clear(&mut self) {
        *self = BlockTracker::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_vehicle_is_fatal_in_either_order() {
        let mut blocks = BlockTracker::default();
        assert_eq!(
            blocks.on_contact(ContactCategory::Player, ContactCategory::Vehicle),
            ContactOutcome::Fatal
        );
        assert_eq!(
            blocks.on_contact(ContactCategory::Vehicle, ContactCategory::Player),
            ContactOutcome::Fatal
        );
    }

    #[test]
    fn vegetation_against_a_probe_raises_that_flag() {
        let mut blocks = BlockTracker::default();
        blocks.on_contact(ContactCategory::Vegetation, ContactCategory::ProbeFront);
        blocks.on_contact(ContactCategory::ProbeLeft, ContactCategory::Vegetation);
        assert!(blocks.front);
        assert!(blocks.left);
        assert!(!blocks.right);
    }

    #[test]
    fn unrelated_pairs_are_ignored() {
        let mut blocks = BlockTracker::default();
        let pairs = [
            (ContactCategory::Vehicle, ContactCategory::ProbeFront),
            (ContactCategory::Player, ContactCategory::Vegetation),
            (ContactCategory::Vegetation, ContactCategory::Vegetation),
            (ContactCategory::ProbeLeft, ContactCategory::ProbeRight),
        ];
        for (a, b) in pairs {
            assert_eq!(blocks.on_contact(a, b), ContactOutcome::Ignored);
        }
        assert!(!blocks.front && !blocks.right && !blocks.left);
    }

    #[test]
    fn flags_survive_until_a_poll_says_otherwise() {
        let mut blocks = BlockTracker::default();
        blocks.on_contact(ContactCategory::Vegetation, ContactCategory::ProbeFront);
        assert!(blocks.front, "set stays set with no poll");

        // poll still sees contact on the front probe only
        blocks.refresh(|probe| probe == Probe::Front);
        assert!(blocks.front);

        // next poll finds the way clear
        blocks.refresh(|_| false);
        assert!(!blocks.front);
    }

    #[test]
    fn refresh_only_clears_free_directions() {
        let mut blocks = BlockTracker { front: true, right: true, left: true };
        blocks.refresh(|probe| probe == Probe::Right);
        assert!(!blocks.front);
        assert!(blocks.right);
        assert!(!blocks.left);
    }
}
