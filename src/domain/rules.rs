//! Transition rule - B3/S23
//!
//! A live cell survives with 2 or 3 live neighbors, a dead cell is born
//! with exactly 3, every other cell is dead in the next generation.

pub const BIRTH_NEIGHBORS: u8 = 3;
pub const SURVIVE_MIN: u8 = 2;
pub const SURVIVE_MAX: u8 = 3;

#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, SURVIVE_MIN..=SURVIVE_MAX) => true, // Survival
        (false, BIRTH_NEIGHBORS) => true,          // Birth
        _ => false,                                // Death or stays dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_cells_survive_only_with_two_or_three() {
        let survivors: Vec<u8> = (0..=8).filter(|&n| next_state(true, n)).collect();
        assert_eq!(survivors, vec![2, 3]);
    }

    #[test]
    fn dead_cells_are_born_only_with_three() {
        let births: Vec<u8> = (0..=8).filter(|&n| next_state(false, n)).collect();
        assert_eq!(births, vec![3]);
    }
}
