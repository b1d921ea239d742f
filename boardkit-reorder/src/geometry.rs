//! Pointer hit-testing over rendered card geometry.
//!
//! Everything here is pure: callers harvest the vertical extents of the
//! cards they rendered (whatever the toolkit) and pass them in alongside
//! the pointer position. Nothing in this module touches a DOM, a window
//! system, or any global state.

use boardkit_kanban::TaskId;
use serde::{Deserialize, Serialize};

/// Vertical extent of one rendered card within a column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardBounds {
    pub task: TaskId,
    pub top: f64,
    pub height: f64,
}

impl CardBounds {
    /// Create bounds for a rendered card
    pub fn new(task: TaskId, top: f64, height: f64) -> Self {
        Self { task, top, height }
    }

    /// Vertical center of the card
    pub fn midpoint_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Whether the pointer sits above or below the closest card's midpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Before,
    After,
}

/// Hit-test result: the card nearest the pointer plus its classification
#[derive(Debug, Clone, PartialEq)]
pub struct ClosestCard {
    /// Index into the card slice passed to [`locate_closest`], i.e. the
    /// rendered geometry. This is NOT a position in the column's sorted
    /// task list; anything mapping the hit back to tasks must go through
    /// `task`, since the render can lag the data.
    pub index: usize,
    pub task: TaskId,
    pub placement: Placement,
}

/// Find the card whose vertical midpoint is nearest `pointer_y`.
///
/// Ties go to the earlier card: iteration runs in render order and only a
/// strictly smaller distance replaces the current pick. Returns `None`
/// when the column has no rendered cards.
pub fn locate_closest(pointer_y: f64, cards: &[CardBounds]) -> Option<ClosestCard> {
    let mut best: Option<(usize, f64)> = None;
    for (index, card) in cards.iter().enumerate() {
        let distance = (pointer_y - card.midpoint_y()).abs();
        match best {
            Some((_, current)) if distance >= current => {}
            _ => best = Some((index, distance)),
        }
    }

    best.map(|(index, _)| {
        let card = &cards[index];
        let placement = if pointer_y < card.midpoint_y() {
            Placement::Before
        } else {
            Placement::After
        };
        ClosestCard {
            index,
            task: card.task.clone(),
            placement,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, top: f64) -> CardBounds {
        CardBounds::new(TaskId::from_string(id), top, 40.0)
    }

    #[test]
    fn test_empty_column() {
        assert_eq!(locate_closest(100.0, &[]), None);
    }

    #[test]
    fn test_single_card_classification() {
        let cards = vec![card("t1", 0.0)]; // midpoint 20

        let hit = locate_closest(10.0, &cards).unwrap();
        assert_eq!(hit.task.as_str(), "t1");
        assert_eq!(hit.placement, Placement::Before);

        let hit = locate_closest(30.0, &cards).unwrap();
        assert_eq!(hit.placement, Placement::After);
    }

    #[test]
    fn test_pointer_on_midpoint_is_after() {
        let cards = vec![card("t1", 0.0)];
        let hit = locate_closest(20.0, &cards).unwrap();
        assert_eq!(hit.placement, Placement::After);
    }

    #[test]
    fn test_picks_nearest_midpoint() {
        // Midpoints at 20, 70, 120
        let cards = vec![card("t1", 0.0), card("t2", 50.0), card("t3", 100.0)];

        let hit = locate_closest(65.0, &cards).unwrap();
        assert_eq!(hit.index, 1);
        assert_eq!(hit.task.as_str(), "t2");
        assert_eq!(hit.placement, Placement::Before);
    }

    #[test]
    fn test_tie_goes_to_first_card() {
        // Midpoints at 20 and 60; pointer at 40 is equidistant
        let cards = vec![card("t1", 0.0), card("t2", 40.0)];
        let hit = locate_closest(40.0, &cards).unwrap();
        assert_eq!(hit.index, 0);
        assert_eq!(hit.placement, Placement::After);
    }

    #[test]
    fn test_pointer_past_the_end() {
        let cards = vec![card("t1", 0.0), card("t2", 50.0)];
        let hit = locate_closest(500.0, &cards).unwrap();
        assert_eq!(hit.index, 1);
        assert_eq!(hit.placement, Placement::After);
    }
}
