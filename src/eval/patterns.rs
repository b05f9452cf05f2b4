//! Tactical shape classification
//!
//! A shape is the run of a player's stones through the origin once the
//! origin is filled with that player's stone, together with the state of the
//! two cells just past the run:
//!
//! | run | both ends empty | one end empty | no end empty |
//! |-----|-----------------|---------------|--------------|
//! | 5+  | five            | five          | five         |
//! | 4   | open four       | closed four   | -            |
//! | 3   | open three      | closed three  | -            |
//! | 2   | open two        | closed two    | -            |

use super::scan::{LineScan, Marker, SideWindow, SCAN_RADIUS};

/// Shapes recognised on a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Five,
    OpenFour,
    ClosedFour,
    OpenThree,
    ClosedThree,
    OpenTwo,
    ClosedTwo,
}

/// Leading own stones on one side, and whether the cell right after them
/// is empty. A side whose whole window is own stones has no visible end;
/// the run is then already five long.
fn side_run(window: &SideWindow) -> (usize, bool) {
    let len = window.iter().take_while(|&&m| m == Marker::Own).count();
    let open = window.get(len) == Some(&Marker::Empty);
    (len, open)
}

/// Classify one scan for the scanning player.
///
/// Returns `None` for a lone stone or for a run blocked at both ends.
#[must_use]
pub fn classify(scan: &LineScan) -> Option<Shape> {
    let (behind, behind_open) = side_run(&scan.behind);
    let (ahead, ahead_open) = side_run(&scan.ahead);
    let run = 1 + behind + ahead;

    if run > SCAN_RADIUS {
        return Some(Shape::Five);
    }

    let open_ends = usize::from(behind_open) + usize::from(ahead_open);
    match (run, open_ends) {
        (4, 2) => Some(Shape::OpenFour),
        (4, 1) => Some(Shape::ClosedFour),
        (3, 2) => Some(Shape::OpenThree),
        (3, 1) => Some(Shape::ClosedThree),
        (2, 2) => Some(Shape::OpenTwo),
        (2, 1) => Some(Shape::ClosedTwo),
        _ => None,
    }
}

/// Shape tallies for one player over all four axes of a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShapeCounts {
    pub five: u32,
    pub open_four: u32,
    pub closed_four: u32,
    pub open_three: u32,
    pub closed_three: u32,
    pub open_two: u32,
    pub closed_two: u32,
}

impl ShapeCounts {
    /// Count one shape
    pub fn add(&mut self, shape: Shape) {
        let slot = match shape {
            Shape::Five => &mut self.five,
            Shape::OpenFour => &mut self.open_four,
            Shape::ClosedFour => &mut self.closed_four,
            Shape::OpenThree => &mut self.open_three,
            Shape::ClosedThree => &mut self.closed_three,
            Shape::OpenTwo => &mut self.open_two,
            Shape::ClosedTwo => &mut self.closed_two,
        };
        *slot += 1;
    }

    /// Tally the shapes of several scans
    pub fn from_scans<'a>(scans: impl IntoIterator<Item = &'a LineScan>) -> Self {
        let mut counts = Self::default();
        for shape in scans.into_iter().filter_map(classify) {
            counts.add(shape);
        }
        counts
    }

    /// True when nothing was counted
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
