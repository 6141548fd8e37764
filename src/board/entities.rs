use bevy::platform::collections::{HashMap, HashSet};
use bevy::prelude::*;

use crate::error::HexPositionError;
use crate::hex::{Edge, HexCoordinate};
use crate::terrain::TerrainKind;

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub struct Hexagon {
    coord: HexCoordinate,
    terrain: Option<TerrainKind>,
    move_cost: u32,
}

impl Hexagon {
    /// Blank hex with no terrain and a move cost of 1.
    pub fn new(coord: HexCoordinate) -> Self {
        Self {
            coord,
            terrain: None,
            move_cost: 1,
        }
    }

    /// Hex of `kind` with the kind's default move cost.
    pub fn with_terrain(coord: HexCoordinate, kind: TerrainKind) -> Self {
        Self {
            coord,
            terrain: Some(kind),
            move_cost: kind.attributes().move_cost,
        }
    }

    /// Overrides the move cost; values below 1 are raised to 1.
    pub fn with_move_cost(self, move_cost: u32) -> Self {
        Self {
            move_cost: move_cost.max(1),
            ..self
        }
    }

    /// Where this hex sits; also its identity on the board.
    pub fn coord(&self) -> HexCoordinate {
        self.coord
    }

    /// Terrain tag, `None` for a blank hex.
    pub fn terrain(&self) -> Option<TerrainKind> {
        self.terrain
    }

    /// Cost of entering this hex.
    pub fn move_cost(&self) -> u32 {
        self.move_cost
    }
}

/// Axial coordinate of offset cell `(col, row)`, shifting every row left by `floor(row / 2)`.
pub fn offset_to_axial(col: i32, row: i32) -> HexCoordinate {
    HexCoordinate::new(col - row.div_euclid(2), row)
}

/// Coordinates of a `width × height` offset rectangle, row by row.
///
/// Sides beyond `i32::MAX` are clamped to it.
pub fn offset_rectangle(width: u32, height: u32) -> impl Iterator<Item = HexCoordinate> {
    let width = i32::try_from(width).unwrap_or(i32::MAX);
    let height = i32::try_from(height).unwrap_or(i32::MAX);
    (0..height).flat_map(move |row| (0..width).map(move |col| offset_to_axial(col, row)))
}

/// The set of hexagons, at most one per coordinate.
///
/// Every edit goes through `&mut self`, so `replace` is observed as a single
/// step: no reader can see the coordinate empty between the removal and the add.
#[derive(Resource, Debug, Default, Clone)]
pub struct Board {
    hexes: HashMap<HexCoordinate, Hexagon>,
    edges: HashSet<Edge>,
    width: u32,
    height: u32,
}

impl Board {
    /// Logical column count used for layout; 0 until [`Board::setup`].
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Logical row count used for layout; 0 until [`Board::setup`].
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of hexagons on the board.
    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    /// Whether the board holds no hexagons.
    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    /// Whether a hexagon sits at `coord`.
    pub fn is_occupied(&self, coord: HexCoordinate) -> bool {
        self.hexes.contains_key(&coord)
    }

    /// The hexagon at `coord`, if any.
    pub fn get(&self, coord: HexCoordinate) -> Option<&Hexagon> {
        self.hexes.get(&coord)
    }

    /// All hexagons, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Hexagon> {
        self.hexes.values()
    }

    /// Edges between hexagons. Nothing populates these yet.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Occupied cells sharing an edge with `coord`.
    pub fn neighbors(&self, coord: HexCoordinate) -> impl Iterator<Item = &Hexagon> {
        coord
            .neighbors()
            .into_iter()
            .filter_map(|n| self.hexes.get(&n))
    }

    /// Inserts `hex`, refusing if its coordinate is taken.
    pub fn add(&mut self, hex: Hexagon) -> Result<(), HexPositionError> {
        let coord = hex.coord();
        if self.is_occupied(coord) {
            return Err(HexPositionError::Occupied(coord));
        }
        self.hexes.insert(coord, hex);
        Ok(())
    }

    /// Removes and returns the hexagon at `coord`.
    pub fn remove(&mut self, coord: HexCoordinate) -> Result<Hexagon, HexPositionError> {
        let removed = self
            .hexes
            .remove(&coord)
            .ok_or(HexPositionError::Vacant(coord))?;
        debug!("removed hex at {coord}");
        Ok(removed)
    }

    /// Puts `hex` at its coordinate whether or not the cell is occupied.
    ///
    /// Returns the hexagon it displaced, if there was one.
    pub fn replace(&mut self, hex: Hexagon) -> Option<Hexagon> {
        let coord = hex.coord();
        let previous = if self.is_occupied(coord) {
            self.remove(coord).ok()
        } else {
            None
        };
        self.hexes.insert(coord, hex);
        previous
    }

    /// Fills the `width × height` offset rectangle with blank hexagons.
    ///
    /// Row `r` column `q` lands at axial `(q - floor(r / 2), r)`. On a board that
    /// already holds hexagons this stops at the first collision.
    pub fn setup(&mut self, width: u32, height: u32) -> Result<(), HexPositionError> {
        self.width = width;
        self.height = height;
        self.hexes.reserve((width as usize) * (height as usize));
        for coord in offset_rectangle(width, height) {
            self.add(Hexagon::new(coord))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet as StdHashSet;

    use proptest::{prop_assert, prop_assert_eq, proptest};

    use super::*;

    fn board(width: u32, height: u32) -> Board {
        let mut board = Board::default();
        board.setup(width, height).unwrap();
        board
    }

    // ── offset layout ───────────────────────────────────────────────

    #[test]
    fn oversized_sides_do_not_wrap_negative() {
        let first: Vec<_> = offset_rectangle(u32::MAX, u32::MAX).take(2).collect();
        assert_eq!(first, vec![HexCoordinate::new(0, 0), HexCoordinate::new(1, 0)]);
    }

    // ── setup ───────────────────────────────────────────────────────

    #[test]
    fn fresh_board_is_zero_sized_and_empty() {
        let board = Board::default();
        assert_eq!((board.width(), board.height()), (0, 0));
        assert!(board.is_empty());
        assert_eq!(board.edges().count(), 0);
    }

    #[test]
    fn setup_fills_whole_rectangle() {
        let board = board(20, 20);
        assert_eq!(board.len(), 400);
        assert_eq!((board.width(), board.height()), (20, 20));
    }

    #[test]
    fn row_two_is_shifted_one_column_left() {
        let board = board(9, 9);
        for col in 0..9 {
            let coord = offset_to_axial(col, 2);
            assert_eq!(coord, HexCoordinate::new(col - 1, 2));
            assert!(board.is_occupied(coord), "missing hex at {coord}");
        }
    }

    #[test]
    fn odd_rows_share_shift_with_row_below() {
        assert_eq!(offset_to_axial(0, 0), HexCoordinate::new(0, 0));
        assert_eq!(offset_to_axial(0, 1), HexCoordinate::new(0, 1));
        assert_eq!(offset_to_axial(0, 3), HexCoordinate::new(-1, 3));
        assert_eq!(offset_to_axial(4, 8), HexCoordinate::new(0, 8));
    }

    #[test]
    fn setup_on_populated_board_reports_collision() {
        let mut board = board(3, 3);
        assert_eq!(
            board.setup(3, 3),
            Err(HexPositionError::Occupied(HexCoordinate::ORIGIN))
        );
        assert_eq!(board.len(), 9);
    }

    #[test]
    fn setup_hexes_are_blank() {
        let board = board(4, 4);
        assert!(board.iter().all(|h| h.terrain().is_none() && h.move_cost() == 1));
    }

    proptest! {
        #[test]
        fn offset_rectangle_never_collides(width in 0u32..48, height in 0u32..48) {
            let coords: StdHashSet<_> = offset_rectangle(width, height).collect();
            prop_assert_eq!(coords.len(), (width * height) as usize);
        }

        #[test]
        fn setup_succeeds_for_any_extent(width in 0u32..32, height in 0u32..32) {
            let mut board = Board::default();
            prop_assert!(board.setup(width, height).is_ok());
            prop_assert_eq!(board.len(), (width * height) as usize);
        }
    }

    // ── add / remove ────────────────────────────────────────────────

    #[test]
    fn add_rejects_occupied_coordinate() {
        let mut board = Board::default();
        let coord = HexCoordinate::new(2, 2);
        board.add(Hexagon::new(coord)).unwrap();
        assert_eq!(
            board.add(Hexagon::with_terrain(coord, TerrainKind::Water)),
            Err(HexPositionError::Occupied(coord))
        );
        assert_eq!(board.get(coord).and_then(Hexagon::terrain), None);
    }

    #[test]
    fn remove_rejects_vacant_coordinate() {
        let mut board = Board::default();
        let coord = HexCoordinate::new(-4, 1);
        assert_eq!(board.remove(coord), Err(HexPositionError::Vacant(coord)));
    }

    #[test]
    fn add_then_remove_frees_coordinate() {
        let mut board = Board::default();
        let hex = Hexagon::with_terrain(HexCoordinate::new(1, 1), TerrainKind::Plain);
        board.add(hex).unwrap();
        assert_eq!(board.remove(hex.coord()), Ok(hex));
        assert!(!board.is_occupied(hex.coord()));
    }

    #[test]
    fn remove_then_add_restores_with_new_data() {
        let mut board = board(5, 5);
        let coord = HexCoordinate::new(1, 2);
        board.remove(coord).unwrap();
        let hex = Hexagon::with_terrain(coord, TerrainKind::Mountain).with_move_cost(3);
        board.add(hex).unwrap();
        assert_eq!(board.get(coord), Some(&hex));
    }

    // ── replace ─────────────────────────────────────────────────────

    #[test]
    fn replace_overwrites_occupied_cell() {
        let mut board = board(9, 9);
        let coord = HexCoordinate::new(3, 4);
        let hex = Hexagon::with_terrain(coord, TerrainKind::Forest).with_move_cost(2);

        let previous = board.replace(hex);

        assert_eq!(previous, Some(Hexagon::new(coord)));
        assert_eq!(board.get(coord), Some(&hex));
        assert_eq!(board.len(), 81);
    }

    #[test]
    fn replace_on_empty_cell_adds() {
        let mut board = Board::default();
        let hex = Hexagon::with_terrain(HexCoordinate::new(40, -3), TerrainKind::Water);
        assert_eq!(board.replace(hex), None);
        assert_eq!(board.len(), 1);
        assert!(board.is_occupied(hex.coord()));
    }

    #[test]
    fn move_cost_never_drops_below_one() {
        let hex = Hexagon::new(HexCoordinate::ORIGIN).with_move_cost(0);
        assert_eq!(hex.move_cost(), 1);
    }

    // ── neighbors ───────────────────────────────────────────────────

    #[test]
    fn interior_hex_has_six_neighbors() {
        let board = board(9, 9);
        assert_eq!(board.neighbors(HexCoordinate::new(3, 4)).count(), 6);
    }

    #[test]
    fn corner_hex_has_fewer_neighbors() {
        let board = board(9, 9);
        let count = board.neighbors(HexCoordinate::ORIGIN).count();
        assert!((2..6).contains(&count), "origin has {count} neighbors");
    }
}
