use bevy::prelude::*;

use super::BoardConfig;
use super::entities::Board;

/// Lays out the offset rectangle, then applies the configured terrain placements.
pub fn setup_board(mut board: ResMut<Board>, cfg: Res<BoardConfig>) {
    if let Err(err) = board.setup(cfg.width, cfg.height) {
        warn!("board setup stopped early: {err}");
    }

    for placement in &cfg.placements {
        match board.replace(placement.hexagon()) {
            Some(_) => debug!("placed {} at {}", placement.kind, placement.coord),
            None => warn!(
                "placed {} at {}, outside the {}x{} layout",
                placement.kind, placement.coord, cfg.width, cfg.height
            ),
        }
    }

    info!(
        "board ready: {}x{} with {} hexes",
        board.width(),
        board.height(),
        board.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::HexCoordinate;
    use crate::terrain::{TerrainKind, TerrainPlacement};

    fn run_setup(cfg: BoardConfig) -> Board {
        let mut app = App::new();
        app.insert_resource(cfg)
            .init_resource::<Board>()
            .add_systems(Update, setup_board);
        app.update();
        app.world().resource::<Board>().clone()
    }

    #[test]
    fn default_config_seeds_forest() {
        let board = run_setup(BoardConfig::default());
        assert_eq!(board.len(), 400);
        let hex = board.get(HexCoordinate::new(6, 5)).unwrap();
        assert_eq!(hex.terrain(), Some(TerrainKind::Forest));
    }

    #[test]
    fn placement_outside_layout_still_lands() {
        let board = run_setup(BoardConfig {
            width: 2,
            height: 2,
            placements: vec![TerrainPlacement {
                kind: TerrainKind::Water,
                coord: HexCoordinate::new(10, 10),
            }],
        });
        assert_eq!(board.len(), 5);
        assert!(board.is_occupied(HexCoordinate::new(10, 10)));
    }
}
