//! Hexagon board viewer binary.

use bevy::app::AppExit;
use bevy::prelude::*;
#[cfg(feature = "native")]
use bevy::remote::{RemotePlugin, http::RemoteHttpPlugin};
use bevy_inspector_egui::quick::WorldInspectorPlugin;

use hex_board::AppState;
use hex_board::board::{BoardConfig, BoardPlugin};
use hex_board::board_view::{BoardViewConfig, BoardViewPlugin};
use hex_board::controls::{ControlsConfig, ControlsPlugin};
use hex_board::viewport::{ViewportPlugin, ViewportSettings};

#[cfg(feature = "native")]
mod cli {
    use clap::{CommandFactory, Parser, error::ErrorKind};
    use hex_board::board::BoardConfig;
    use hex_board::terrain::TerrainPlacement;
    use hex_board::viewport::ViewportSettings;

    /// Hexagon board viewer
    #[derive(Parser, Debug)]
    #[command(name = "hex-board")]
    #[command(about = "Pan and zoom around a board of hexagons")]
    pub struct Args {
        /// Board width in hexes
        #[arg(long, default_value_t = 20)]
        width: u32,

        /// Board height in hexes
        #[arg(long, default_value_t = 20)]
        height: u32,

        /// Hex radius at startup, in pixels
        #[arg(long, default_value_t = 30)]
        hex_radius: u32,

        /// Smallest hex radius zooming out reaches
        #[arg(long, default_value_t = 30)]
        min_radius: u32,

        /// Largest hex radius zooming in reaches
        #[arg(long, default_value_t = 150)]
        max_radius: u32,

        /// Radius change per wheel notch
        #[arg(long, default_value_t = 5)]
        zoom_step: u32,

        /// Terrain to place as `kind@q,r` (repeatable); replaces the default forest
        #[arg(long = "terrain")]
        terrain: Vec<TerrainPlacement>,
    }

    /// Parses the command line into board and viewport config, exiting on bad input.
    pub fn parse() -> (BoardConfig, ViewportSettings) {
        let args = Args::parse();

        let settings = ViewportSettings {
            hex_radius: args.hex_radius,
            min_radius: args.min_radius,
            max_radius: args.max_radius,
            zoom_step: args.zoom_step,
        };
        if let Err(err) = settings.validate() {
            Args::command().error(ErrorKind::ValueValidation, err).exit();
        }

        let mut board = BoardConfig {
            width: args.width,
            height: args.height,
            ..BoardConfig::default()
        };
        if let Err(err) = board.validate() {
            Args::command().error(ErrorKind::ValueValidation, err).exit();
        }
        if !args.terrain.is_empty() {
            board.placements = args.terrain;
        }
        (board, settings)
    }
}

#[cfg(feature = "native")]
fn config() -> (BoardConfig, ViewportSettings) {
    cli::parse()
}

#[cfg(not(feature = "native"))]
fn config() -> (BoardConfig, ViewportSettings) {
    (BoardConfig::default(), ViewportSettings::default())
}

fn main() {
    let (board, settings) = config();
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Hexagon Game".into(),
            ..default()
        }),
        ..default()
    }))
    .register_type::<AppState>()
    .init_state::<AppState>()
    .add_plugins(bevy_egui::EguiPlugin::default())
    .add_plugins(BoardPlugin(board))
    .add_plugins(ViewportPlugin(settings))
    .add_plugins(ControlsPlugin(ControlsConfig::default()))
    .add_plugins(BoardViewPlugin(BoardViewConfig::default()))
    .add_systems(Update, exit_on_esc)
    .add_systems(Update, toggle_inspector)
    .add_plugins(WorldInspectorPlugin::new().run_if(in_state(AppState::Inspecting)));

    #[cfg(feature = "native")]
    app.add_plugins(RemotePlugin::default())
        .add_plugins(RemoteHttpPlugin::default());

    app.run();
}

fn toggle_inspector(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<AppState>>,
    mut next: ResMut<NextState<AppState>>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        let new_state = match state.get() {
            AppState::Running => AppState::Inspecting,
            AppState::Inspecting => AppState::Running,
        };
        info!("switching to {new_state:?}");
        next.set(new_state);
    }
}

fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
