//! Replay a persisted session state and print the response it produces
//!
//! Usage: cargo run --bin replay_session -- <state.json> [divisions]

use cube_blocks::math::GridConfig;
use cube_blocks::scene::SceneModel;
use cube_blocks::widget::response;
use cube_blocks::widget::PersistedState;

fn main() {
    cube_blocks::core::logging::init();

    let mut args = std::env::args().skip(1);
    let path = args.next().expect("usage: replay_session <state.json> [divisions]");
    let divisions: u32 = args
        .next()
        .map(|d| d.parse().expect("divisions must be a positive integer"))
        .unwrap_or(4);

    let raw = std::fs::read_to_string(&path).expect("failed to read state file");
    let state = PersistedState::decode(&raw).expect("failed to parse state file");

    let mut scene = SceneModel::new(GridConfig::new(divisions, 100.0));
    state.restore_into(&mut scene);

    println!("{} cubes, {} logged actions", scene.len(), state.log.len());
    for cell in scene.cells() {
        println!("  ({}, {}, {})", cell.x, cell.y, cell.z);
    }

    let payload =
        response::encode(&scene.cells(), divisions).expect("failed to encode response");
    println!("{}", serde_json::to_string_pretty(&payload).expect("failed to serialize"));
}
