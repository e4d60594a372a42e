//! Dump the world as pretty-printed JSON.

use crate::error::Result;
use crate::model::World;

pub fn render(world: &World) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(world)?)
}
