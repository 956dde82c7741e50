//! Vertex positions for primitive restart models.
//!
//! Only the number of positions matters to a restart test; the first two and the last position
//! are anchors that make the drawn shape visible, and every other position is the origin.

use nalgebra::point;

use crate::{Error, IndexComponentType, Position};

/// Horizontal shift applied to positions of restart-triggering primitives.
pub const RESTART_OFFSET: f32 = -0.6;
/// Horizontal shift applied to positions of restart-avoiding primitives.
pub const PLAIN_OFFSET: f32 = 0.6;

/// Build the positions of a primitive indexed by `ty`.
///
/// Yields [IndexComponentType::vertex_limit] positions, plus one if `restart` is set, so that
/// the last position sits at the restart value of `ty`.
///
/// # Errors
/// * [Error::Unimplemented] if `ty` is [IndexComponentType::UnsignedInt]
pub fn build_positions(ty: IndexComponentType, restart: bool) -> Result<Vec<Position>, Error> {
    let mut count = ty.vertex_limit()?;
    if restart {
        count += 1;
    }
    let offset = if restart { RESTART_OFFSET } else { PLAIN_OFFSET };

    let mut positions = vec![Position::origin(); count];
    positions[0] = point![0.5 + offset, -0.5, 0.0];
    positions[1] = point![-0.5 + offset, 0.5, 0.0];
    positions[count - 1] = point![-0.5 + offset, -0.5, 0.0];

    #[cfg(feature = "tracing")]
    tracing::trace!(
        component_type = %ty,
        restart,
        count,
        "built primitive positions"
    );
    Ok(positions)
}

/// [build_positions] for a raw glTF `componentType` code.
///
/// # Errors
/// * [Error::InvalidComponentType] if `code` is not an index component type
/// * [Error::Unimplemented] if `code` is `5125` (`UNSIGNED_INT`)
pub fn build_positions_raw(code: u32, restart: bool) -> Result<Vec<Position>, Error> {
    build_positions(IndexComponentType::from_gltf(code)?, restart)
}
