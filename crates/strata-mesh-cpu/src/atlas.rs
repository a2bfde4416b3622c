use strata_blocks::TextureId;
use strata_geom::Vec2;

/// Lower-left corner and side length of tile `texture_id` in an `atlas_size` x
/// `atlas_size` atlas. Tiles are numbered row-major from the top row; V grows
/// upward.
#[inline]
pub fn atlas_tile(texture_id: TextureId, atlas_size: u16) -> (Vec2, f32) {
    let row = texture_id / atlas_size;
    let col = texture_id - row * atlas_size;
    let s = 1.0 / atlas_size as f32;
    let origin = Vec2::new(col as f32 * s, 1.0 - (row as f32 + 1.0) * s);
    (origin, s)
}

/// UVs for v0..v3 of a quad.
#[inline]
pub fn atlas_uvs(texture_id: TextureId, atlas_size: u16) -> [Vec2; 4] {
    let (o, s) = atlas_tile(texture_id, atlas_size);
    [
        Vec2::new(o.x, o.y),
        Vec2::new(o.x, o.y + s),
        Vec2::new(o.x + s, o.y),
        Vec2::new(o.x + s, o.y + s),
    ]
}
