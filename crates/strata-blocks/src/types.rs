use crate::face::Face;

/// Compact block identifier stored per voxel. `0` is always air.
pub type BlockId = u8;

/// Cell index into the texture atlas.
pub type TextureId = u16;

pub const AIR: BlockId = 0;
pub const BEDROCK: BlockId = 1;
pub const STONE: BlockId = 2;
pub const GRASS: BlockId = 3;
pub const DIRT: BlockId = 4;
pub const SAND: BlockId = 5;
pub const PLANKS: BlockId = 6;

/// Texture id per face, indexed by `Face::index()`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FaceTextures(pub [TextureId; 6]);

impl FaceTextures {
    #[inline]
    pub const fn uniform(t: TextureId) -> Self {
        Self([t; 6])
    }

    /// Same texture on the four sides, distinct top and bottom.
    #[inline]
    pub const fn column(side: TextureId, top: TextureId, bottom: TextureId) -> Self {
        Self([side, side, top, bottom, side, side])
    }

    #[inline]
    pub fn get(&self, face: Face) -> TextureId {
        self.0[face.index()]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockType {
    pub id: BlockId,
    pub name: String,
    pub solid: bool,
    pub textures: FaceTextures,
}

impl BlockType {
    #[inline]
    pub fn texture_id(&self, face: Face) -> TextureId {
        self.textures.get(face)
    }
}
