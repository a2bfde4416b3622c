use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use super::config::{BlockDef, BlocksConfig, TexturesDef};
use super::face::Face;
use super::types::{self, BlockId, BlockType, FaceTextures, TextureId};

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("block id 0 is reserved for air and cannot be solid (got {name:?})")]
    SolidAir { name: String },

    #[error("duplicate block id {id} ({first:?} and {second:?})")]
    DuplicateId {
        id: BlockId,
        first: String,
        second: String,
    },

    #[error("duplicate block name {0:?}")]
    DuplicateName(String),

    #[error("too many block types (ids are u8)")]
    IdOverflow,

    #[error("blocks config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("blocks config read error: {0}")]
    Io(#[from] std::io::Error),
}

/// Static table of block type definitions, indexed by `BlockId`.
#[derive(Default, Clone, Debug)]
pub struct BlockRegistry {
    blocks: Vec<Option<BlockType>>,
    by_name: HashMap<String, BlockId>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// The built-in block table used when no `blocks.toml` is supplied.
    pub fn builtin() -> Self {
        let mut reg = Self::new();
        let table = [
            (types::AIR, "air", false, FaceTextures::uniform(0)),
            (types::BEDROCK, "bedrock", true, FaceTextures::uniform(9)),
            (types::STONE, "stone", true, FaceTextures::uniform(0)),
            (types::GRASS, "grass", true, FaceTextures::column(2, 7, 1)),
            (types::DIRT, "dirt", true, FaceTextures::uniform(1)),
            (types::SAND, "sand", true, FaceTextures::uniform(10)),
            (types::PLANKS, "planks", true, FaceTextures::column(5, 6, 6)),
        ];
        for (id, name, solid, textures) in table {
            reg.insert(BlockType {
                id,
                name: name.to_string(),
                solid,
                textures,
            });
        }
        reg
    }

    fn insert(&mut self, ty: BlockType) {
        let ix = ty.id as usize;
        if self.blocks.len() <= ix {
            self.blocks.resize(ix + 1, None);
        }
        self.by_name.insert(ty.name.clone(), ty.id);
        self.blocks[ix] = Some(ty);
    }

    #[inline]
    pub fn get(&self, id: BlockId) -> Option<&BlockType> {
        self.blocks.get(id as usize).and_then(|b| b.as_ref())
    }

    pub fn id_by_name(&self, name: &str) -> Option<BlockId> {
        self.by_name.get(name).copied()
    }

    /// Unknown ids are treated as non-solid.
    #[inline]
    pub fn is_solid(&self, id: BlockId) -> bool {
        self.get(id).map(|t| t.solid).unwrap_or(false)
    }

    #[inline]
    pub fn texture_id(&self, id: BlockId, face: Face) -> TextureId {
        self.get(id).map(|t| t.texture_id(face)).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlockType> {
        self.blocks.iter().filter_map(|b| b.as_ref())
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, RegistryError> {
        let cfg: BlocksConfig = toml::from_str(toml_str)?;
        Self::from_configs(cfg)
    }

    /// Builds a registry from parsed definitions. Blocks without an id take the
    /// lowest id not claimed by air or any explicit entry, in declaration order;
    /// an `air` entry at id 0 is added when the config does not declare one.
    pub fn from_configs(cfg: BlocksConfig) -> Result<Self, RegistryError> {
        let mut reg = BlockRegistry::new();
        let claimed: HashSet<BlockId> = cfg.blocks.iter().filter_map(|d| d.id).collect();
        if !claimed.contains(&types::AIR) {
            reg.insert(BlockType {
                id: types::AIR,
                name: "air".to_string(),
                solid: false,
                textures: FaceTextures::default(),
            });
        }
        // Slot 0 is always air, declared or implicit.
        let mut next_auto: usize = 1;
        for def in cfg.blocks {
            let id = match def.id {
                Some(id) => id,
                None => {
                    while next_auto <= BlockId::MAX as usize
                        && claimed.contains(&(next_auto as BlockId))
                    {
                        next_auto += 1;
                    }
                    let id = BlockId::try_from(next_auto).map_err(|_| RegistryError::IdOverflow)?;
                    next_auto += 1;
                    id
                }
            };
            let ty = compile_def(id, def);
            if ty.id == types::AIR && ty.solid {
                return Err(RegistryError::SolidAir { name: ty.name });
            }
            if let Some(prev) = reg.get(id) {
                return Err(RegistryError::DuplicateId {
                    id,
                    first: prev.name.clone(),
                    second: ty.name,
                });
            }
            if reg.by_name.contains_key(&ty.name) {
                return Err(RegistryError::DuplicateName(ty.name));
            }
            reg.insert(ty);
        }
        Ok(reg)
    }
}

fn compile_def(id: BlockId, def: BlockDef) -> BlockType {
    // Air defaults to non-solid; everything else to solid.
    let solid = def.solid.unwrap_or(id != types::AIR);
    let textures = compile_textures(&def.textures.unwrap_or_default());
    BlockType {
        id,
        name: def.name,
        solid,
        textures,
    }
}

fn compile_textures(t: &TexturesDef) -> FaceTextures {
    let all = t.all.unwrap_or(0);
    let side = t.side.unwrap_or(all);
    let mut out = [0; 6];
    for face in Face::ALL {
        let pick = match face {
            Face::Top => t.top.unwrap_or(all),
            Face::Bottom => t.bottom.unwrap_or(all),
            Face::Back => t.back.unwrap_or(side),
            Face::Front => t.front.unwrap_or(side),
            Face::Left => t.left.unwrap_or(side),
            Face::Right => t.right.unwrap_or(side),
        };
        out[face.index()] = pick;
    }
    FaceTextures(out)
}
