use serde::Deserialize;

/// Top-level shape of a `blocks.toml` file.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BlocksConfig {
    #[serde(default)]
    pub blocks: Vec<BlockDef>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct BlockDef {
    pub name: String,
    #[serde(default)]
    pub id: Option<u8>,
    #[serde(default)]
    pub solid: Option<bool>,
    #[serde(default)]
    pub textures: Option<TexturesDef>,
}

/// Per-face texture selection. More specific keys win over `side`, which wins over `all`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TexturesDef {
    pub all: Option<u16>,
    pub side: Option<u16>,
    pub top: Option<u16>,
    pub bottom: Option<u16>,
    pub back: Option<u16>,
    pub front: Option<u16>,
    pub left: Option<u16>,
    pub right: Option<u16>,
}
