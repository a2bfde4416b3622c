use strata_blocks::config::{BlockDef, BlocksConfig};
use strata_blocks::types::{self, FaceTextures};
use strata_blocks::{BlockRegistry, Face, RegistryError};

#[test]
fn builtin_air_is_never_solid() {
    let reg = BlockRegistry::builtin();
    assert!(!reg.is_solid(types::AIR));
    assert!(reg.is_solid(types::BEDROCK));
    assert!(reg.is_solid(types::STONE));
    assert_eq!(reg.id_by_name("grass"), Some(types::GRASS));
}

#[test]
fn unknown_ids_are_not_solid() {
    let reg = BlockRegistry::builtin();
    assert!(reg.get(200).is_none());
    assert!(!reg.is_solid(200));
    assert_eq!(reg.texture_id(200, Face::Top), 0);
}

#[test]
fn grass_uses_distinct_top_and_bottom() {
    let reg = BlockRegistry::builtin();
    let grass = reg.get(types::GRASS).expect("grass");
    assert_eq!(grass.texture_id(Face::Top), 7);
    assert_eq!(grass.texture_id(Face::Bottom), 1);
    for f in [Face::Back, Face::Front, Face::Left, Face::Right] {
        assert_eq!(grass.texture_id(f), 2);
    }
}

#[test]
fn toml_selectors_resolve_per_face() {
    let reg = BlockRegistry::from_toml_str(
        r#"
        [[blocks]]
        name = "log"
        textures = { side = 5, top = 6, bottom = 6 }

        [[blocks]]
        name = "furnace"
        id = 9
        textures = { all = 3, front = 4 }
    "#,
    )
    .expect("registry");
    assert_eq!(reg.id_by_name("air"), Some(0));
    assert_eq!(reg.id_by_name("log"), Some(1));
    let log = reg.get(1).expect("log");
    assert!(log.solid);
    assert_eq!(log.textures, FaceTextures::column(5, 6, 6));
    let furnace = reg.get(9).expect("furnace");
    assert_eq!(furnace.texture_id(Face::Front), 4);
    assert_eq!(furnace.texture_id(Face::Back), 3);
    assert_eq!(furnace.texture_id(Face::Top), 3);
}

#[test]
fn solid_air_is_rejected() {
    let cfg = BlocksConfig {
        blocks: vec![BlockDef {
            name: "void".into(),
            id: Some(0),
            solid: Some(true),
            textures: None,
        }],
    };
    let err = BlockRegistry::from_configs(cfg).unwrap_err();
    assert!(matches!(err, RegistryError::SolidAir { .. }));
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = BlockRegistry::from_toml_str(
        r#"
        [[blocks]]
        name = "a"
        id = 3
        [[blocks]]
        name = "b"
        id = 3
    "#,
    )
    .unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateId { id: 3, .. }));
}

#[test]
fn declared_air_keeps_slot_zero_from_auto_ids() {
    let reg = BlockRegistry::from_toml_str(
        r#"
        [[blocks]]
        name = "stone"
        [[blocks]]
        name = "air"
        id = 0
        solid = false
    "#,
    )
    .expect("registry");
    assert_eq!(reg.id_by_name("air"), Some(0));
    assert_eq!(reg.id_by_name("stone"), Some(1));
    assert!(reg.is_solid(1));
    assert!(!reg.is_solid(0));
}

#[test]
fn auto_ids_skip_explicitly_claimed_ids() {
    let reg = BlockRegistry::from_toml_str(
        r#"
        [[blocks]]
        name = "a"
        [[blocks]]
        name = "b"
        id = 1
        [[blocks]]
        name = "c"
    "#,
    )
    .expect("registry");
    assert_eq!(reg.id_by_name("a"), Some(2));
    assert_eq!(reg.id_by_name("b"), Some(1));
    assert_eq!(reg.id_by_name("c"), Some(3));
}

#[test]
fn too_many_auto_ids_overflow() {
    let blocks = (0..256)
        .map(|i| BlockDef {
            name: format!("b{i}"),
            id: None,
            solid: None,
            textures: None,
        })
        .collect();
    let err = BlockRegistry::from_configs(BlocksConfig { blocks }).unwrap_err();
    assert!(matches!(err, RegistryError::IdOverflow));
}
