//! Properties of the generated primitive restart model group.

use restart_models::{
    build_positions, build_positions_raw, Error, IndexComponentType, MeshPrimitive, Mode,
    ModelGroup, PrimitiveRestart, PropertyName, RESTART_INDEX_TYPES,
};

fn group() -> PrimitiveRestart {
    PrimitiveRestart::new(&["Texture_baseColor.png".to_owned()]).unwrap()
}

fn pair(model: &restart_models::Model) -> (&MeshPrimitive, &MeshPrimitive) {
    let prims: Vec<_> = model.primitives().collect();
    assert_eq!(prims.len(), 2, "{}", model.name);
    (prims[0], prims[1])
}

#[test]
fn fourteen_models_in_mode_major_order() {
    let group = group();
    assert_eq!(group.models().len(), 14);

    let expected = Mode::ALL
        .into_iter()
        .flat_map(|mode| RESTART_INDEX_TYPES.into_iter().map(move |ty| (mode, ty)));
    for (model, (mode, ty)) in group.models().iter().zip(expected) {
        let (restart, plain) = pair(model);
        assert_eq!(restart.mode, mode);
        assert_eq!(plain.mode, mode);
        assert_eq!(restart.index_component_type, ty);
        assert_eq!(plain.index_component_type, ty);
    }
}

#[test]
fn position_counts() {
    for model in group().models() {
        let (restart, plain) = pair(model);
        let limit = restart.index_component_type.vertex_limit().unwrap();
        assert_eq!(restart.positions.len(), limit + 1, "{}", model.name);
        assert_eq!(plain.positions.len(), limit, "{}", model.name);
    }
}

#[test]
fn restart_primitive_uses_sentinel() {
    for model in group().models() {
        let (restart, plain) = pair(model);
        let sentinel = restart.index_component_type.restart_value();

        assert_eq!(restart.max_index(), restart.last_position());
        assert_eq!(restart.max_index(), Some(sentinel));
        assert!(restart
            .indices
            .iter()
            .filter(|&&i| i != sentinel)
            .all(|&i| i < sentinel));
        assert!(restart.triggers_restart(), "{}", model.name);

        assert_eq!(plain.max_index(), Some(sentinel - 1));
        assert!(!plain.triggers_restart(), "{}", model.name);
    }
}

#[test]
fn indices_in_bounds() {
    for model in group().models() {
        for prim in model.primitives() {
            assert_eq!(prim.out_of_bounds().count(), 0, "{}", model.name);
        }
    }
}

#[test]
fn lines_unsigned_byte() {
    let group = group();
    let model = &group.models()[2];
    assert_eq!(model.name, "Mesh_PrimitiveRestart_02");

    let (restart, plain) = pair(model);
    assert_eq!(restart.positions.len(), 256);
    assert_eq!(restart.indices, vec![0, 1, 1, 255, 255, 0]);
    assert_eq!(restart.mode, Mode::Lines);
    assert_eq!(plain.positions.len(), 255);
    assert_eq!(plain.indices, vec![0, 1, 1, 254, 254, 0]);
    assert_eq!(plain.mode, Mode::Lines);

    let value = |n| model.property(n).map(|p| p.value.as_str());
    assert_eq!(value(PropertyName::IndicesComponentType), Some("Unsigned Byte"));
    assert_eq!(
        value(PropertyName::LeftPrimitiveIndices),
        Some("[0, 1, 1, 255, 255, 0]")
    );
    assert_eq!(
        value(PropertyName::RightPrimitiveIndices),
        Some("[0, 1, 1, 254, 254, 0]")
    );
    assert_eq!(value(PropertyName::Mode), Some("Lines"));
}

#[test]
fn triangle_fan_unsigned_short() {
    let group = group();
    let (restart, plain) = pair(&group.models()[13]);
    assert_eq!(restart.indices, vec![0, 1, 65535]);
    assert_eq!(plain.indices, vec![0, 1, 65534]);
    assert_eq!(restart.mode, Mode::TriangleFan);
}

#[test]
fn generated_models_are_not_loadable() {
    assert!(group().models().iter().all(|m| m.loadable.is_none()));
}

#[test]
fn unsupported_component_types() {
    assert_eq!(
        build_positions(IndexComponentType::UnsignedInt, false),
        Err(Error::Unimplemented(IndexComponentType::UnsignedInt))
    );
    assert_eq!(
        build_positions_raw(5126, true),
        Err(Error::InvalidComponentType(5126))
    );
}

mod properties {
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;
    use restart_models::{build_positions_raw, Error, IndexComponentType, Mode};

    #[quickcheck]
    fn unknown_component_codes_are_invalid(code: u32) -> TestResult {
        if IndexComponentType::ALL.iter().any(|t| t.to_gltf() == code) {
            return TestResult::discard();
        }
        TestResult::from_bool(
            build_positions_raw(code, false) == Err(Error::InvalidComponentType(code)),
        )
    }

    #[quickcheck]
    fn mode_codes(code: u32) -> bool {
        match Mode::from_gltf(code) {
            Ok(mode) => code <= 6 && mode.to_gltf() == code,
            Err(e) => code > 6 && e == Error::InvalidMode(code),
        }
    }

    #[quickcheck]
    fn patterns_resolve_max(code: u8, max: u32) -> TestResult {
        let Ok(mode) = Mode::from_gltf(u32::from(code)) else {
            return TestResult::discard();
        };
        let max = max.max(2);
        let indices = mode.indices(max);
        TestResult::from_bool(indices.contains(&max) && indices.iter().all(|&i| i <= max))
    }
}
