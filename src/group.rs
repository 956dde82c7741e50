//! Model groups: named, ordered sets of generated models.

use std::fmt;

use crate::{
    apply_topology, build_positions, create_model, Error, IndexComponentType, MeshPrimitive,
    Mode, Model, Property, PropertyName,
};

/// Identifiers of the model groups this crate can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelGroupId {
    MeshPrimitiveRestart,
}

impl fmt::Display for ModelGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MeshPrimitiveRestart => f.write_str("Mesh_PrimitiveRestart"),
        }
    }
}

/// A generated set of models, as consumed by an exporter or model registry.
pub trait ModelGroup {
    fn id(&self) -> ModelGroupId;

    /// Generated models, in generation order.
    fn models(&self) -> &[Model];

    /// Properties shared by every model in the group.
    fn common_properties(&self) -> &[Property] {
        &[]
    }

    /// Names of the properties reported by at least one model.
    fn used_properties(&self) -> &[PropertyName];

    /// Whether the group's documentation should omit sample images.
    fn no_sample_images(&self) -> bool {
        false
    }
}

/// Collect the names of every property reported by `models`, in order of first appearance.
pub fn used_properties<'m>(models: impl IntoIterator<Item = &'m Model>) -> Vec<PropertyName> {
    let mut res = Vec::new();
    for prop in models.into_iter().flat_map(|m| m.properties.iter()) {
        if !res.contains(&prop.name) {
            res.push(prop.name);
        }
    }
    res
}

/// Index component types exercised by [PrimitiveRestart], in generation order.
pub const RESTART_INDEX_TYPES: [IndexComponentType; 2] = [
    IndexComponentType::UnsignedByte,
    IndexComponentType::UnsignedShort,
];

/// Models comparing a restart-triggering primitive (left) with an otherwise identical
/// restart-avoiding primitive (right), for every [Mode] and each of [RESTART_INDEX_TYPES].
///
/// Models are ordered by mode first, then by index component type.
#[derive(Debug, Clone)]
pub struct PrimitiveRestart {
    models: Vec<Model>,
    used_properties: Vec<PropertyName>,
}

impl PrimitiveRestart {
    pub const ID: ModelGroupId = ModelGroupId::MeshPrimitiveRestart;

    /// Generate the group. `_images` lists available sample images, none of which this group uses.
    pub fn new(_images: &[String]) -> Result<Self, Error> {
        let mut models = Vec::with_capacity(Mode::ALL.len() * RESTART_INDEX_TYPES.len());
        for mode in Mode::ALL {
            for ty in RESTART_INDEX_TYPES {
                let name = format!("{}_{:02}", Self::ID, models.len());
                models.push(create_model(name, |[restart, plain]| {
                    fill_positions(restart, ty, true)?;
                    fill_positions(plain, ty, false)?;
                    // triggers restart: the last position sits at the restart value
                    let max = last_position(restart);
                    apply_topology(restart, mode, max);
                    // avoids restart
                    let max = last_position(plain);
                    apply_topology(plain, mode, max);
                    Ok(())
                })?);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::info!(group = %Self::ID, count = models.len(), "generated model group");

        Ok(Self {
            used_properties: used_properties(&models),
            models,
        })
    }
}

fn fill_positions(
    primitive: &mut MeshPrimitive,
    ty: IndexComponentType,
    restart: bool,
) -> Result<(), Error> {
    primitive.positions = build_positions(ty, restart)?;
    primitive.index_component_type = ty;
    Ok(())
}

#[inline]
fn last_position(primitive: &MeshPrimitive) -> u32 {
    primitive.last_position().unwrap_or_default()
}

impl ModelGroup for PrimitiveRestart {
    fn id(&self) -> ModelGroupId {
        Self::ID
    }

    fn models(&self) -> &[Model] {
        &self.models
    }

    fn used_properties(&self) -> &[PropertyName] {
        &self.used_properties
    }

    fn no_sample_images(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        let group = PrimitiveRestart::new(&[]).unwrap();
        assert_eq!(group.models()[0].name, "Mesh_PrimitiveRestart_00");
        assert_eq!(group.models()[13].name, "Mesh_PrimitiveRestart_13");
    }

    #[test]
    fn used_property_order() {
        let group = PrimitiveRestart::new(&[]).unwrap();
        assert_eq!(
            group.used_properties(),
            &[
                PropertyName::IndicesComponentType,
                PropertyName::LeftPrimitiveIndices,
                PropertyName::RightPrimitiveIndices,
                PropertyName::Mode,
            ]
        );
        assert!(group.common_properties().is_empty());
        assert!(group.no_sample_images());
    }

    #[test]
    fn used_properties_deduplicates() {
        let model = |props: Vec<Property>| Model {
            name: String::new(),
            properties: props,
            scene: Default::default(),
            loadable: None,
        };
        let models = [
            model(vec![Property::new(PropertyName::Mode, "Points")]),
            model(vec![
                Property::new(PropertyName::LeftPrimitiveIndices, "[0]"),
                Property::new(PropertyName::Mode, "Lines"),
            ]),
        ];
        assert_eq!(
            used_properties(&models),
            vec![PropertyName::Mode, PropertyName::LeftPrimitiveIndices]
        );
        assert!(used_properties(&models[..0]).is_empty());
    }
}
