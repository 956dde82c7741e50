use std::{fmt, path::PathBuf};

use crate::{readme::ReadmeString, Error, MeshPrimitive};

/// Names of the properties reported for each model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyName {
    IndicesComponentType,
    LeftPrimitiveIndices,
    RightPrimitiveIndices,
    Mode,
}

impl PropertyName {
    /// Human-readable name, as used in table headers.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::IndicesComponentType => "Indices Component Type",
            Self::LeftPrimitiveIndices => "Left Primitive Indices",
            Self::RightPrimitiveIndices => "Right Primitive Indices",
            Self::Mode => "Mode",
        }
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A descriptive property of a model. Documentation only; has no effect on the model's content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Property {
    pub name: PropertyName,
    pub value: String,
}

impl Property {
    #[inline]
    pub fn new(name: PropertyName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub primitives: Vec<MeshPrimitive>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    pub mesh: Option<Mesh>,
}

/// A set of root-level nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub nodes: Vec<Node>,
}

/// A single generated test model, ready to hand to an exporter.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub name: String,
    pub properties: Vec<Property>,
    pub scene: Scene,
    /// Pre-built asset to load instead of exporting `scene`. Never set for generated models.
    pub loadable: Option<PathBuf>,
}

impl Model {
    pub fn property(&self, name: PropertyName) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Every primitive in the scene, in node order.
    pub fn primitives(&self) -> impl Iterator<Item = &MeshPrimitive> {
        self.scene
            .nodes
            .iter()
            .filter_map(|n| n.mesh.as_ref())
            .flat_map(|m| m.primitives.iter())
    }
}

/// Assemble a model from two primitives.
///
/// `fill` receives two default primitives: the left one, which should trigger primitive restart,
/// and the right one, which should not. The resulting model places both in one mesh, under one
/// node, in one scene.
pub fn create_model<F>(name: impl Into<String>, fill: F) -> Result<Model, Error>
where
    F: FnOnce(&mut [MeshPrimitive; 2]) -> Result<(), Error>,
{
    let name = name.into();
    let mut primitives: [MeshPrimitive; 2] = Default::default();
    fill(&mut primitives)?;

    let [left, right] = &primitives;
    let properties = vec![
        Property::new(
            PropertyName::IndicesComponentType,
            left.index_component_type.to_readme_string(),
        ),
        Property::new(
            PropertyName::LeftPrimitiveIndices,
            left.indices.to_readme_string(),
        ),
        Property::new(
            PropertyName::RightPrimitiveIndices,
            right.indices.to_readme_string(),
        ),
        Property::new(PropertyName::Mode, left.mode.to_readme_string()),
    ];

    #[cfg(feature = "tracing")]
    tracing::debug!(
        model = name.as_str(),
        mode = %left.mode,
        component_type = %left.index_component_type,
        "assembled model"
    );

    Ok(Model {
        name,
        properties,
        scene: Scene {
            nodes: vec![Node {
                mesh: Some(Mesh {
                    primitives: primitives.into(),
                }),
            }],
        },
        loadable: None,
    })
}
