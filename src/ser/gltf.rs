//! Export of [Models](crate::Model) as [glTF](https://github.com/KhronosGroup/glTF) assets.
//!
//! # Layout
//!
//! Each model becomes one asset with a single binary buffer. Per primitive, the buffer holds:
//!
//! * positions: `VEC3`/`FLOAT`, `ARRAY_BUFFER` (`34962`) view, with `min`/`max` as required for
//!   `POSITION` accessors
//! * indices: `SCALAR` of the primitive's component type, `ELEMENT_ARRAY_BUFFER` (`34963`) view
//!
//! Every view starts on a 4-byte boundary. Scenes, nodes, and meshes map one-to-one; the asset's
//! default scene is its first scene.
//!
//! # See Also
//!
//! * [glTF Specification](https://registry.khronos.org/glTF/specs/2.0/glTF-2.0.html)
//! * [GLB File Format](https://registry.khronos.org/glTF/specs/2.0/glTF-2.0.html#binary-gltf-layout)

use std::{borrow::Cow, collections::BTreeMap, mem::size_of};

use ::gltf::{
    binary::{Glb, Header},
    json::{
        self,
        accessor::{ComponentType, GenericComponentType, Type},
        buffer::Target,
        validation::{Checked::Valid, USize64},
    },
};

use crate::{IndexComponentType, MeshPrimitive, Mode, Model, Position};

/// The value of the `generator` field in output glTF assets.
///
/// See also: [glTF Asset Specification](https://registry.khronos.org/glTF/specs/2.0/glTF-2.0.html#asset)
pub const GENERATOR_ID: &str = concat!("restart-models@", env!("CARGO_PKG_VERSION"));

/// Errors related to exporting glTF assets.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Glb(#[from] ::gltf::Error),
    #[error("index {index} does not fit in {component_type}")]
    IndexOutOfRange {
        index: u32,
        component_type: IndexComponentType,
    },
    #[error("binary buffer of {0} bytes exceeds the GLB chunk limit")]
    BufferTooLarge(usize),
}

impl Mode {
    pub fn to_json(self) -> json::mesh::Mode {
        match self {
            Mode::Points => json::mesh::Mode::Points,
            Mode::Lines => json::mesh::Mode::Lines,
            Mode::LineLoop => json::mesh::Mode::LineLoop,
            Mode::LineStrip => json::mesh::Mode::LineStrip,
            Mode::Triangles => json::mesh::Mode::Triangles,
            Mode::TriangleStrip => json::mesh::Mode::TriangleStrip,
            Mode::TriangleFan => json::mesh::Mode::TriangleFan,
        }
    }
}

impl IndexComponentType {
    pub fn to_json(self) -> ComponentType {
        match self {
            IndexComponentType::UnsignedByte => ComponentType::U8,
            IndexComponentType::UnsignedShort => ComponentType::U16,
            IndexComponentType::UnsignedInt => ComponentType::U32,
        }
    }
}

/// Append `0` bytes to `bin` until its length is a multiple of 4.
fn pad(bin: &mut Vec<u8>) {
    while bin.len() % 4 != 0 {
        bin.push(0);
    }
}

#[inline]
fn align4(len: usize) -> usize {
    (len + 3) & !3
}

/// Accumulates buffer data and the views/accessors describing it.
struct Builder {
    root: json::Root,
    bin: Vec<u8>,
    buffer: json::Index<json::Buffer>,
}

impl Builder {
    fn new() -> Self {
        let mut root = json::Root::default();
        root.asset.generator = Some(GENERATOR_ID.to_owned());
        // byte length is filled in by `finish`
        let buffer = root.push(json::Buffer {
            byte_length: USize64(0),
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            uri: None,
        });
        Self {
            root,
            bin: Vec::new(),
            buffer,
        }
    }

    fn view(&mut self, data: &[u8], target: Target) -> json::Index<json::buffer::View> {
        pad(&mut self.bin);
        let offset = self.bin.len();
        self.bin.extend_from_slice(data);
        self.root.push(json::buffer::View {
            buffer: self.buffer,
            byte_length: USize64::from(data.len()),
            byte_offset: Some(USize64::from(offset)),
            byte_stride: None,
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            target: Some(Valid(target)),
        })
    }

    fn positions(&mut self, positions: &[Position]) -> json::Index<json::Accessor> {
        let mut data = Vec::with_capacity(positions.len() * 3 * size_of::<f32>());
        for p in positions {
            for c in p.coords.iter() {
                data.extend_from_slice(&c.to_le_bytes());
            }
        }
        let (min, max) = match positions.split_first() {
            Some((first, rest)) => rest
                .iter()
                .fold((*first, *first), |(min, max), p| (min.inf(p), max.sup(p))),
            None => (Position::origin(), Position::origin()),
        };

        let view = self.view(&data, Target::ArrayBuffer);
        self.root.push(json::Accessor {
            buffer_view: Some(view),
            byte_offset: Some(USize64(0)),
            count: USize64::from(positions.len()),
            component_type: Valid(GenericComponentType(ComponentType::F32)),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(Type::Vec3),
            min: Some(json::Value::from(vec![min.x, min.y, min.z])),
            max: Some(json::Value::from(vec![max.x, max.y, max.z])),
            name: None,
            normalized: false,
            sparse: None,
        })
    }

    fn indices(
        &mut self,
        indices: &[u32],
        ty: IndexComponentType,
    ) -> Result<json::Index<json::Accessor>, Error> {
        let out_of_range = |index| Error::IndexOutOfRange {
            index,
            component_type: ty,
        };
        let mut data = Vec::with_capacity(indices.len() * ty.size());
        for &i in indices {
            match ty {
                IndexComponentType::UnsignedByte => {
                    data.push(u8::try_from(i).map_err(|_| out_of_range(i))?)
                }
                IndexComponentType::UnsignedShort => data.extend_from_slice(
                    &u16::try_from(i).map_err(|_| out_of_range(i))?.to_le_bytes(),
                ),
                IndexComponentType::UnsignedInt => data.extend_from_slice(&i.to_le_bytes()),
            }
        }

        let view = self.view(&data, Target::ElementArrayBuffer);
        Ok(self.root.push(json::Accessor {
            buffer_view: Some(view),
            byte_offset: Some(USize64(0)),
            count: USize64::from(indices.len()),
            component_type: Valid(GenericComponentType(ty.to_json())),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(Type::Scalar),
            min: None,
            max: None,
            name: None,
            normalized: false,
            sparse: None,
        }))
    }

    fn primitive(&mut self, prim: &MeshPrimitive) -> Result<json::mesh::Primitive, Error> {
        let positions = self.positions(&prim.positions);
        let indices = self.indices(&prim.indices, prim.index_component_type)?;
        Ok(json::mesh::Primitive {
            attributes: BTreeMap::from([(Valid(json::mesh::Semantic::Positions), positions)]),
            extensions: Default::default(),
            extras: Default::default(),
            indices: Some(indices),
            material: None,
            mode: Valid(prim.mode.to_json()),
            targets: None,
        })
    }

    fn finish(mut self) -> (json::Root, Vec<u8>) {
        pad(&mut self.bin);
        self.root.buffers[self.buffer.value()].byte_length = USize64::from(self.bin.len());
        (self.root, self.bin)
    }
}

/// Map a model onto a glTF document and the contents of its single binary buffer.
///
/// The buffer has no `uri`; it is meant to be stored as the binary chunk of a GLB file.
pub fn to_json(model: &Model) -> Result<(json::Root, Vec<u8>), Error> {
    let mut builder = Builder::new();

    let mut nodes = Vec::with_capacity(model.scene.nodes.len());
    for node in &model.scene.nodes {
        let mesh = match &node.mesh {
            Some(mesh) => {
                let primitives = mesh
                    .primitives
                    .iter()
                    .map(|p| builder.primitive(p))
                    .collect::<Result<Vec<_>, _>>()?;
                Some(builder.root.push(json::Mesh {
                    extensions: Default::default(),
                    extras: Default::default(),
                    name: None,
                    primitives,
                    weights: None,
                }))
            }
            None => None,
        };
        nodes.push(builder.root.push(json::Node {
            mesh,
            ..Default::default()
        }));
    }
    let scene = builder.root.push(json::Scene {
        extensions: Default::default(),
        extras: Default::default(),
        name: Some(model.name.clone()),
        nodes,
    });
    builder.root.scene = Some(scene);

    Ok(builder.finish())
}

/// Export a model as a binary glTF (`.glb`) file.
pub fn to_glb(model: &Model) -> Result<Vec<u8>, Error> {
    let (root, bin) = to_json(model)?;
    let json = serde_json::to_vec(&root)?;

    // header + JSON chunk header + JSON + BIN chunk header + BIN
    let length = 12 + 8 + align4(json.len()) + 8 + align4(bin.len());
    let length = u32::try_from(length).map_err(|_| Error::BufferTooLarge(bin.len()))?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        model = model.name.as_str(),
        json_len = json.len(),
        bin_len = bin.len(),
        "packing GLB"
    );

    let glb = Glb {
        header: Header {
            magic: *b"glTF",
            version: 2,
            length,
        },
        json: Cow::Owned(json),
        bin: Some(Cow::Owned(bin)),
    };
    Ok(glb.to_vec()?)
}
