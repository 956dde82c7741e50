use std::fmt;

use nalgebra::Point3;
use num_traits::Bounded;

use crate::error::Error;

/// Vertex position attribute; right-handed, as in glTF.
pub type Position = Point3<f32>;

/// Storage width of the values in a primitive's index accessor.
///
/// Discriminants are the glTF `componentType` codes.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndexComponentType {
    #[default]
    UnsignedByte = 5121,
    UnsignedShort = 5123,
    UnsignedInt = 5125,
}

/// The largest value representable by `T`, widened to `u32`.
#[inline]
fn max_of<T: Bounded + Into<u32>>() -> u32 {
    T::max_value().into()
}

impl IndexComponentType {
    pub const ALL: [Self; 3] = [Self::UnsignedByte, Self::UnsignedShort, Self::UnsignedInt];

    #[inline]
    pub fn to_gltf(self) -> u32 {
        self as u32
    }

    pub fn from_gltf(val: u32) -> Result<Self, Error> {
        match val {
            5121 => Ok(Self::UnsignedByte),
            5123 => Ok(Self::UnsignedShort),
            5125 => Ok(Self::UnsignedInt),
            _ => Err(Error::InvalidComponentType(val)),
        }
    }

    /// The index value which triggers primitive restart; the largest value this type can store.
    pub fn restart_value(self) -> u32 {
        match self {
            Self::UnsignedByte => max_of::<u8>(),
            Self::UnsignedShort => max_of::<u16>(),
            Self::UnsignedInt => max_of::<u32>(),
        }
    }

    /// The number of vertices addressable without touching the restart value.
    ///
    /// # Errors
    /// * [Error::Unimplemented] for [UnsignedInt](Self::UnsignedInt)
    pub fn vertex_limit(self) -> Result<usize, Error> {
        match self {
            Self::UnsignedByte | Self::UnsignedShort => Ok(self.restart_value() as usize),
            Self::UnsignedInt => Err(Error::Unimplemented(self)),
        }
    }

    /// Size in bytes of a single index.
    pub fn size(self) -> usize {
        match self {
            Self::UnsignedByte => 1,
            Self::UnsignedShort => 2,
            Self::UnsignedInt => 4,
        }
    }
}

impl fmt::Display for IndexComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsignedByte => f.write_str("UNSIGNED_BYTE"),
            Self::UnsignedShort => f.write_str("UNSIGNED_SHORT"),
            Self::UnsignedInt => f.write_str("UNSIGNED_INT"),
        }
    }
}

/// glTF primitive topology type
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    Points = 0,
    Lines = 1,
    LineLoop = 2,
    LineStrip = 3,
    // Triangles as default: https://registry.khronos.org/glTF/specs/2.0/glTF-2.0.html#schema-reference-mesh-primitive
    #[default]
    Triangles = 4,
    TriangleStrip = 5,
    TriangleFan = 6,
}

impl Mode {
    /// Every mode, in glTF code order.
    pub const ALL: [Self; 7] = [
        Self::Points,
        Self::Lines,
        Self::LineLoop,
        Self::LineStrip,
        Self::Triangles,
        Self::TriangleStrip,
        Self::TriangleFan,
    ];

    #[inline]
    pub fn to_gltf(self) -> u32 {
        self as u32
    }

    pub fn from_gltf(val: u32) -> Result<Self, Error> {
        Self::ALL
            .get(val as usize)
            .copied()
            .ok_or(Error::InvalidMode(val))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Points => "POINTS",
            Self::Lines => "LINES",
            Self::LineLoop => "LINE_LOOP",
            Self::LineStrip => "LINE_STRIP",
            Self::Triangles => "TRIANGLES",
            Self::TriangleStrip => "TRIANGLE_STRIP",
            Self::TriangleFan => "TRIANGLE_FAN",
        })
    }
}

/// A single drawable part of a mesh: positions, indices into them, and the topology used to
/// interpret those indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshPrimitive {
    pub positions: Vec<Position>,
    /// Indices into `positions`. Stored widened; the real width is `index_component_type`.
    pub indices: Vec<u32>,
    pub index_component_type: IndexComponentType,
    /// The method by which vertices are interpreted as topological primitives
    pub mode: Mode,
}

impl MeshPrimitive {
    /// Index of the last position, if there are any positions.
    pub fn last_position(&self) -> Option<u32> {
        self.positions
            .len()
            .checked_sub(1)
            .and_then(|i| u32::try_from(i).ok())
    }

    /// The largest index referenced by this primitive.
    pub fn max_index(&self) -> Option<u32> {
        self.indices.iter().copied().max()
    }

    /// Whether any index equals the restart value of this primitive's component type.
    pub fn triggers_restart(&self) -> bool {
        let restart = self.index_component_type.restart_value();
        self.indices.iter().any(|&i| i == restart)
    }

    /// Indices which do not address a position.
    pub fn out_of_bounds(&self) -> impl Iterator<Item = u32> + '_ {
        let len = self.positions.len();
        self.indices.iter().copied().filter(move |&i| i as usize >= len)
    }
}
