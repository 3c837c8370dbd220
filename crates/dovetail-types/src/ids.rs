use serde::{Deserialize, Serialize};

/// Index of a face in the host shape's face table.
/// 1-based, matching the external kernel indexing. Graph node ids are
/// exactly these indices and are never reassigned or reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub u32);

/// Index of an edge in the host shape's edge table. 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub u32);

/// Index of a vertex in the host shape's vertex table. 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u32);

// Ids serialize as bare numbers so dumps stay readable.
macro_rules! numeric_id_serde {
    ($name:ident) => {
        impl Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.0.serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                u32::deserialize(deserializer).map($name)
            }
        }
    };
}

numeric_id_serde!(FaceId);
numeric_id_serde!(EdgeId);
numeric_id_serde!(VertexId);
