use thiserror::Error;

/// Rejected mesh parameters or malformed mesh data
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("{name} must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },

    #[error("{name} must be at least {min}, got {value}")]
    TooFewSegments { name: &'static str, value: u32, min: u32 },

    #[error("mesh would need more than u32::MAX vertices")]
    TooManyVertices,

    #[error("mesh has no {0}")]
    Empty(&'static str),

    #[error("{uvs} uvs for {vertices} vertices")]
    UvCountMismatch { vertices: usize, uvs: usize },

    #[error("triangle {triangle} references vertex {index}, mesh has {vertex_count}")]
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },

    #[error("vertex {0} has a non-finite coordinate")]
    NonFiniteVertex(usize),
}

/// Rejected material coefficients
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MaterialError {
    #[error("shininess must be finite and non-negative, got {0}")]
    InvalidShininess(f32),
}

/// Shader and texture registry failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("shader `{0}` is already registered")]
    DuplicateShader(String),

    #[error("texture `{0}` is already registered")]
    DuplicateTexture(String),

    #[error("no shader named `{0}`")]
    UnknownShader(String),

    #[error("no texture named `{0}`")]
    UnknownTexture(String),
}
