use crate::IndexComponentType;

/// Errors raised while building primitive restart models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("index component type {0} is not implemented")]
    Unimplemented(IndexComponentType),
    #[error("invalid index component type: {0}")]
    InvalidComponentType(u32),
    #[error("invalid primitive mode: 0..=6 ∌ {0}")]
    InvalidMode(u32),
}
