#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// A step or path that the current state does not allow.
    #[error("Validation failed: {0}")]
    Validation(String),
}
