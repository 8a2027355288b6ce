use thiserror::Error;

/// Errors raised while querying or driving a built tree
#[derive(Debug, Error)]
pub enum DomError {
    #[error("node does not exist in this tree")]
    NodeNotFound,

    #[error("no element with id `{0}`")]
    ElementNotFound(String),
}
