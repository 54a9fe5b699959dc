//! Auth-domain models: platform scopes and the resource owner returned after authorization.

pub mod resource_owner;
pub mod scope;

pub use resource_owner::*;
pub use scope::*;
