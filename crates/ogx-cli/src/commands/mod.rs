pub mod attribute;
pub mod decode;
pub mod dispatch;
pub mod explore;
pub mod metadata;
pub mod relations;
pub mod search;
