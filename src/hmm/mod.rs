pub mod model;
pub mod prob;
pub mod tagger;
