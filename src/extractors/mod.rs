pub mod fields;
pub mod movie_extractor;
