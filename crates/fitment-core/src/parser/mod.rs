pub mod lexicon;
pub mod normalize;
pub mod signature;
