pub mod asset;
pub mod host;
pub mod synth;
pub mod wav;
