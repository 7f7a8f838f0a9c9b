pub mod vitality;

pub use vitality::VitalityPlugin;
