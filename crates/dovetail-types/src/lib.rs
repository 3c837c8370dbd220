pub mod dihedral;
pub mod ids;
pub mod profile;
pub mod surface;

pub use dihedral::*;
pub use ids::*;
pub use profile::*;
pub use surface::*;
