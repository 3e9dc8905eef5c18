pub mod layers;
mod model;
mod parameter;
mod placement;
mod sequential;

pub use model::Model;
pub use parameter::Parameter;
pub use placement::Placement;
pub use sequential::Sequential;
