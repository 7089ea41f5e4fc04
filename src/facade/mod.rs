//! The component boundary: parameters, the full facade solve, and the
//! output model a host marshals back out.

mod generate;
mod model;
mod params;

pub use generate::GenerateFacade;
pub use model::{FacadeModel, Window, WindowTable};
pub use params::FacadeParams;
