mod catalog;
mod component;
mod fin_process;
mod params;
mod row;

pub use catalog::{COPPER_COIN_CONDUCTIVITY, InterfaceProperties, MaterialCatalog};
pub use component::{BoardType, ComponentRecord, InterfaceMaterial, Role, UnknownVariant};
pub use fin_process::FinProcess;
pub use params::{
    EdgeClearances, EnclosureLayout, FinPitch, GlobalParameters, MassModel, SpreaderFootprint,
    VERTICAL_GRADIENT_PER_MM,
};
pub use row::ComponentRow;
