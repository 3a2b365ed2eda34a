pub mod diagnosis;
pub mod leads;
