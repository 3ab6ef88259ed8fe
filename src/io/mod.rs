pub mod generator;
pub mod loader;
pub mod menu;
pub mod program_info;
pub mod report;
pub mod sample;

pub use generator::random_programs;
pub use loader::load_programs;
pub use menu::Menu;
pub use program_info::ProgramInfo;
pub use sample::sample_programs;
