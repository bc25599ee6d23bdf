pub mod analysis;
pub mod classify;
pub mod command;
pub mod device;
pub mod layout;
pub mod normalize;
pub mod segment;
pub mod topology;

pub use analysis::analyze_response;
pub use classify::classify_config_type;
pub use command::{extract_commands, is_config_command};
pub use device::extract_devices;
pub use layout::compute_positions;
pub use normalize::normalize_text;
pub use segment::segment_steps;
pub use topology::build_topology;
