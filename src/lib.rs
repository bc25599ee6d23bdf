//! Heuristic analysis of generated Cisco configuration answers.
//!
//! The pipeline takes one already-fetched text payload and derives structured
//! facts from it: the dominant configuration type, the devices mentioned, an
//! ordered list of configuration steps, and an inferred network topology. A
//! scene-graph renderer turns the topology into a diagram, and the presenter
//! assembles everything into an exportable, collapsible view.
//!
//! Every stage is a pure function of its inputs: no I/O, no shared state, no
//! failure modes. Unrecognized text degrades to an empty result instead of an
//! error.

pub mod model;
pub mod present;
pub mod render;
pub mod service;

pub use model::{ConfigType, Device, DeviceType, ParsedResponse, Step, Topology};
pub use present::{export_text, ResponseView};
pub use render::{build_scene, render_svg, Scene};
pub use service::{analyze_response, compute_positions};
