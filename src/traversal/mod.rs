//! Graph traversal walkthrough core: graph model, instrumented algorithms,
//! step recording and playback. Nothing in here touches the DOM.

mod algorithm;
mod code_cursor;
mod color;
mod engine;
mod error;
mod generate;
mod graph;
mod player;
mod queue;
mod recorder;
mod scene;
mod session;

pub use algorithm::{Algorithm, algorithm_code_lines};
pub use code_cursor::CodeCursor;
pub use color::Color;
pub use engine::{Engine, Outcome, Path};
pub use error::{GraphError, RunError, UnknownAlgorithm};
pub use generate::{GeneratorConfig, SimpleRng};
pub use graph::{Edge, EdgeId, Graph, Node, NodeId, Vec3, parse_weight};
pub use player::StepPlayer;
pub use queue::PriorityQueue;
pub use recorder::{NodeSnapshot, Step, StepRecorder};
pub use scene::{Headless, Panel, Scene, Visual};
pub use session::{Command, Mode, Session};
