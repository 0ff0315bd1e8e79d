pub mod controller;
pub mod frame;
pub mod motion;
pub mod node;
pub mod params;
pub mod scanner;

pub use controller::{ChaseController, CommandSink};
pub use frame::Frame;
pub use motion::{MotionMapper, VelocityCommand};
pub use node::BallChaser;
pub use params::{ChaserParams, ParameterManager};
pub use scanner::{FrameScanner, TargetObservation, Zone};
