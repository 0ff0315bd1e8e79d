use anyhow::Result;
use std::sync::{Arc, Mutex};

use crate::{
    frame::Frame,
    motion::{MotionMapper, VelocityCommand},
    params::ChaserParams,
    scanner::FrameScanner,
};

/// Drive collaborator: accepts one velocity command per frame.
///
/// The send is fire-and-forget; a failure ends the current frame's
/// processing with no retry.
pub trait CommandSink {
    fn send(&self, cmd: &VelocityCommand) -> Result<()>;
}

/// Per-frame pipeline: validate the buffer, scan it for the target, map the
/// observation to a command, and hand the command to the sink.
///
/// Stateless between frames; only the shared parameters are read, and those
/// are snapshotted once at the top of each frame so a hot reload cannot
/// change the policy mid-pipeline.
pub struct ChaseController<S: CommandSink> {
    sink: S,
    params: Arc<Mutex<ChaserParams>>,
}

impl<S: CommandSink> ChaseController<S> {
    pub fn new(sink: S, params: Arc<Mutex<ChaserParams>>) -> Self {
        Self { sink, params }
    }

    pub fn handle_frame(&self, step: usize, height: usize, data: &[u8]) -> Result<()> {
        let params = self.params.lock().unwrap().clone();

        let frame = Frame::new(step, height, data)?;
        let observation = FrameScanner::new(params.clone()).scan(&frame);
        let command = MotionMapper::new(params.clone()).map(observation);

        if params.debug_mode {
            println!(
                "observation: {:?} -> linear {:.2}, angular {:.2}",
                observation, command.linear, command.angular
            );
        }

        self.sink.send(&command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    #[derive(Default)]
    struct RecordingSink {
        sent: Mutex<Vec<VelocityCommand>>,
    }

    impl CommandSink for Arc<RecordingSink> {
        fn send(&self, cmd: &VelocityCommand) -> Result<()> {
            self.sent.lock().unwrap().push(*cmd);
            Ok(())
        }
    }

    struct FailingSink;

    impl CommandSink for FailingSink {
        fn send(&self, _cmd: &VelocityCommand) -> Result<()> {
            bail!("drive unreachable")
        }
    }

    fn controller_with_recording_sink() -> (Arc<RecordingSink>, ChaseController<Arc<RecordingSink>>)
    {
        let sink = Arc::new(RecordingSink::default());
        let params = Arc::new(Mutex::new(ChaserParams::default()));
        let controller = ChaseController::new(sink.clone(), params);
        (sink, controller)
    }

    #[test]
    fn dark_frame_sends_single_stop() {
        let (sink, controller) = controller_with_recording_sink();

        controller.handle_frame(30, 10, &vec![0u8; 300]).unwrap();

        let sent = sink.sent.lock().unwrap();
        assert_eq!(sent.as_slice(), &[VelocityCommand::stop()]);
    }

    #[test]
    fn left_target_sends_left_turn() {
        let (sink, controller) = controller_with_recording_sink();

        let mut data = vec![0u8; 18];
        data[0..3].fill(255);
        controller.handle_frame(9, 2, &data).unwrap();

        let sent = sink.sent.lock().unwrap();
        assert_eq!(
            sent.as_slice(),
            &[VelocityCommand {
                linear: 0.5,
                angular: -1.0
            }]
        );
    }

    #[test]
    fn malformed_frame_sends_nothing() {
        let (sink, controller) = controller_with_recording_sink();

        let err = controller.handle_frame(9, 2, &[0u8; 17]).unwrap_err();
        assert!(err.to_string().contains("malformed frame"));
        assert!(sink.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn sink_failure_surfaces_as_error() {
        let params = Arc::new(Mutex::new(ChaserParams::default()));
        let controller = ChaseController::new(FailingSink, params);

        let err = controller.handle_frame(9, 1, &[0u8; 9]).unwrap_err();
        assert!(err.to_string().contains("drive unreachable"));
    }
}
