use crate::{
    params::ChaserParams,
    scanner::{TargetObservation, Zone},
};

/// Linear/angular speed pair sent to the drive mechanism.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityCommand {
    pub linear: f64,
    pub angular: f64,
}

impl VelocityCommand {
    pub fn stop() -> Self {
        Self {
            linear: 0.0,
            angular: 0.0,
        }
    }
}

/// Maps a target observation to a drive command.
///
/// Pure fixed policy: turn while creeping forward when the target sits in a
/// side band, drive straight at it when centered, stop when it is not seen.
pub struct MotionMapper {
    params: ChaserParams,
}

impl MotionMapper {
    pub fn new(params: ChaserParams) -> Self {
        Self { params }
    }

    pub fn map(&self, obs: TargetObservation) -> VelocityCommand {
        match obs {
            TargetObservation::Found(Zone::Left) => VelocityCommand {
                linear: self.params.approach_speed,
                angular: -self.params.turn_rate,
            },
            TargetObservation::Found(Zone::Center) => VelocityCommand {
                linear: self.params.forward_speed,
                angular: 0.0,
            },
            TargetObservation::Found(Zone::Right) => VelocityCommand {
                linear: self.params.approach_speed,
                angular: self.params.turn_rate,
            },
            TargetObservation::NotFound => VelocityCommand::stop(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(obs: TargetObservation) -> VelocityCommand {
        MotionMapper::new(ChaserParams::default()).map(obs)
    }

    #[test]
    fn left_zone_turns_left_while_creeping() {
        let cmd = map(TargetObservation::Found(Zone::Left));
        assert_eq!(
            cmd,
            VelocityCommand {
                linear: 0.5,
                angular: -1.0
            }
        );
    }

    #[test]
    fn center_zone_drives_straight() {
        let cmd = map(TargetObservation::Found(Zone::Center));
        assert_eq!(
            cmd,
            VelocityCommand {
                linear: 1.0,
                angular: 0.0
            }
        );
    }

    #[test]
    fn right_zone_turns_right_while_creeping() {
        let cmd = map(TargetObservation::Found(Zone::Right));
        assert_eq!(
            cmd,
            VelocityCommand {
                linear: 0.5,
                angular: 1.0
            }
        );
    }

    #[test]
    fn no_target_stops() {
        assert_eq!(map(TargetObservation::NotFound), VelocityCommand::stop());
    }
}
