use anyhow::Result;
use geometry_msgs::msg::Twist;
use rclrs::*;
use sensor_msgs::msg::Image;
use std::sync::{Arc, Mutex};

use crate::{
    controller::{ChaseController, CommandSink},
    motion::VelocityCommand,
    params::ChaserParams,
};

/// Command sink backed by a Twist publisher.
pub struct TwistSink {
    publisher: Publisher<Twist>,
}

impl CommandSink for TwistSink {
    fn send(&self, cmd: &VelocityCommand) -> Result<()> {
        let mut msg = Twist::default();
        msg.linear.x = cmd.linear;
        msg.angular.z = cmd.angular;

        self.publisher.publish(&msg)?;
        Ok(())
    }
}

/// ROS2 adapter: subscribes to the camera feed and drives the chase
/// pipeline once per incoming frame.
#[allow(dead_code)]
pub struct BallChaser {
    image_subscription: Subscription<Image>,
    controller: Arc<ChaseController<TwistSink>>,
}

impl BallChaser {
    pub fn new(executor: &Executor, params: Arc<Mutex<ChaserParams>>) -> Result<Self, RclrsError> {
        let node = executor.create_node("ball_chaser")?;

        let params_lock = params.lock().unwrap();
        if params_lock.debug_mode {
            println!("=== Initial Parameters ===");
            println!("{:#?}", *params_lock);
        }

        let cmd_publisher = node.create_publisher::<Twist>(&params_lock.cmd_topic)?;
        let image_topic = params_lock.image_topic.clone();
        drop(params_lock);

        let controller = Arc::new(ChaseController::new(
            TwistSink {
                publisher: cmd_publisher,
            },
            params,
        ));
        let controller_clone = controller.clone();

        let image_subscription =
            node.create_subscription::<Image, _>(&image_topic, move |msg: Image| {
                if let Err(e) = controller_clone.handle_frame(
                    msg.step as usize,
                    msg.height as usize,
                    &msg.data,
                ) {
                    eprintln!("Error during frame processing: {}", e);
                }
            })?;

        Ok(Self {
            image_subscription,
            controller,
        })
    }
}
