use ball_chaser::{BallChaser, ParameterManager};
use rclrs::*;

fn main() -> Result<(), RclrsError> {
    println!("Ball Chaser Node with Rust");

    let param_manager = ParameterManager::new().expect("Failed to load TOML configuration");
    param_manager.start_file_watcher();

    let mut executor = Context::default_from_env()?.create_basic_executor();
    let _node = BallChaser::new(&executor, param_manager.get_params())?;

    executor.spin(SpinOptions::default()).first_error()
}
