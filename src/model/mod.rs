// MODEL: Player, camera and light state
pub mod camera;
pub mod light;
pub mod player;
pub mod rig;

pub use camera::Camera;
pub use light::{Color, Light, LightLocations, LightType};
pub use player::Player;
pub use rig::PlayerRig;
