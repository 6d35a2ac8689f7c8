// Globe measurements (world units)
pub const EARTH_RADIUS: f32 = 2.0;
pub const ATMOSPHERE_SCALE: f32 = 1.04;
pub const SUN_MARKER_DISTANCE: f32 = 5.0;
pub const SUN_MARKER_RADIUS: f32 = 0.1;

// Rotation speeds
pub const EARTH_ROTATION_SPEED: f32 = 0.1;

// Sphere tessellation
pub const SPHERE_SECTORS: u32 = 64;
pub const SPHERE_STACKS: u32 = 64;

// Camera
pub const CAMERA_RADIUS: f32 = 13.0;
pub const CAMERA_SPEED: f32 = 0.5;
pub const CAMERA_MIN_RADIUS: f32 = 3.0;
pub const CAMERA_MAX_RADIUS: f32 = 60.0;
pub const CAMERA_ZOOM_STEP: f32 = 0.8;

// Asset paths
pub const EARTH_DAY_TEXTURE: &str = "textures/day.png";
pub const EARTH_NIGHT_TEXTURE: &str = "textures/night.png";
pub const EARTH_CLOUDS_TEXTURE: &str = "textures/specular_clouds.png";
