//! Bakes placeholder globe textures into assets/textures.
//!
//! The renderer samples three maps: day albedo, night albedo and a
//! two-channel specular/clouds mask (R = ocean specular permission,
//! G = cloud coverage). Real Earth imagery is not checked in, so this tool
//! fakes continents and clouds from a few octaves of hashed value noise.

use image::{Rgb, RgbImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

const WIDTH: u32 = 1024;
const HEIGHT: u32 = 512;

// trigonometric hash of a quantized sphere direction
fn cell_hash(cell: [f32; 3], seed: f32) -> f32 {
    let s = cell[0] * 12.9898 + cell[1] * 78.233 + cell[2] * 45.164 + seed;
    (s.sin() * 43758.5453).fract().abs()
}

fn value_noise(dir: [f32; 3], freq: f32, seed: f32) -> f32 {
    let cell = [
        (dir[0] * freq).floor(),
        (dir[1] * freq).floor(),
        (dir[2] * freq).floor(),
    ];
    cell_hash(cell, seed)
}

// fractal sum of value noise octaves
fn fbm(dir: [f32; 3], octaves: u32, base_freq: f32, seed: f32) -> f32 {
    let mut value = 0.0;
    let mut amplitude = 0.5;
    let mut freq = base_freq;
    for octave in 0..octaves {
        value += amplitude * value_noise(dir, freq, seed + octave as f32 * 19.19);
        freq *= 2.0;
        amplitude *= 0.5;
    }
    value
}

fn main() -> Result<(), image::ImageError> {
    std::fs::create_dir_all("assets/textures")?;

    let mut rng = StdRng::seed_from_u64(42);
    let continent_seed: f32 = rng.random_range(0.0..100.0);
    let lights_seed: f32 = rng.random_range(0.0..100.0);
    let cloud_seed: f32 = rng.random_range(0.0..100.0);

    let mut day = RgbImage::new(WIDTH, HEIGHT);
    let mut night = RgbImage::new(WIDTH, HEIGHT);
    let mut mask = RgbImage::new(WIDTH, HEIGHT);

    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            // equirectangular pixel to a point on the unit sphere
            let lon = (x as f32 / WIDTH as f32) * TAU - PI;
            let lat = FRAC_PI_2 - (y as f32 / HEIGHT as f32) * PI;
            let dir = [lat.cos() * lon.cos(), lat.sin(), lat.cos() * lon.sin()];

            let elevation = fbm(dir, 5, 2.0, continent_seed);
            let land = elevation > 0.55;

            let day_pixel = if land {
                let green = 90.0 + elevation * 80.0;
                Rgb([70, green as u8, 45])
            } else {
                Rgb([10, 40, 110])
            };

            // sparse city lights on land
            let night_pixel = if land && fbm(dir, 3, 24.0, lights_seed) > 0.62 {
                Rgb([220, 190, 120])
            } else {
                Rgb([2, 2, 8])
            };

            let clouds = (fbm(dir, 4, 3.0, cloud_seed) * 255.0).min(255.0) as u8;
            let ocean = if land { 0 } else { 255 };

            day.put_pixel(x, y, day_pixel);
            night.put_pixel(x, y, night_pixel);
            mask.put_pixel(x, y, Rgb([ocean, clouds, 0]));
        }
    }

    day.save("assets/textures/day.png")?;
    night.save("assets/textures/night.png")?;
    mask.save("assets/textures/specular_clouds.png")?;

    println!("baked {WIDTH}x{HEIGHT} day/night/specular_clouds into assets/textures");
    Ok(())
}
