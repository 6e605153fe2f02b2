use std::env;

use sky_hood_crop::{crop_with_config, CropConfig};

fn main() {
    tracing_subscriber::fmt().init();

    let mut args = env::args().skip(1);
    let input = args.next().expect("no image path");
    let output = args.next().unwrap_or_else(|| "cropped.png".to_string());
    let config = match args.next() {
        Some(hood) => CropConfig::new().set_hood_pixel_size(hood.parse().expect("hood must be a pixel count")),
        None => CropConfig::new(),
    };

    let image = image::open(input).unwrap();
    let roi = crop_with_config(&image, &config).unwrap();
    println!("{}x{} -> {}x{}", image.width(), image.height(), roi.width(), roi.height());
    roi.save(output).unwrap();
}
