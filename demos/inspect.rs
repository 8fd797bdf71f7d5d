//! Reads `font.a3t` from the current directory, and outputs the geometry of each texture.

use std::fs::File;

fn main() {
	let mut file = File::open("font.a3t").expect("failed to open archive");

	a3t_inspect::analyze(&mut file)
		.expect("failed to read archive")
		.textures
		.iter()
		.for_each(|texture| match texture {
			Ok(texture) => println!("{} {} - {}x{}, bitmap at 0x{:X}", texture.ordinal, texture.kind, texture.width, texture.height, texture.bitmap()),
			Err(err) => println!("{}", err),
		})
}
