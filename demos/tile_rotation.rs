//! Walk through the grid, range, and sequence helpers on a small tile map.
//!
//! Run with `RUST_LOG=debug` to see the unsupported-rotation fallback log.

use rand::thread_rng;

use tileforge_collections::grid::{rotate, transpose, Rotation};
use tileforge_collections::nearest::find_closest;
use tileforge_collections::range::{number_array, number_array_step};
use tileforge_collections::seq::{random_item, shuffle};

fn main() {
    env_logger::init();

    let tiles = vec![vec![1, 2, 3], vec![4, 5, 6]];
    println!("tiles:         {:?}", tiles);
    println!("transposed:    {:?}", transpose(&tiles));
    println!(
        "rotated right: {:?}",
        rotate(tiles.clone(), Rotation::Right)
    );
    println!(
        "rotated 45:    {:?} (unsupported, grid unchanged)",
        rotate(tiles, Rotation::Degrees(45))
    );

    println!("frames:        {:?}", number_array(0, 5));
    println!(
        "timeline:      {:?}",
        number_array_step(0.0, Some(20.0), Some(5.0))
    );

    let zoom_stops = [0.25, 0.5, 1.0, 2.0, 4.0];
    println!("snap 0.8:      {:?}", find_closest(0.8, &zoom_stops));

    let mut rng = thread_rng();
    let mut draw_order = number_array(1, 8);
    shuffle(&mut draw_order, &mut rng);
    println!("draw order:    {:?}", draw_order);
    println!(
        "random frame:  {:?}",
        random_item(&draw_order, .., &mut rng)
    );
}
