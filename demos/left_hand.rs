//! Assembles the ErgoDox left-hand plate and prints its layers.

use keyplate::operations::query::BoundingBox;
use keyplate::plate::{ergodox_left_primary, ergodox_left_thumb, AssemblePlate};
use keyplate::Result;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for keyplate.
    // Override with RUST_LOG env var (e.g. RUST_LOG=keyplate=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("left_hand=info".parse().unwrap_or_default())
        .add_directive("keyplate=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let assembly = AssemblePlate::new(&ergodox_left_primary(), &ergodox_left_thumb()).execute()?;

    println!(
        "primary hull: {} vertices, thumb hull: {} vertices",
        assembly.primary.exterior.len(),
        assembly.thumb.exterior.len()
    );
    for (name, solid) in [
        ("switch plate", &assembly.switch_plate),
        ("spacer", &assembly.spacer),
        ("combined", &assembly.combined),
    ] {
        let aabb = BoundingBox::new(solid).execute()?;
        let size = aabb.size();
        println!(
            "{name:>12}: {:.2} x {:.2} x {:.2} mm, {} prisms",
            size.x,
            size.y,
            size.z,
            solid.prism_count()
        );
    }
    Ok(())
}
