use anyhow::Result;
use luxcalc::draw::color_for;
use luxcalc::sim::fixture::instance_count;
use luxcalc::sim::result::floor_profile;
use luxcalc::{CalcMode, Fixture, RoomConfig, Surface, compute_field};

fn main() -> Result<()> {
    env_logger::init();

    let room = RoomConfig::default();
    let mut fixture = Fixture::new("L1", Surface::Ceiling, 0.5, 0.5, 4000.0);
    fixture.pitch = 2.0;
    let fixtures = vec![fixture];

    println!(
        "Room {:.1} x {:.1} x {:.1} m, chamfer {:.1} m",
        room.width, room.depth, room.height, room.chamfer
    );
    println!(
        "{} fixture types, {} light points",
        fixtures.len(),
        instance_count(&fixtures, &room)
    );
    println!();

    for mode in [CalcMode::Floor, CalcMode::Body] {
        let field = compute_field(&room, &fixtures, mode)?;
        println!("{mode:?} mode");
        println!("{:-<50}", "");
        println!("  Samples:   {}", field.results.len());
        println!("  Average:   {:.1} lux", field.stats.main);
        if mode == CalcMode::Body {
            println!("  Body top:  {:.1} lux", field.stats.top);
            println!("  Body side: {:.1} lux", field.stats.side);
        }
        println!(
            "  Peak:      {:.1} lux ({})",
            field.stats.peak,
            color_for(field.stats.peak, field.stats.peak).to_hex()
        );

        if mode == CalcMode::Floor {
            let profile = floor_profile(&field.results);
            let center = &profile[profile.len() / 2];
            println!("  Mid-section column: {:.1} lux at x={:.2} m", center.1, center.0);
        }
        println!();
    }

    Ok(())
}
