use kitchen_dispatch::{KitchenSetup, OrderGenerator};
use log::info;

const DEFAULT_SETUP: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/kitchen.toml");
const RUSH_SIZE: usize = 40;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .format_timestamp(None)
        .init();

    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_SETUP.to_string());
    let setup = KitchenSetup::from_file(&path)?;
    let menu = setup.menu();
    let seed = setup.config.rush_seed;
    let mut manager = setup.build()?;

    println!("🍽️  Dinner rush: {} orders from {} (seed {})", RUSH_SIZE, path, seed);

    let mut generator = OrderGenerator::new(menu, seed).with_dietary_rate(0.15);
    for (dish, request) in generator.batch(RUSH_SIZE) {
        match request {
            Some(request) => manager.add_dish_to_queue_with_request(dish, &request)?,
            None => manager.add_dish_to_queue(dish)?,
        };
    }

    let ready_now = manager
        .readiness_report()
        .iter()
        .filter(|entry| entry.is_ready())
        .count();
    println!("Ready without backup: {}/{}", ready_now, manager.queue().len());

    // Keep passing while the queue shrinks
    let mut pass = 0;
    loop {
        pass += 1;
        let before = manager.queue().len();
        let report = manager.process_all_dishes();
        info!("Pass {}: {:?}", pass, report.draws);
        println!(
            "Pass {}: prepared {}, drew {} backup units, {} left",
            pass,
            report.prepared_count(),
            report.draws.iter().map(|draw| draw.quantity).sum::<u32>(),
            manager.queue().len()
        );
        if manager.queue().is_empty() || manager.queue().len() == before {
            break;
        }
    }

    if !manager.queue().is_empty() {
        println!("Unserved:");
        print!("{}", manager.queue());
    }
    println!("Backup left:");
    for record in manager.backup().records() {
        println!("  {}: {}", record.name, record.quantity);
    }
    Ok(())
}
