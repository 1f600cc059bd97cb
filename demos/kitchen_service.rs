use kitchen_dispatch::{CuisineType, Dish, IngredientRecord, Station, StationManager};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .init();

    println!("🍳 Starting Kitchen Service");

    let grilled_chicken = Dish::new(
        "Grilled Chicken",
        vec![
            IngredientRecord::new("Chicken", 1, 1, 5.0),
            IngredientRecord::new("Salt", 1, 1, 0.5),
        ],
    )
    .with_prep_time(15)
    .with_price(10.0)
    .with_cuisine(CuisineType::American);
    let beef_wellington = Dish::new(
        "Beef Wellington",
        vec![
            IngredientRecord::new("Beef", 2, 2, 10.0),
            IngredientRecord::new("Pastry", 1, 1, 2.0),
        ],
    )
    .with_prep_time(45)
    .with_price(25.0)
    .with_cuisine(CuisineType::French);
    let vegan_salad = Dish::new(
        "Vegan Salad",
        vec![
            IngredientRecord::new("Lettuce", 1, 1, 0.5),
            IngredientRecord::new("Tomato", 1, 1, 0.5),
        ],
    )
    .with_prep_time(10)
    .with_price(8.0);
    let unknown_dish = Dish::new("Unknown Dish", vec![IngredientRecord::new("Mystery", 1, 1, 5.0)])
        .with_prep_time(20)
        .with_price(15.0);

    let mut manager = StationManager::new();

    let mut grill = Station::new("Grill Station");
    grill.assign_dish(grilled_chicken.clone());
    grill.replenish(IngredientRecord::new("Chicken", 1, 1, 5.0));
    grill.replenish(IngredientRecord::new("Salt", 1, 1, 0.5));

    let mut oven = Station::new("Oven Station");
    oven.assign_dish(beef_wellington.clone());
    oven.replenish(IngredientRecord::new("Beef", 2, 2, 10.0));

    let mut salad = Station::new("Salad Station");
    salad.assign_dish(vegan_salad.clone());
    salad.replenish(IngredientRecord::new("Lettuce", 1, 1, 0.5));
    salad.replenish(IngredientRecord::new("Tomato", 1, 1, 0.5));

    manager.add_station(grill)?;
    manager.add_station(oven)?;
    manager.add_station(salad)?;
    manager.add_station(Station::new("Pasta Station"))?;

    manager.add_backup_ingredients(vec![
        IngredientRecord::new("Chicken", 1, 1, 5.0),
        IngredientRecord::new("Salt", 1, 1, 0.5),
        IngredientRecord::new("Beef", 2, 2, 10.0),
        IngredientRecord::new("Pastry", 1, 1, 2.0),
        IngredientRecord::new("Lettuce", 1, 1, 0.5),
        IngredientRecord::new("Tomato", 1, 1, 0.5),
    ])?;

    // Prepared immediately, needs replenishment, prepared immediately, never prepared
    manager.add_dish_to_queue(grilled_chicken)?;
    manager.add_dish_to_queue(beef_wellington)?;
    manager.add_dish_to_queue(vegan_salad)?;
    manager.add_dish_to_queue(unknown_dish)?;

    let report = manager.process_all_dishes();

    println!();
    println!("Prepared:");
    for prepared in &report.prepared {
        let note = if prepared.replenished { " (after replenishment)" } else { "" };
        println!("  {} at {}{}", prepared.dish_name, prepared.station, note);
    }
    println!("Still queued:");
    print!("{}", manager.queue());

    if manager.queue().dish_names() != vec!["Unknown Dish"] {
        return Err("expected only 'Unknown Dish' to remain queued".into());
    }
    println!("✅ Kitchen service finished");
    Ok(())
}
