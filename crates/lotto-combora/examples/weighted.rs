use lotto_combora::{Constraints, GenerationMode, NumberSet, TicketGenerator, WeightTable};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let mut weights = WeightTable::new();
    for (number, weight) in [(7, 80), (13, 60), (21, 40), (42, 20)] {
        weights.set(number, weight)?;
    }

    let constraints = Constraints::new(
        NumberSet::from_numbers([3])?,
        NumberSet::from_numbers([4, 44])?,
    );

    let mut generator = TicketGenerator::from_entropy();
    let tickets = generator.generate(10, &constraints, GenerationMode::Weighted, &weights)?;
    for ticket in tickets {
        log::info!("Ticket: {ticket}");
    }

    Ok(())
}
