use anyhow::{Context as _, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use lotto_client::{ClientConfig, JsonFileStore, WeightStore, fetch_latest_draw};
use lotto_combora::lotto::MAX_TICKET_COUNT;
use lotto_combora::{GenerationMode, Session, TicketGenerator, WeightTable};

use super::terminal;

pub fn command() -> Command {
    let number = || value_parser!(u8).range(1..=49);

    Command::new("lotto")
        .version(env!("CARGO_PKG_VERSION"))
        .about("6/49 ticket generator and checker")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Set verbose output level"),
        )
        .subcommand_required(true)
        .subcommand(Command::new("draw").about("Fetch and show the latest draw"))
        .subcommand(
            Command::new("generate")
                .about("Generate a batch of tickets")
                .arg(
                    Arg::new("count")
                        .long("count")
                        .short('n')
                        .default_value("1")
                        .help("Number of tickets"),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .short('f')
                        .value_delimiter(',')
                        .value_parser(number())
                        .action(ArgAction::Append)
                        .help("Numbers every ticket must contain"),
                )
                .arg(
                    Arg::new("exclude")
                        .long("exclude")
                        .short('x')
                        .value_delimiter(',')
                        .value_parser(number())
                        .action(ArgAction::Append)
                        .help("Numbers no ticket may contain"),
                )
                .arg(
                    Arg::new("weighted")
                        .long("weighted")
                        .short('w')
                        .action(ArgAction::SetTrue)
                        .help("Sample remaining numbers by stored weight"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_parser(value_parser!(u64))
                        .help("Seed for reproducible batches"),
                )
                .arg(
                    Arg::new("offline")
                        .long("offline")
                        .action(ArgAction::SetTrue)
                        .help("Do not fetch the latest draw"),
                ),
        )
        .subcommand(
            Command::new("weights")
                .about("Inspect or edit the stored weight table")
                .subcommand_required(true)
                .subcommand(
                    Command::new("show").arg(
                        Arg::new("json")
                            .long("json")
                            .action(ArgAction::SetTrue)
                            .help("Print the stored JSON form"),
                    ),
                )
                .subcommand(
                    Command::new("set")
                        .about("Set one weight, clamped to 0-100")
                        .arg(Arg::new("number").required(true).value_parser(number()))
                        .arg(Arg::new("weight").required(true).allow_hyphen_values(true)),
                )
                .subcommand(
                    Command::new("set-all")
                        .about("Set every weight to the same value")
                        .arg(Arg::new("weight").required(true).allow_hyphen_values(true)),
                )
                .subcommand(Command::new("clear").about("Zero every weight and save"))
                .subcommand(Command::new("reset").about("Zero every weight and drop the stored entry")),
        )
}

pub async fn run() -> Result<()> {
    let matches = command().get_matches();

    let log_level = match matches.get_count("verbose") {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    lotto_client::setup(Some(log_level));

    let config = ClientConfig::load()?;
    log::debug!("Using config: {config:?}");

    match matches.subcommand() {
        Some(("draw", _)) => draw(&config).await,
        Some(("generate", sub)) => generate(&config, sub).await,
        Some(("weights", sub)) => weights(&config, sub),
        Some((other, _)) => Err(anyhow::anyhow!("Unknown command: {other}")),
        None => Err(anyhow::anyhow!("No command given")),
    }
}

async fn draw(config: &ClientConfig) -> Result<()> {
    match fetch_latest_draw(&config.api_common()).await {
        Some(draw) => println!("{}", terminal::render_draw(&draw)),
        None => println!("The latest draw is not available yet"),
    }
    Ok(())
}

fn numbers(matches: &ArgMatches, id: &str) -> Vec<u8> {
    matches
        .get_many::<u8>(id)
        .map(|values| values.copied().collect())
        .unwrap_or_default()
}

/// Repeated values are no-ops; a number given to both flags ends up excluded
fn apply_constraints(session: &mut Session, matches: &ArgMatches) -> Result<()> {
    for number in numbers(matches, "force") {
        session.force(number)?;
    }
    for number in numbers(matches, "exclude") {
        session.exclude(number)?;
    }
    Ok(())
}

async fn generate(config: &ClientConfig, matches: &ArgMatches) -> Result<()> {
    let store = WeightStore::new(JsonFileStore::new(&config.store.path));
    let mut session = Session::new(store.load());

    apply_constraints(&mut session, matches)?;
    if matches.get_flag("weighted") {
        session.set_mode(GenerationMode::Weighted);
    }

    if matches.get_flag("offline") {
        log::debug!("Offline, skipping draw fetch");
    } else if let Some(draw) = fetch_latest_draw(&config.api_common()).await {
        session.set_draw(draw);
    } else {
        println!("The latest draw is not available yet");
    }

    let mut generator = match matches.get_one::<u64>("seed") {
        Some(&seed) => TicketGenerator::with_seed(seed),
        None => TicketGenerator::from_entropy(),
    };

    let count = matches
        .get_one::<String>("count")
        .map_or("", String::as_str);
    if !session.generate(count, &mut generator)? {
        println!("Ignoring ticket count {count:?}, enter a number from 1 to {MAX_TICKET_COUNT}");
        return Ok(());
    }

    log::info!(
        "Generated {} ticket(s) in {} mode",
        session.batch().len(),
        session.mode()
    );
    println!("{}", terminal::render_session(&session));
    Ok(())
}

fn weights(config: &ClientConfig, matches: &ArgMatches) -> Result<()> {
    let mut store = WeightStore::new(JsonFileStore::new(&config.store.path));
    let mut table = store.load();

    match matches.subcommand() {
        Some(("show", sub)) => {
            if sub.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                println!("{}", terminal::render_weights(&table));
            }
            return Ok(());
        }
        Some(("set", sub)) => {
            let number = sub
                .get_one::<u8>("number")
                .copied()
                .context("missing number")?;
            let input = sub.get_one::<String>("weight").map_or("", String::as_str);
            let weight = table.set_from_input(number, input)?;
            log::info!("Weight of {number:02} set to {weight}");
        }
        Some(("set-all", sub)) => {
            let input = sub.get_one::<String>("weight").map_or("", String::as_str);
            let weight = lotto_combora::lotto::parse_weight(input);
            table.set_all(weight);
            log::info!("All weights set to {weight}");
        }
        Some(("clear", _)) => table.clear(),
        Some(("reset", _)) => {
            store.reset(&mut table)?;
            log::info!("Weights reset");
            return show_saved(&table);
        }
        _ => return Err(anyhow::anyhow!("Unknown weights command")),
    }

    store.save(&table)?;
    show_saved(&table)
}

fn show_saved(table: &WeightTable) -> Result<()> {
    println!("{}", terminal::render_weights(table));
    Ok(())
}
