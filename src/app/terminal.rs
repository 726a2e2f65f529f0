use chrono::Datelike as _;
use console::style;
use lotto_combora::{Draw, PrizeStats, PrizeTier, Session, Ticket, WeightTable};

/// Numbers per row in the weight grid
const WEIGHT_COLUMNS: usize = 7;

/// Header with the draw's month/day, winning numbers and special number
pub fn render_draw(draw: &Draw) -> String {
    let date = draw.draw_date();
    let winning = draw
        .winning_numbers()
        .iter()
        .map(|n| style(format!("{n:02}")).yellow().bold().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "Latest draw {}/{}\n  Winning: {winning}\n  Special: {}",
        date.month(),
        date.day(),
        style(format!("{:02}", draw.special_number())).red().bold()
    )
}

/// One ticket, drawn numbers highlighted in green and the tier appended
pub fn render_ticket(ticket: &Ticket, draw: Option<&Draw>, tier: Option<PrizeTier>) -> String {
    let numbers = ticket
        .numbers()
        .iter()
        .map(|&n| {
            let text = format!("{n:02}");
            if draw.is_some_and(|d| d.is_winning_number(n)) {
                style(text).green().bold().to_string()
            } else {
                style(text).blue().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    match tier {
        Some(tier) => format!("{numbers}  {}", style(format!("<- {tier}")).red().bold()),
        None => numbers,
    }
}

pub fn render_stats(stats: &PrizeStats) -> String {
    if stats.is_empty() {
        return "No winning tickets".to_owned();
    }
    let mut lines = vec![format!("Winning tickets: {}", stats.total_winning())];
    for (tier, count) in stats.iter() {
        let line = format!("  {tier}: {count}");
        if tier == PrizeTier::First {
            lines.push(style(line).red().bold().to_string());
        } else {
            lines.push(line);
        }
    }
    lines.join("\n")
}

/// The whole session: draw header, batch and statistics
pub fn render_session(session: &Session) -> String {
    let mut out = Vec::new();
    match session.draw() {
        Some(draw) => out.push(render_draw(draw)),
        None => out.push(style("Waiting for the latest draw...").dim().to_string()),
    }

    let results = session.results();
    for (index, ticket) in session.batch().iter().enumerate() {
        let tier = results.get(index).and_then(|(_, tier)| *tier);
        out.push(format!(
            "{:>4}. {}",
            index + 1,
            render_ticket(ticket, session.draw(), tier)
        ));
    }

    if let Some(stats) = session.stats() {
        out.push(render_stats(stats));
    }
    out.join("\n")
}

/// Weight grid, nonzero weights in blue
pub fn render_weights(weights: &WeightTable) -> String {
    weights
        .iter()
        .map(|(number, weight)| {
            let cell = format!("{number:02}:{weight:>3}");
            if weight > 0 {
                style(cell).blue().bold().to_string()
            } else {
                style(cell).dim().to_string()
            }
        })
        .collect::<Vec<_>>()
        .chunks(WEIGHT_COLUMNS)
        .map(|row| row.join("  "))
        .collect::<Vec<_>>()
        .join("\n")
}
