use colored::Colorize;

use super::{MatchCardView, ProfileView};

pub fn print_profile(profile: &ProfileView) {
    println!(
        "{}  {}",
        profile.primary_name.bold(),
        profile.rank_text.yellow()
    );
    if let Some(name) = &profile.secondary_name {
        println!("  also known as {}", name);
    }
    println!("  Level {}", profile.level);
}

pub fn print_match_card(card: &MatchCardView) {
    println!();
    println!(
        "{}  {}  {}",
        card.mode.bold(),
        card.time_ago,
        card.match_id.dimmed()
    );

    let Some(player) = &card.player else {
        println!("  {}", "Player not found in this match.".red());
        return;
    };

    let placement = format!("#{}", player.placement);
    let placement = if player.placement == 1 {
        placement.green().bold()
    } else if player.placement <= 4 {
        placement.cyan()
    } else {
        placement.normal()
    };
    println!("  Placement: {}", placement);

    for unit in &player.units {
        let stars = "*".repeat(unit.tier.max(0) as usize);
        if unit.items.is_empty() {
            println!("    {} {}", unit.name, stars);
        } else {
            println!("    {} {}  [{}]", unit.name, stars, unit.items.join(", "));
        }
    }

    if !player.active_traits.is_empty() {
        let traits: Vec<String> = player
            .active_traits
            .iter()
            .map(|t| format!("{} ({})", t.name, t.num_units))
            .collect();
        println!("  Active traits: {}", traits.join(", "));
    }
}
