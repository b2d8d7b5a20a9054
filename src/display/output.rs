use crate::analysis::views::{
    ChampionView, SortKey, StatColumns, Tier, VoucherComparison, AUGMENT_COLUMNS, ITEM_COLUMNS,
};
use crate::dataset::row::DataRow;
use crate::icons::catalog::{Catalogs, IconCatalog};
use crate::icons::lookup::{lookup_augment_icon, lookup_item_icon, placeholder_glyph};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "#")]
    rank: String,
    name: String,
    win_rate: String,
    games: String,
    icon: String,
}

#[derive(Tabled)]
struct VoucherRow {
    source: String,
    win_rate: String,
    games: String,
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_warning(message: &str) {
    println!("{} {}", "⚠️".yellow(), message);
}

pub fn display_champion_list(champions: &[String]) {
    println!("\n{}", format!("🏆 CHAMPIONS ({})", champions.len()).bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    if champions.is_empty() {
        println!("{}", "No champions found in the loaded files".yellow());
        return;
    }

    for chunk in champions.chunks(6) {
        println!("  {}", chunk.join(", "));
    }
    println!("\n{}", "Pass --champion <NAME> to see item and augment rankings.".dimmed());
}

pub fn display_champion_view(view: &ChampionView, catalogs: &Catalogs, sort: SortKey, top: usize) {
    let Some(champion) = view.champion else {
        display_warning("No champion selected");
        return;
    };

    let sort_label = match sort {
        SortKey::WinRate => "win rate",
        SortKey::Games => "games",
    };
    println!(
        "\n{}",
        format!("🎮 {} (sorted by {})", champion, sort_label).bold().cyan()
    );
    println!("{}", "=".repeat(60).cyan());

    display_item_table("💎 PRISMATIC ITEMS", &view.prismatic, &catalogs.items, top);
    display_item_table("⚔️ LEGENDARY ITEMS", &view.legendary, &catalogs.items, top);

    if view.augments.is_empty() {
        println!("\n{}", "✨ AUGMENTS".bold().yellow());
        println!("  {}", "No augment rows for this champion at this sample size".dimmed());
    } else {
        for tier in Tier::ALL {
            let title = format!("✨ {} AUGMENTS", tier.label().to_uppercase());
            display_augment_table(&title, view.augments.get(tier), &catalogs.augments, top);
        }
    }

    display_voucher(view.voucher.as_ref());
    println!();
}

fn display_item_table(title: &str, rows: &[&DataRow], catalog: &IconCatalog, top: usize) {
    let table_rows = stat_rows(rows, "item_name", ITEM_COLUMNS, top, |name| {
        lookup_item_icon(name, catalog).map(str::to_string)
    });
    print_table(title, table_rows);
}

fn display_augment_table(title: &str, rows: &[&DataRow], catalog: &IconCatalog, top: usize) {
    let table_rows = stat_rows(rows, "augment_name", AUGMENT_COLUMNS, top, |name| {
        lookup_augment_icon(name, catalog).map(str::to_string)
    });
    print_table(title, table_rows);
}

fn stat_rows<F>(
    rows: &[&DataRow],
    name_column: &str,
    columns: StatColumns,
    top: usize,
    icon_for: F,
) -> Vec<StatRow>
where
    F: Fn(&str) -> Option<String>,
{
    let limit = if top == 0 { rows.len() } else { top };
    rows.iter()
        .take(limit)
        .enumerate()
        .map(|(idx, row)| {
            let name = row.text(name_column);
            let icon = icon_for(&name).unwrap_or_else(|| placeholder_glyph(&name));
            StatRow {
                rank: format!("#{}", idx + 1),
                win_rate: format!("{:.1}%", row.number(columns.win_rate) * 100.0),
                games: format!("{}", row.number(columns.count)),
                name,
                icon,
            }
        })
        .collect()
}

fn print_table(title: &str, rows: Vec<StatRow>) {
    println!("\n{}", title.bold().yellow());
    if rows.is_empty() {
        println!("  {}", "No rows for this champion at this sample size".dimmed());
        return;
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

fn display_voucher(comparison: Option<&VoucherComparison>) {
    println!("\n{}", "🎟️ VOUCHER VS SHOP".bold().yellow());
    let Some(comparison) = comparison else {
        println!("  {}", "No voucher data for this champion".dimmed());
        return;
    };

    let rows = vec![
        VoucherRow {
            source: "Voucher (2000g)".to_string(),
            win_rate: format!("{:.1}%", comparison.voucher_win_rate * 100.0),
            games: format!("{}", comparison.voucher_games),
        },
        VoucherRow {
            source: "Shop (2500g)".to_string(),
            win_rate: format!("{:.1}%", comparison.shop_win_rate * 100.0),
            games: format!("{}", comparison.shop_games),
        },
    ];

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    let delta = comparison.win_rate_delta() * 100.0;
    let verdict = format!("{:+.1} pts for {} on the voucher roll", delta, comparison.champion);
    if delta >= 0.0 {
        println!("  {}", verdict.green());
    } else {
        println!("  {}", verdict.red());
    }
}
