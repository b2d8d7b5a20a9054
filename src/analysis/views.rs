use crate::dataset::ingest::Datasets;
use crate::dataset::row::DataRow;
use clap::ValueEnum;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKey {
    #[default]
    WinRate,
    Games,
}

/// Column names carrying the win rate and sample size of a table.
#[derive(Debug, Clone, Copy)]
pub struct StatColumns {
    pub win_rate: &'static str,
    pub count: &'static str,
}

pub const ITEM_COLUMNS: StatColumns = StatColumns {
    win_rate: "win_rate_present",
    count: "n_present",
};

pub const AUGMENT_COLUMNS: StatColumns = StatColumns {
    win_rate: "win_rate",
    count: "n",
};

impl StatColumns {
    fn sort_value(&self, row: &DataRow, key: SortKey) -> f64 {
        match key {
            SortKey::WinRate => row.number(self.win_rate),
            SortKey::Games => row.number(self.count),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Silver,
    Gold,
    Prismatic,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Silver, Tier::Gold, Tier::Prismatic];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "silver" => Some(Tier::Silver),
            "gold" => Some(Tier::Gold),
            "prismatic" => Some(Tier::Prismatic),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Prismatic => "Prismatic",
        }
    }
}

// Keeps the champion's rows that pass `keep` and reach `min_n`, then sorts
// descending. `sort_by` is stable, so ties keep their input order.
fn rank<'a, F>(
    rows: &'a [DataRow],
    champion: &str,
    columns: StatColumns,
    min_n: u32,
    sort: SortKey,
    keep: F,
) -> Vec<&'a DataRow>
where
    F: Fn(&DataRow) -> bool,
{
    let min_n = f64::from(min_n);
    let mut kept: Vec<&DataRow> = rows
        .iter()
        .filter(|row| row.champion() == champion && keep(*row))
        .filter(|row| row.number(columns.count) >= min_n)
        .collect();
    kept.sort_by(|a, b| {
        columns
            .sort_value(b, sort)
            .partial_cmp(&columns.sort_value(a, sort))
            .unwrap_or(Ordering::Equal)
    });
    kept
}

/// Item presence rows for one champion, filtered by sample size and sorted.
pub fn item_rows<'a>(
    rows: &'a [DataRow],
    champion: Option<&str>,
    min_n: u32,
    sort: SortKey,
) -> Vec<&'a DataRow> {
    match champion {
        Some(champion) => rank(rows, champion, ITEM_COLUMNS, min_n, sort, |_| true),
        None => Vec::new(),
    }
}

#[derive(Debug, Default)]
pub struct AugmentBuckets<'a> {
    pub silver: Vec<&'a DataRow>,
    pub gold: Vec<&'a DataRow>,
    pub prismatic: Vec<&'a DataRow>,
}

impl<'a> AugmentBuckets<'a> {
    pub fn get(&self, tier: Tier) -> &[&'a DataRow] {
        match tier {
            Tier::Silver => &self.silver,
            Tier::Gold => &self.gold,
            Tier::Prismatic => &self.prismatic,
        }
    }

    fn bucket_mut(&mut self, tier: Tier) -> &mut Vec<&'a DataRow> {
        match tier {
            Tier::Silver => &mut self.silver,
            Tier::Gold => &mut self.gold,
            Tier::Prismatic => &mut self.prismatic,
        }
    }

    pub fn is_empty(&self) -> bool {
        Tier::ALL.iter().all(|tier| self.get(*tier).is_empty())
    }
}

/// Augment rows for one champion, split by tier and sorted per tier.
/// Rows with a blank or unknown tier are dropped.
pub fn augment_buckets<'a>(
    rows: &'a [DataRow],
    champion: Option<&str>,
    min_n: u32,
    sort: SortKey,
) -> AugmentBuckets<'a> {
    let mut buckets = AugmentBuckets::default();
    let Some(champion) = champion else {
        return buckets;
    };

    let ranked = rank(rows, champion, AUGMENT_COLUMNS, min_n, sort, |row| {
        !row.text("tier_norm").is_empty()
    });

    // Partitioning a sorted list keeps each bucket sorted.
    for row in ranked {
        if let Some(tier) = Tier::parse(&row.text("tier_norm")) {
            buckets.bucket_mut(tier).push(row);
        }
    }
    buckets
}

#[derive(Debug, Clone, PartialEq)]
pub struct VoucherComparison {
    pub champion: String,
    pub voucher_win_rate: f64,
    pub voucher_games: f64,
    pub shop_win_rate: f64,
    pub shop_games: f64,
}

impl VoucherComparison {
    fn from_row(row: &DataRow) -> Self {
        VoucherComparison {
            champion: row.champion(),
            voucher_win_rate: row.number("wr_voucher2000"),
            voucher_games: row.number("n_voucher2000"),
            shop_win_rate: row.number("wr_shop2500"),
            shop_games: row.number("n_shop2500"),
        }
    }

    /// Positive when the voucher roll outperforms buying at full price.
    pub fn win_rate_delta(&self) -> f64 {
        self.voucher_win_rate - self.shop_win_rate
    }
}

pub fn voucher_comparison(rows: &[DataRow], champion: Option<&str>) -> Option<VoucherComparison> {
    let champion = champion?;
    rows.iter()
        .find(|row| row.champion() == champion)
        .map(VoucherComparison::from_row)
}

/// Everything shown for the selected champion.
#[derive(Debug)]
pub struct ChampionView<'a> {
    pub champion: Option<&'a str>,
    pub prismatic: Vec<&'a DataRow>,
    pub legendary: Vec<&'a DataRow>,
    pub augments: AugmentBuckets<'a>,
    pub voucher: Option<VoucherComparison>,
}

impl<'a> ChampionView<'a> {
    pub fn build(datasets: &'a Datasets, champion: Option<&'a str>, min_n: u32, sort: SortKey) -> Self {
        ChampionView {
            champion,
            prismatic: item_rows(&datasets.prismatic, champion, min_n, sort),
            legendary: item_rows(&datasets.legendary, champion, min_n, sort),
            augments: augment_buckets(&datasets.augment, champion, min_n, sort),
            voucher: voucher_comparison(&datasets.voucher, champion),
        }
    }
}
