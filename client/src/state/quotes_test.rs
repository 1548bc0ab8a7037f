use super::*;
use crate::engine::mock::FixtureScoring;
use crate::fixtures::dashboard;

fn quote(id: u32, part: &str, score: u8) -> Quote {
    Quote {
        id,
        part_number: part.to_owned(),
        supplier: format!("Supplier {id}"),
        price: 100.0,
        lead_time_days: 7,
        capacity: "1000/ay".to_owned(),
        quality: "A".to_owned(),
        total_score: score,
        price_score: score,
        time_score: score,
        capacity_score: score,
        quality_score: score,
        risk_score: score,
    }
}

// =============================================================
// ranking
// =============================================================

#[test]
fn fixture_matrix_for_mp001_ranks_by_total_score() {
    let state = QuoteMatrixState::new(dashboard::quotes());
    assert_eq!(state.selected_part, "MP-001");
    let ranked = state.ranked(&FixtureScoring);
    let scores: Vec<u8> = ranked.iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![94, 87, 79]);
    let badges: Vec<_> = ranked.iter().map(|r| r.badge).collect();
    assert_eq!(badges, vec![Some(RankBadge::First), Some(RankBadge::Second), Some(RankBadge::Third)]);
}

#[test]
fn rows_past_third_get_no_badge() {
    let quotes = vec![quote(1, "X", 50), quote(2, "X", 90), quote(3, "X", 70), quote(4, "X", 80)];
    let ranked = rank_quotes(&quotes, "X", &FixtureScoring);
    let ids: Vec<u32> = ranked.iter().map(|r| r.quote.id).collect();
    assert_eq!(ids, vec![2, 4, 3, 1]);
    assert_eq!(ranked[3].badge, None);
}

#[test]
fn equal_scores_keep_fixture_order() {
    let quotes = vec![quote(1, "X", 80), quote(2, "X", 80), quote(3, "X", 80)];
    let ids: Vec<u32> = rank_quotes(&quotes, "X", &FixtureScoring).iter().map(|r| r.quote.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn ranking_only_includes_selected_part() {
    let mut state = QuoteMatrixState::new(vec![quote(1, "A", 60), quote(2, "B", 90), quote(3, "A", 70)]);
    state.select_part("B");
    let ranked = state.ranked(&FixtureScoring);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].quote.id, 2);
}

#[test]
fn unknown_part_yields_empty_matrix() {
    let mut state = QuoteMatrixState::new(dashboard::quotes());
    state.select_part("ZZ-999");
    assert!(state.ranked(&FixtureScoring).is_empty());
}

// =============================================================
// part chips / criteria
// =============================================================

#[test]
fn part_numbers_are_distinct_in_first_seen_order() {
    let state = QuoteMatrixState::new(vec![quote(1, "B", 1), quote(2, "A", 1), quote(3, "B", 1)]);
    assert_eq!(state.part_numbers(), vec!["B", "A"]);
}

#[test]
fn empty_quote_list_selects_nothing() {
    let state = QuoteMatrixState::new(Vec::new());
    assert!(state.selected_part.is_empty());
    assert!(state.part_numbers().is_empty());
}

#[test]
fn criterion_weights_sum_to_one_hundred() {
    let total: u32 = Criterion::ALL.iter().map(|c| u32::from(c.weight_percent())).sum();
    assert_eq!(total, 100);
}

#[test]
fn sub_score_reads_matching_column() {
    let q = &dashboard::quotes()[1];
    assert_eq!(q.sub_score(Criterion::LeadTime), 98);
    assert_eq!(q.sub_score(Criterion::Risk), 90);
}
