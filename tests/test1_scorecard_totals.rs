use golf_journal::scorecard::{HoleEntry, compute_totals, format_to_par};

fn round(values: &[&str], pars: &[i32]) -> Vec<HoleEntry> {
    values
        .iter()
        .zip(pars)
        .enumerate()
        .map(|(i, (v, p))| HoleEntry::new((i + 1).to_string(), *v).with_par(p.to_string()))
        .collect()
}

#[test]
fn test_front_nine_filled_back_nine_empty() {
    let mut values = vec!["4", "4", "3", "5", "4", "4", "3", "5", "4"];
    values.extend(std::iter::repeat_n("", 9));
    let entries = round(&values, &[4; 18]);

    let totals = compute_totals(&entries);
    assert_eq!(totals.out_sum, 36);
    assert_eq!(totals.out_par, 36);
    assert_eq!(totals.in_sum, 0);
    // unfilled back nine does not count its par either
    assert_eq!(totals.in_par, 0);
    assert_eq!(totals.total, 36);
    assert_eq!(totals.to_par_display(), "E");
}

#[test]
fn test_full_round_identities() {
    let pars = [4, 4, 3, 5, 4, 4, 3, 5, 4, 4, 5, 3, 4, 4, 5, 3, 4, 4];
    let values: Vec<String> = pars
        .iter()
        .enumerate()
        .map(|(i, p)| (p + (i as i32 % 3) - 1).to_string())
        .collect();
    let values: Vec<&str> = values.iter().map(String::as_str).collect();

    let totals = compute_totals(&round(&values, &pars));
    assert_eq!(totals.total, totals.out_sum + totals.in_sum);
    assert_eq!(totals.total_par, 72);
    assert_eq!(totals.to_par, totals.total - totals.total_par);
    assert_eq!(totals.to_par, 0);
}

#[test]
fn test_clearing_a_hole_removes_it() {
    let mut entries = round(&["5", "6", "4"], &[4, 5, 3]);
    let before = compute_totals(&entries);
    assert_eq!(before.to_par_display(), "+3");

    entries[1].value.clear();
    let after = compute_totals(&entries);
    assert_eq!(after.total, 9);
    assert_eq!(after.total_par, 7);
    assert_eq!(after.to_par_display(), "+2");
}

#[test]
fn test_under_par_display() {
    let totals = compute_totals(&round(&["3", "3", "2"], &[4, 4, 3]));
    assert_eq!(totals.to_par, -3);
    assert_eq!(format_to_par(totals.to_par), "-3");
}
