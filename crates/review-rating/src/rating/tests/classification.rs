use crate::rating::{classify, format_score, Band};

#[test]
fn band_boundaries_use_closed_lower_bounds() {
    let cases = [
        (10.0, Band::Excellent),
        (8.5, Band::Excellent),
        (8.49, Band::Good),
        (7.0, Band::Good),
        (6.99, Band::Medium),
        (4.0, Band::Medium),
        (3.99, Band::Weak),
        (0.0, Band::Weak),
    ];
    for (total, band) in cases {
        assert_eq!(classify(total).band, band, "total {total}");
    }
}

#[test]
fn labels_and_descriptions_follow_the_band() {
    let excellent = classify(9.1);
    assert_eq!(excellent.label, "Mükemmel");
    assert_eq!(excellent.description, "Bu ürün sektörde öncü konumda");

    assert_eq!(classify(7.5).label, "İyi");
    assert_eq!(classify(5.0).label, "Orta");

    let weak = classify(1.0);
    assert_eq!(weak.label, "Zayıf");
    assert_eq!(weak.description, "Alternatif ürünleri değerlendirin");
}

#[test]
fn descriptions_are_distinct_per_band() {
    let mut descriptions: Vec<_> = Band::ALL.iter().map(|band| band.description()).collect();
    descriptions.sort();
    descriptions.dedup();
    assert_eq!(descriptions.len(), 4);
}

#[test]
fn nan_totals_classify_as_weak() {
    assert_eq!(classify(f64::NAN).band, Band::Weak);
}

#[test]
fn bands_serialize_in_snake_case() {
    let value = serde_json::to_value(classify(8.7)).expect("serializes");
    assert_eq!(value["band"], "excellent");
    assert_eq!(value["label"], "Mükemmel");
}

#[test]
fn scores_format_with_one_decimal() {
    assert_eq!(format_score(7.8), "7.8");
    assert_eq!(format_score(10.0), "10.0");
    assert_eq!(format_score(6.66), "6.7");
}
