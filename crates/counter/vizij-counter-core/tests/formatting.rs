use vizij_counter_core::{Counter, CounterConfig, DisplaySpec, Formatter};
use vizij_test_fixtures::counters;

fn formatter(locale: &str, decimals: u32, prefix: &str, suffix: &str) -> Formatter {
    Formatter::new(&DisplaySpec {
        locale: locale.into(),
        decimals,
        prefix: prefix.into(),
        suffix: suffix.into(),
    })
}

fn spaces_normalized(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect()
}

fn finished_text(cfg: &CounterConfig) -> String {
    let mut c = Counter::new(cfg).unwrap();
    c.tick(cfg.duration_ms + 1.0);
    c.text().to_string()
}

#[test]
fn english_integer_end() {
    let cfg: CounterConfig = counters::load("percent").unwrap();
    assert_eq!(finished_text(&cfg), "99");
}

#[test]
fn german_euro_with_prefix_and_suffix() {
    let cfg: CounterConfig = counters::load("euro-de").unwrap();
    assert_eq!(finished_text(&cfg), "€100.001 EUR");
}

#[test]
fn british_english_groups_with_commas() {
    let cfg: CounterConfig = counters::load("leet-gb").unwrap();
    assert_eq!(finished_text(&cfg), "1,337");
}

#[test]
fn lowercase_swedish_tag_resolves_to_swedish_grouping() {
    let cfg: CounterConfig = counters::load("revenue-sv").unwrap();
    assert_eq!(spaces_normalized(&finished_text(&cfg)), "3 500 000");
}

#[test]
fn single_decimal_rating() {
    let cfg: CounterConfig = counters::load("rating").unwrap();
    assert_eq!(finished_text(&cfg), "8.7");
}

#[test]
fn format_is_idempotent() {
    let f = formatter("de", 2, "", "");
    for v in [0.0, 1.005, 12_345.678, -9_999.995, 1e12] {
        assert_eq!(f.format(v), f.format(v));
    }
}

#[test]
fn always_exactly_the_requested_fraction_digits() {
    for decimals in 0..=6u32 {
        let f = formatter("en", decimals, "", "");
        for v in [0.0, 1.0, 2.5, 3.14159, 1234.5678, -0.001, 98765.4321] {
            let text = f.format(v);
            match text.split_once('.') {
                Some((_, frac)) => {
                    assert_eq!(frac.len(), decimals as usize, "{v} → {text}");
                    assert!(frac.chars().all(|c| c.is_ascii_digit()));
                }
                None => assert_eq!(decimals, 0, "{v} → {text} has no fraction"),
            }
        }
    }
}

#[test]
fn rounding_not_truncation() {
    let f = formatter("en", 1, "", "");
    assert_eq!(f.format(8.66), "8.7");
    assert_eq!(f.format(8.64), "8.6");
    assert_eq!(f.format(1.45), "1.5");

    // ties are decided on the printed decimal digits, not the binary expansion
    let f = formatter("en", 2, "", "");
    assert_eq!(f.format(1.005), "1.01");
    assert_eq!(f.format(0.285), "0.29");
    assert_eq!(f.format(2.675), "2.68");
    assert_eq!(f.format(-1.005), "-1.01");
}

#[test]
fn negative_zero_renders_with_minus() {
    let f = formatter("en", 0, "", "");
    assert_eq!(f.format(-0.0), "-0");
}

#[test]
fn unrecognized_locale_renders_with_fallback() {
    let f = formatter("zz-ZZ", 0, "~", "");
    assert_eq!(f.format(12_345.0), "~12,345");
}

#[test]
fn prefix_and_suffix_wrap_negative_numbers() {
    let f = formatter("en", 0, "$", " USD");
    assert_eq!(f.format(-1500.0), "$-1,500 USD");
}
