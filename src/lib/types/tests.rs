use proptest::{
    prelude::*,
    test_runner::{Config, TestRunner},
};

use super::{Locale, Slug};

#[test]
fn slug_rejects_only_empty_names() {
    assert!(Slug::parse("").is_none());
    assert_eq!(Slug::parse("a\\b").unwrap().as_str(), "a\\b");
    assert_eq!(Slug::parse("DoublePendulumApp").unwrap().as_str(), "DoublePendulumApp");
}

#[test]
fn derived_filenames_embed_slug() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&"[A-Za-z0-9_]{1,16}", |raw| {
            let slug = Slug::parse(&raw).unwrap();
            prop_assert_eq!(slug.banner_file(), format!("{raw}.png"));
            for locale in Locale::ALL {
                prop_assert_eq!(
                    slug.html_file(locale),
                    format!("{raw}-{}.html", locale.code())
                );
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn locale_order_is_fixed() {
    let codes: Vec<&str> = Locale::ALL.iter().map(|l| l.code()).collect();
    assert_eq!(codes, ["es", "en", "ca"]);
}
