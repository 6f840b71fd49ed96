//! Language identification by trigram profile similarity.
//!
//! The text is turned into a trigram profile and scored against each
//! language profile with a dot product over shared trigrams. The best
//! strictly positive score wins; earlier languages win ties.
//!
//! Threading:
//! - Everything here is synchronous and allocation-local. With the
//!   `parallel` feature, per-language scoring can run on the rayon pool;
//!   the winner is still picked in slice order.

mod identifier;
mod ranker;
mod similarity;

pub use identifier::{IdentifierMetrics, LanguageIdentifier};
#[cfg(feature = "parallel")]
pub use ranker::identify_language_par;
pub use ranker::{identify_language, identify_language_with, rank_languages};
pub use similarity::cosine_similarity;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{
        build_trigram_profile, normalize_trigram_profile, LanguageProfile, TrigramProfile,
    };
    use glossa_types::{
        Identification, IdentifyConfig, ProfileError, TextScaling, Trigram, WindowMode,
    };
    use proptest::prelude::*;

    fn tri(s: &str) -> Trigram {
        s.parse().expect("valid trigram")
    }

    fn single(code: &str, trigram: &str, weight: f32) -> LanguageProfile {
        LanguageProfile::new(code, [(tri(trigram), weight)].into_iter().collect())
    }

    fn sample_languages(mode: WindowMode) -> Vec<LanguageProfile> {
        let corpora: [(&str, &[&str]); 3] = [
            (
                "en",
                &[
                    "the quick brown fox jumps over the lazy dog",
                    "there is nothing in the world that they would not share",
                    "which of these is the one that you wanted",
                ],
            ),
            (
                "es",
                &[
                    "el rápido zorro marrón salta sobre el perro perezoso",
                    "no hay nada en el mundo que ellos no compartirían",
                    "cuál de estos es el que querías para la casa",
                ],
            ),
            (
                "fr",
                &[
                    "le renard brun rapide saute par-dessus le chien paresseux",
                    "il n'y a rien au monde qu'ils ne partageraient pas",
                    "lequel de ceux-ci est celui que vous vouliez",
                ],
            ),
        ];

        corpora
            .iter()
            .map(|(code, lines)| {
                LanguageProfile::from_text(*code, lines.iter(), mode).expect("sample corpus")
            })
            .collect()
    }

    #[test]
    fn single_trigram_language_matches() {
        let languages = vec![single("en", "the", 1.0)];
        let outcome = identify_language(["the cat sat"], &languages).unwrap();
        assert_eq!(outcome.code(), Some("en"));
        assert_eq!(outcome.score(), Some(1.0));
    }

    #[test]
    fn no_languages_is_no_match() {
        let outcome = identify_language(["the cat sat"], &[]).unwrap();
        assert_eq!(outcome, Identification::NoMatch);
    }

    #[test]
    fn no_shared_trigrams_is_no_match() {
        let languages = vec![single("xx", "zzz", 1.0)];
        let outcome = identify_language(["the cat sat"], &languages).unwrap();
        assert!(!outcome.is_match());
    }

    #[test]
    fn short_text_is_no_match() {
        let languages = sample_languages(WindowMode::Trailing);
        let outcome = identify_language(["hi", "", "ok"], &languages).unwrap();
        assert_eq!(outcome, Identification::NoMatch);
    }

    #[test]
    fn equal_scores_keep_first_language() {
        let languages = vec![
            single("first", "cat", 0.5),
            single("second", "cat", 0.5),
        ];
        let outcome = identify_language(["the cat sat"], &languages).unwrap();
        assert_eq!(outcome.code(), Some("first"));
    }

    #[test]
    fn strictly_higher_later_language_wins() {
        let languages = vec![
            single("low", "cat", 0.5),
            single("zero", "dog", 1.0),
            single("high", "cat", 0.6),
        ];
        let outcome = identify_language(["the cat sat"], &languages).unwrap();
        assert_eq!(outcome.code(), Some("high"));
    }

    #[test]
    fn negative_scores_never_match() {
        let languages = vec![single("neg", "the", -1.0)];
        let outcome = identify_language(["the cat sat"], &languages).unwrap();
        assert_eq!(outcome, Identification::NoMatch);
    }

    #[test]
    fn decode_errors_propagate() {
        let languages = sample_languages(WindowMode::Trailing);
        let lines: [&[u8]; 2] = [b"the quick fox", b"\xc3\x28 broken"];
        let err = identify_language(lines, &languages).unwrap_err();
        assert!(matches!(err, ProfileError::Decode { line: 1, .. }));
    }

    #[test]
    fn identifies_sample_languages() {
        let languages = sample_languages(WindowMode::Trailing);
        let cases = [
            ("en", "they would share the world with the fox"),
            ("es", "el perro no quería nada de la casa"),
            ("fr", "le chien ne partageait rien avec le renard"),
        ];
        for (expected, text) in cases {
            let outcome = identify_language([text], &languages).unwrap();
            assert_eq!(outcome.code(), Some(expected), "text: {text}");
        }
    }

    #[test]
    fn text_scaling_does_not_change_the_winner() {
        let languages = sample_languages(WindowMode::Trailing);
        let text = ["el perro no quería nada de la casa"];

        let raw = identify_language_with(text, &languages, &IdentifyConfig::compatible()).unwrap();
        let scaled = identify_language_with(
            text,
            &languages,
            &IdentifyConfig {
                text_scaling: TextScaling::Normalized,
                ..IdentifyConfig::compatible()
            },
        )
        .unwrap();

        assert_eq!(raw.code(), scaled.code());
        let total = build_trigram_profile(text).unwrap().total_weight() as f32;
        let expected = raw.score().unwrap() / total.sqrt();
        assert!((scaled.score().unwrap() - expected).abs() < 1e-5);
    }

    #[test]
    fn symmetric_config_identifies() {
        let languages = sample_languages(WindowMode::Strict);
        let outcome = identify_language_with(
            ["the fox would share nothing with the dog"],
            &languages,
            &IdentifyConfig::symmetric(),
        )
        .unwrap();
        assert_eq!(outcome.code(), Some("en"));
        assert!(outcome.score().unwrap() > 0.0);
    }

    #[test]
    fn rank_orders_best_first() {
        let languages = vec![
            single("a", "cat", 0.2),
            single("b", "sat", 0.9),
            single("c", "dog", 1.0),
            single("d", "cat", 0.9),
        ];
        let config = IdentifyConfig::default();
        let ranked = rank_languages(["the cat sat"], &languages, &config, 10).unwrap();
        let order: Vec<usize> = ranked.iter().map(|s| s.index).collect();
        assert_eq!(order, vec![1, 3, 0]);

        let top = rank_languages(["the cat sat"], &languages, &config, 1).unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].index, 1);

        let outcome = identify_language(["the cat sat"], &languages).unwrap();
        assert_eq!(outcome.code(), Some(languages[top[0].index].code()));

        assert!(rank_languages(["the cat sat"], &languages, &config, 0)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn cosine_similarity_basic() {
        let a: TrigramProfile = [(tri("abc"), 2.0), (tri("bcd"), 1.0)].into_iter().collect();
        let b: TrigramProfile = [(tri("abc"), 0.5), (tri("xyz"), 4.0)].into_iter().collect();
        assert_eq!(cosine_similarity(&a, &b), 1.0);
        assert_eq!(cosine_similarity(&b, &a), 1.0);
        assert_eq!(cosine_similarity(&a, &TrigramProfile::new()), 0.0);
    }

    #[test]
    fn identifier_tracks_metrics() {
        let mut identifier = LanguageIdentifier::new(sample_languages(WindowMode::Trailing));
        assert_eq!(identifier.len(), 3);

        let metrics = identifier.metrics();
        assert_eq!(metrics.texts_identified, 0);
        assert_eq!(metrics.matches, 0);

        let outcome = identifier.identify(["the dog would share the world"]).unwrap();
        assert_eq!(outcome.code(), Some("en"));
        identifier.identify(["??"]).unwrap();
        assert!(identifier.identify([&b"\xff\xff\xff"[..]]).is_err());

        let metrics = identifier.metrics();
        assert_eq!(metrics.texts_identified, 2);
        assert_eq!(metrics.matches, 1);
        assert_eq!(metrics.no_matches, 1);
    }

    #[test]
    fn identifier_rank_and_add_language() {
        let mut identifier = LanguageIdentifier::default();
        assert!(identifier.is_empty());
        assert_eq!(identifier.identify(["the cat sat"]).unwrap(), Identification::NoMatch);

        identifier.add_language(single("en", "the", 1.0));
        identifier.add_language(single("tie", "the", 1.0));
        let ranked = identifier.rank(["the cat sat"], 5).unwrap();
        assert_eq!(ranked.len(), 2);
        assert_eq!(identifier.language(ranked[0].index).unwrap().code(), "en");
        assert_eq!(identifier.identify(["the cat sat"]).unwrap().code(), Some("en"));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential() {
        let mut languages = sample_languages(WindowMode::Trailing);
        languages.push(languages[0].clone());
        let config = IdentifyConfig::default();
        let text = ["there is nothing the fox would not share"];

        let sequential = identify_language_with(text, &languages, &config).unwrap();
        let parallel = identify_language_par(text, &languages, &config).unwrap();
        assert_eq!(sequential, parallel);

        let mut identifier = LanguageIdentifier::with_config(languages, config);
        assert_eq!(identifier.identify_par(text).unwrap(), sequential);
        assert_eq!(identifier.metrics().matches, 1);
    }

    fn normalized(lines: &[String]) -> TrigramProfile {
        let mut profile = build_trigram_profile(lines).unwrap();
        normalize_trigram_profile(&mut profile).unwrap();
        profile
    }

    proptest! {
        #[test]
        fn cosine_is_commutative(
            a in prop::collection::vec("[a-f ]{3,20}", 1..5),
            b in prop::collection::vec("[a-f ]{3,20}", 1..5)
        ) {
            let a = normalized(&a);
            let b = normalized(&b);
            let ab = cosine_similarity(&a, &b);
            let ba = cosine_similarity(&b, &a);
            prop_assert!((ab - ba).abs() <= 1e-6 * ab.abs().max(1.0));
        }

        #[test]
        fn self_similarity_bounds_subsets(
            lines in prop::collection::vec("[a-f ]{3,20}", 1..5),
            keep in any::<u64>()
        ) {
            let a = normalized(&lines);
            let subset: TrigramProfile = a
                .iter()
                .enumerate()
                .filter(|(i, _)| (keep >> (i % 64)) & 1 == 1)
                .map(|(_, (t, w))| (*t, w))
                .collect();

            let own = cosine_similarity(&a, &a);
            prop_assert!(cosine_similarity(&a, &subset) <= own + 1e-6);
        }

        #[test]
        fn self_similarity_ignores_line_order(lines in prop::collection::vec("[a-z ]{0,24}", 1..6)) {
            prop_assume!(lines.iter().any(|l| l.chars().count() >= 3));
            let forward = normalized(&lines);
            let mut reversed = lines.clone();
            reversed.reverse();
            let backward = normalized(&reversed);

            let f = cosine_similarity(&forward, &forward);
            let b = cosine_similarity(&backward, &backward);
            prop_assert!((f - b).abs() <= 1e-6 * f.max(1.0));
        }
    }
}
