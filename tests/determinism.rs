use docsim::{fingerprint_text, FingerprintConfig, NormalizeConfig};

fn normalize_defaults() -> NormalizeConfig {
    NormalizeConfig::default()
}

fn fingerprint_defaults() -> FingerprintConfig {
    FingerprintConfig::default()
}

#[test]
fn equivalent_inputs_fingerprint_identically() {
    let normalize_cfg = normalize_defaults();
    let fingerprint_cfg = fingerprint_defaults();

    // Casing, punctuation and whitespace variants of the same content.
    let fp_a = fingerprint_text(
        "  Привет,   мир!\nТестовый документ. ",
        &normalize_cfg,
        &fingerprint_cfg,
    )
    .expect("first fingerprint");
    let fp_b = fingerprint_text(
        "привет МИР тестовый ДОКУМЕНТ",
        &normalize_cfg,
        &fingerprint_cfg,
    )
    .expect("second fingerprint");

    assert_eq!(fp_a, fp_b);
}

#[test]
fn repeated_runs_are_bit_identical() {
    let normalize_cfg = normalize_defaults();
    let fingerprint_cfg = fingerprint_defaults();
    let text = "Рабин и Карп предложили алгоритм поиска подстроки на основе хеширования";

    let first = fingerprint_text(text, &normalize_cfg, &fingerprint_cfg).expect("fingerprint");
    for _ in 0..3 {
        let again = fingerprint_text(text, &normalize_cfg, &fingerprint_cfg).expect("fingerprint");
        assert_eq!(first, again);
    }
}

#[test]
fn gram_size_changes_the_fingerprint() {
    let normalize_cfg = normalize_defaults();
    let text = "Скользящее окно обновляет хеш за постоянное время";

    let k5 = fingerprint_text(text, &normalize_cfg, &fingerprint_defaults()).expect("k=5");
    let k7 = fingerprint_text(
        text,
        &normalize_cfg,
        &FingerprintConfig {
            gram_size: 7,
            ..Default::default()
        },
    )
    .expect("k=7");

    assert_eq!(k5.meta.symbol_len, k7.meta.symbol_len);
    assert_eq!(k5.len(), k7.len() + 2);
    assert_ne!(k5.hashes, k7.hashes);
}

#[test]
fn modulus_changes_hashes_but_not_window_count() {
    let normalize_cfg = normalize_defaults();
    let text = "Отпечаток документа состоит из последовательности оконных хешей";

    let narrow = fingerprint_text(text, &normalize_cfg, &fingerprint_defaults()).expect("narrow");
    let wide = fingerprint_text(
        text,
        &normalize_cfg,
        &FingerprintConfig {
            modulus: (1 << 61) - 1,
            ..Default::default()
        },
    )
    .expect("wide");

    assert_eq!(narrow.len(), wide.len());
    assert_ne!(narrow.hashes, wide.hashes);
}
