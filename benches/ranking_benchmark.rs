use criterion::{black_box, criterion_group, criterion_main, Criterion};
use podium_engine::{
    ranking::{is_close_match, levenshtein},
    InferenceRequest, Player, RankEngine,
};

const FIRST_NAMES: [&str; 10] = [
    "Alexandra", "Priya", "Sam", "Max", "Yolanda", "Jordan", "Mei", "Tobias", "Ines", "Kwame",
];

fn create_roster(count: usize) -> Vec<Player> {
    (0..count)
        .map(|i| {
            let first = FIRST_NAMES[i % FIRST_NAMES.len()];
            Player::new(i.to_string(), format!("{} {}", first, i))
        })
        .collect()
}

fn create_ocr_text(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("{} {}x 0:{:02}", i + 1, FIRST_NAMES[(i * 7) % FIRST_NAMES.len()], i % 60))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_levenshtein(c: &mut Criterion) {
    c.bench_function("levenshtein_short", |b| {
        b.iter(|| black_box(levenshtein(black_box("maxx"), black_box("max"))))
    });

    c.bench_function("is_close_match_long", |b| {
        b.iter(|| black_box(is_close_match(black_box("a1exandr"), black_box("alexandra"))))
    });
}

fn bench_inference(c: &mut Criterion) {
    let engine = RankEngine::default();

    for (players, lines) in [(10, 20), (50, 50)] {
        let request = InferenceRequest {
            roster: create_roster(players),
            text: Some(create_ocr_text(lines)),
            uploader_id: Some("0".into()),
        };

        c.bench_function(&format!("infer_{}_players_{}_lines", players, lines), |b| {
            b.iter(|| black_box(engine.infer(&request)))
        });
    }
}

criterion_group!(benches, bench_levenshtein, bench_inference);
criterion_main!(benches);
