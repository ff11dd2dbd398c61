use bridge_core::{recommend, train, BridgeError, CatalogRecord, Engine, EngineConfig, Recommendation, Recommender, Strategy, VectorSpaceRecommender};
use std::collections::{HashMap, HashSet};

fn catalog() -> Vec<CatalogRecord> {
    vec![
        CatalogRecord::new(
            "CS 12300",
            "Programming I: Java",
            "Introduction to the fundamental concepts of programming and problem solving using the Java programming language.",
            &["Java", "Programming"],
        ),
        CatalogRecord::new(
            "CIS 24100",
            "Foundations Of Web Design And Development",
            "Introduction to Web design. HTML, CSS, JavaScript and frontend web development.",
            &["Web Development", "Frontend"],
        ),
        CatalogRecord::new(
            "ITS 26000",
            "Applied Database Technologies",
            "Database query languages, information management concepts, data modeling, and SQL.",
            &["SQL", "Database"],
        ),
        CatalogRecord::new(
            "ACC 20000",
            "Introductory Accounting",
            "Understand what is in financial statements and what the statements say about a business.",
            &["Finance", "Accounting"],
        ),
        CatalogRecord::new(
            "CHM 11500",
            "General Chemistry",
            "Stoichiometry; atomic structure; periodic properties; ionic and covalent bonding.",
            &["Chemistry"],
        ),
    ]
}

fn skills(items: &[&str]) -> Vec<String> { items.iter().map(|s| s.to_string()).collect() }

fn engine() -> Engine { train(catalog(), &EngineConfig::default()).unwrap() }

fn ids(rec: &Recommendation<'_>) -> Vec<String> { rec.courses.iter().map(|c| c.id.clone()).collect() }

#[test]
fn java_on_a_single_record_catalog() {
    let record = CatalogRecord::new("CS101", "Programming I: Java", "Learn the Java programming language.", &["Java", "Programming"]);
    let engine = train(vec![record], &EngineConfig::default()).unwrap();
    let recs = recommend(&engine, &skills(&["Java"]));
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].skill, "Java");
    assert_eq!(recs[0].courses[0].id, "CS101");
}

#[test]
fn java_ranks_the_java_course_first() {
    let engine = engine();
    let recs = engine.recommend(&skills(&["Java"]));
    assert_eq!(recs.len(), 1);
    assert_eq!(ids(&recs[0])[0], "CS 12300");
}

#[test]
fn unrelated_skill_yields_no_entry() {
    let engine = engine();
    let recs = engine.recommend(&skills(&["Quantum Cryptography Hardware"]));
    assert!(recs.is_empty());
}

#[test]
fn taxonomy_bridges_jargon_to_course_vocabulary() {
    let cat = catalog();
    assert!(cat.iter().all(|r| !r.weighted_content(1).to_lowercase().contains("react")));
    let engine = engine();
    let recs = engine.recommend(&skills(&["react"]));
    assert_eq!(recs.len(), 1);
    assert_eq!(ids(&recs[0])[0], "CIS 24100");
}

#[test]
fn repeated_skills_produce_one_entry_for_the_first_spelling() {
    let engine = engine();
    let recs = engine.recommend(&skills(&["SQL", "sql", "SQL"]));
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].skill, "SQL");
    assert_eq!(ids(&recs[0])[0], "ITS 26000");
}

#[test]
fn output_follows_input_order_and_drops_misses() {
    let engine = engine();
    let recs = engine.recommend(&skills(&["Chemistry", "Underwater Basket Weaving", "Java", "  ", "accounting"]));
    let got: Vec<&str> = recs.iter().map(|r| r.skill.as_str()).collect();
    assert_eq!(got, vec!["Chemistry", "Java", "accounting"]);
}

#[test]
fn at_most_two_courses_per_skill() {
    let engine = engine();
    let recs = engine.recommend(&skills(&["programming database web", "java", "sql", "chemistry"]));
    assert!(recs.iter().all(|r| r.courses.len() <= 2));
    assert_eq!(recs[0].courses.len(), 2);
}

#[test]
fn results_are_deterministic() {
    let input = skills(&["programming database web", "react", "SQL", "Java", "finance"]);
    let first = engine();
    let a = first.recommend(&input);
    let b = first.recommend(&input);
    assert_eq!(a, b);
    let second = engine();
    let c = second.recommend(&input);
    let strip = |recs: &[Recommendation<'_>]| recs.iter().map(|r| (r.skill.clone(), ids(r))).collect::<Vec<_>>();
    assert_eq!(strip(&a), strip(&c));
}

#[test]
fn raising_the_threshold_never_adds_courses() {
    let input = skills(&["programming database web", "react", "sql", "java", "web", "statements business"]);
    let thresholds = [0.0, 0.01, 0.03, 0.1, 0.2, 0.4, 0.8];
    let mut previous: Option<HashMap<String, HashSet<String>>> = None;
    for t in thresholds {
        let config = EngineConfig { relevance_threshold: t, top_k: 10, ..Default::default() };
        let engine = train(catalog(), &config).unwrap();
        let current: HashMap<String, HashSet<String>> = engine
            .recommend(&input)
            .iter()
            .map(|r| (r.skill.clone(), ids(r).into_iter().collect()))
            .collect();
        if let Some(prev) = &previous {
            for (skill, courses) in &current {
                let before = prev.get(skill).expect("skill vanished and reappeared");
                assert!(courses.is_subset(before), "threshold {t} added courses for {skill}");
            }
        }
        previous = Some(current);
    }
}

#[test]
fn records_without_text_load_but_never_match() {
    let mut records = catalog();
    records.push(serde_json::from_str(r#"{"id":"BROKEN"}"#).unwrap());
    let engine = train(records, &EngineConfig::default()).unwrap();
    let recs = engine.recommend(&skills(&["java", "sql", "web"]));
    assert!(recs.iter().flat_map(|r| &r.courses).all(|c| c.id != "BROKEN"));
    assert!(engine.record("BROKEN").is_some());
}

#[test]
fn construction_errors_are_fatal() {
    for strategy in [Strategy::VectorSpace, Strategy::Keyword] {
        let config = EngineConfig { strategy, ..Default::default() };
        assert!(matches!(train(Vec::new(), &config), Err(BridgeError::EmptyCorpus)));
        let mut dup = catalog();
        dup.push(dup[2].clone());
        assert!(matches!(train(dup, &config), Err(BridgeError::DuplicateRecordId(_))));
    }
    let bad = EngineConfig { top_k: 0, ..Default::default() };
    assert!(matches!(train(catalog(), &bad), Err(BridgeError::InvalidConfig(_))));
}

#[test]
fn configured_taxonomy_entries_take_part() {
    let mut config = EngineConfig::default();
    assert_eq!(train(catalog(), &config).unwrap().recommend(&skills(&["stoichiometry nerd"])).len(), 1);
    assert!(train(catalog(), &config).unwrap().recommend(&skills(&["lab work"])).is_empty());
    config.taxonomy.push(bridge_core::TaxonomyEntry { term: "lab".into(), related: vec!["chemistry".into()] });
    let engine = train(catalog(), &config).unwrap();
    let recs = engine.recommend(&skills(&["lab work"]));
    assert_eq!(ids(&recs[0]), vec!["CHM 11500"]);
}

#[test]
fn keyword_strategy_matches_literally() {
    let config = EngineConfig { strategy: Strategy::Keyword, ..Default::default() };
    let engine = train(catalog(), &config).unwrap();
    assert_eq!(engine.strategy(), Strategy::Keyword);

    // "java" also occurs inside "javascript"; the title hit sorts first
    let recs = engine.recommend(&skills(&["java"]));
    assert_eq!(ids(&recs[0]), vec!["CS 12300", "CIS 24100"]);

    let recs = engine.recommend(&skills(&["SQL", "sql", "C++", "Chemistry"]));
    let got: Vec<(&str, Vec<String>)> = recs.iter().map(|r| (r.skill.as_str(), ids(r))).collect();
    assert_eq!(got, vec![("SQL", vec!["ITS 26000".to_string()]), ("Chemistry", vec!["CHM 11500".to_string()])]);
}

#[test]
fn recommendations_serialize_as_course_summaries() {
    let engine = engine();
    let recs = engine.recommend(&skills(&["Java"]));
    let json = serde_json::to_value(&recs).unwrap();
    let course = &json[0]["courses"][0];
    assert_eq!(json[0]["skill"], "Java");
    assert_eq!(course["id"], "CS 12300");
    assert_eq!(course["title"], "Programming I: Java");
    assert!(course.get("keywords").is_none());
}

#[test]
fn a_trained_engine_is_shared_across_threads() {
    let engine = engine();
    let input = skills(&["react", "sql", "java"]);
    let expected = engine.recommend(&input);
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| engine.recommend(&input))).collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}

fn kotlin_triplets() -> Vec<CatalogRecord> {
    ["B", "A", "C"]
        .iter()
        .map(|id| CatalogRecord::new(*id, "Kotlin", "Kotlin for mobile programming.", &["Kotlin"]))
        .collect()
}

#[test]
fn equal_scores_keep_catalog_order() {
    let config = EngineConfig { top_k: 3, ..Default::default() };
    let recommender = VectorSpaceRecommender::new(kotlin_triplets(), &config).unwrap();
    let ranked = recommender.rank("kotlin");
    let ranked_ids: Vec<&str> = ranked.iter().map(|s| s.record.id.as_str()).collect();
    assert_eq!(ranked_ids, vec!["B", "A", "C"]);
    assert!(ranked.iter().all(|s| s.score == ranked[0].score));

    let recs = recommender.recommend(&skills(&["kotlin"]));
    assert_eq!(ids(&recs[0]), vec!["B", "A", "C"]);

    let engine = train(kotlin_triplets(), &EngineConfig::default()).unwrap();
    assert_eq!(ids(&engine.recommend(&skills(&["kotlin"]))[0]), vec!["B", "A"]);
}

#[test]
fn a_score_equal_to_the_threshold_is_excluded() {
    let scorer = VectorSpaceRecommender::new(kotlin_triplets(), &EngineConfig::default()).unwrap();
    let score = scorer.rank("kotlin")[0].score;
    assert!(score > 0.0 && score < 1.0);

    let at = EngineConfig { relevance_threshold: score, ..Default::default() };
    assert!(train(kotlin_triplets(), &at).unwrap().recommend(&skills(&["kotlin"])).is_empty());

    let below = EngineConfig { relevance_threshold: score - 1e-9, ..Default::default() };
    assert_eq!(train(kotlin_triplets(), &below).unwrap().recommend(&skills(&["kotlin"])).len(), 1);
}
