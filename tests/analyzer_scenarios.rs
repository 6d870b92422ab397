// tests/analyzer_scenarios.rs
//! End-to-end scenarios through the public API.

use resume_matcher::{EngineConfig, ResumeAnalyzer, SkillTaxonomy};

fn analyzer() -> ResumeAnalyzer {
    ResumeAnalyzer::new(EngineConfig::default(), SkillTaxonomy::default()).unwrap()
}

const FRONTEND_RESUME: &str = "\
Alex Moreau
alex@example.com

Summary
Frontend engineer with 6+ years of experience building web applications.

Experience
Frontend Engineer at Nimbus 2019 - Present
- Shipped React dashboards used by 40% of customers
- Deployed services on AWS with Docker

Skills
JavaScript, TypeScript, React, AWS, Docker, Git

Education
Bachelor of Science in Computer Science, City University, 2017";

const FRONTEND_JOB: &str = "\
Senior Frontend Engineer
At Vertex

Requirements:
JavaScript and React are required
AWS experience is a must have
Kubernetes and GraphQL are preferred
5+ years of experience required
Bachelor's degree in a technical field";

#[tokio::test]
async fn matched_and_missing_skills_are_reported() {
    let report = analyzer().analyze(FRONTEND_RESUME, FRONTEND_JOB).await;

    let matched = &report.skills_match.matched;
    assert!(matched.contains(&"JavaScript".to_string()));
    assert!(matched.contains(&"React".to_string()));
    assert!(matched.contains(&"AWS".to_string()));

    let missing = &report.skills_match.missing;
    assert!(missing.contains(&"Kubernetes".to_string()));
    assert!(missing.contains(&"GraphQL".to_string()));

    // partition: every JD skill is in exactly one bucket
    for skill in matched {
        assert!(!missing.contains(skill));
    }
}

#[tokio::test]
async fn two_of_three_required_skills_split_correctly() {
    let report = analyzer()
        .analyze(
            "5 years of JavaScript and React experience",
            "JavaScript, React and AWS are required",
        )
        .await;
    assert_eq!(
        report.skills_match.matched,
        vec!["JavaScript".to_string(), "React".to_string()]
    );
    assert_eq!(report.skills_match.missing, vec!["AWS".to_string()]);
    assert!(report
        .experience
        .gaps
        .iter()
        .any(|g| g.contains("AWS")));
}

#[tokio::test]
async fn strong_match_scores_high_and_meets_education() {
    let report = analyzer().analyze(FRONTEND_RESUME, FRONTEND_JOB).await;
    assert!(report.match_score >= 50, "got {}", report.match_score);
    assert!(report.education.meets_requirements);
    assert!(report
        .suggestions
        .iter()
        .all(|s| s.category != "Education"));
}

#[tokio::test]
async fn empty_resume_still_produces_a_report() {
    let report = analyzer().analyze("", FRONTEND_JOB).await;
    assert!(report.match_score < 30, "got {}", report.match_score);
    assert!(report.skills_match.matched.is_empty());
    assert!(!report.skills_match.missing.is_empty());
    assert!(!report.suggestions.is_empty());
    assert!(!report.education.meets_requirements);
}

#[tokio::test]
async fn all_required_skills_verbatim_leaves_nothing_missing() {
    let resume = "Skills\nJavaScript, React, AWS, Kubernetes, GraphQL\n\n6+ years of experience, degree in education";
    let report = analyzer().analyze(resume, FRONTEND_JOB).await;
    assert!(report.skills_match.missing.is_empty());
    assert!(report
        .suggestions
        .iter()
        .all(|s| s.category != "Skills"));
}

#[tokio::test]
async fn suggestions_are_sorted_by_priority() {
    let report = analyzer().analyze("a short irrelevant text", FRONTEND_JOB).await;
    assert!(!report.suggestions.is_empty());
    for pair in report.suggestions.windows(2) {
        assert!(pair[0].priority <= pair[1].priority);
    }
}

#[tokio::test]
async fn hiring_probability_invariants_hold() {
    for resume in ["", "Skills\nReact", FRONTEND_RESUME] {
        let report = analyzer().analyze(resume, FRONTEND_JOB).await;
        let p = &report.hiring_probability;
        assert_eq!(p.current, report.match_score);
        assert!(p.current <= p.optimized);
        assert!(p.optimized <= 100);
        assert_eq!(p.improvement, p.optimized - p.current);
    }
}

#[tokio::test]
async fn all_scores_stay_in_bounds() {
    for (resume, job) in [
        ("", ""),
        (FRONTEND_RESUME, FRONTEND_JOB),
        (FRONTEND_JOB, FRONTEND_RESUME),
    ] {
        let report = analyzer().analyze(resume, job).await;
        assert!(report.match_score <= 100);
        assert!(report.ats_score <= 100);
        assert!((0.0..=100.0).contains(&report.keywords.density));
        for score in report.category_scores.values() {
            assert!((0.0..=100.0).contains(score));
        }
    }
}

#[tokio::test]
async fn report_round_trips_through_json() {
    let report = analyzer().analyze(FRONTEND_RESUME, FRONTEND_JOB).await;
    let json = serde_json::to_string_pretty(&report).unwrap();
    let parsed: resume_matcher::AnalysisReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.match_score, report.match_score);
    assert_eq!(parsed.suggestions.len(), report.suggestions.len());
}

#[tokio::test]
async fn custom_taxonomy_drives_skill_detection() {
    let taxonomy = SkillTaxonomy::from_toml_str(
        r#"
        [categories]
        programming = ["cobol"]
        "#,
    )
    .unwrap();
    let analyzer = ResumeAnalyzer::new(EngineConfig::default(), taxonomy).unwrap();
    let report = analyzer
        .analyze("Skills\nCOBOL, JavaScript", "COBOL maintainer required")
        .await;
    assert_eq!(report.skills_match.matched, vec!["Cobol".to_string()]);
    // JavaScript is not in the custom taxonomy, so it is never extracted
    assert!(report.skills_match.extra.is_empty());
}
