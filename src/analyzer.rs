// src/analyzer.rs
//! The analysis service: extracts both documents, matches skills and
//! keywords, scores, and assembles the full report. Analysis itself is
//! total; configuration problems surface at construction time.

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::extractor::{
    self, Enhancer, HeadingSplitter, NoopEnhancer, SectionSplitter,
};
use crate::keywords::extract_keywords;
use crate::scoring;
use crate::similarity::{bigram_similarity, find_similar, skills_equivalent, SimilarSkill};
use crate::suggestions::{self, SuggestionInput};
use crate::taxonomy::SkillTaxonomy;
use crate::types::{
    AnalysisReport, EducationAssessment, ExperienceAssessment, ExtractedJobPosting,
    ExtractedProfile, KeywordAnalysis, KeywordMatch, MatchResult,
};
use chrono::Utc;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

const EXTRA_SKILLS_CAP: usize = 5;
const SIMILAR_SKILLS_CAP: usize = 5;
const KEYWORD_MATCH_CAP: usize = 10;
const SIMILAR_KEYWORD_THRESHOLD: f64 = 0.8;

pub struct ResumeAnalyzer {
    config: EngineConfig,
    taxonomy: SkillTaxonomy,
    splitter: Box<dyn SectionSplitter>,
    enhancer: Arc<dyn Enhancer>,
}

impl ResumeAnalyzer {
    pub fn new(config: EngineConfig, taxonomy: SkillTaxonomy) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            config,
            taxonomy,
            splitter: Box::new(HeadingSplitter),
            enhancer: Arc::new(NoopEnhancer),
        })
    }

    pub fn with_enhancer(mut self, enhancer: Arc<dyn Enhancer>) -> Self {
        self.enhancer = enhancer;
        self
    }

    pub fn with_splitter(mut self, splitter: Box<dyn SectionSplitter>) -> Self {
        self.splitter = splitter;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the full pipeline on a résumé and a job posting.
    pub async fn analyze(&self, resume_text: &str, job_text: &str) -> AnalysisReport {
        let timeout = self.config.enhancer_timeout();
        let profile = extractor::extract_profile_enhanced(
            resume_text,
            &self.taxonomy,
            self.splitter.as_ref(),
            self.enhancer.as_ref(),
            timeout,
        )
        .await;
        let posting = extractor::extract_job_posting_enhanced(
            job_text,
            &self.taxonomy,
            self.enhancer.as_ref(),
            timeout,
        )
        .await;
        debug!(
            resume_skills = profile.skills.len(),
            posting_skills = posting.required_skills.len() + posting.preferred_skills.len(),
            "extraction complete"
        );

        let skills_match = self.match_skills(&profile, &posting);
        let keywords = self.match_keywords(resume_text, job_text);

        let jd_keywords = extract_keywords(job_text, self.config.min_keyword_frequency_job);
        let category_scores = scoring::category_scores(&posting, &jd_keywords, resume_text);
        let ats_score = scoring::ats_score(&category_scores, &self.config.category_weights);

        let jd_skill_count = skills_match.matched.len() + skills_match.missing.len();
        let match_score = scoring::match_score(
            &self.config.score_weights,
            skills_match.matched.len(),
            jd_skill_count,
            keywords.density,
            resume_text,
        );

        let suggestions = suggestions::build_suggestions(&SuggestionInput {
            resume_text,
            profile: &profile,
            posting: &posting,
            skills: &skills_match,
            keywords: &keywords,
            keyword_gap_threshold: self.config.keyword_gap_threshold,
            surplus_skill_threshold: self.config.surplus_skill_threshold,
            low_density_threshold: self.config.low_density_threshold,
        });
        let next_steps = suggestions::next_steps(&keywords);
        let hiring_probability = suggestions::project_hiring_probability(match_score, &suggestions);

        info!(match_score, ats_score, "analysis complete");

        AnalysisReport {
            match_score,
            ats_score,
            category_scores,
            experience: assess_experience(match_score, &profile, &posting, &skills_match),
            education: assess_education(&profile, &posting),
            keywords,
            skills_match,
            suggestions,
            next_steps,
            hiring_probability,
            analyzed_at: Utc::now(),
        }
    }

    /// Partition the posting's skills into matched and missing; every JD
    /// skill lands in exactly one bucket.
    fn match_skills(
        &self,
        profile: &ExtractedProfile,
        posting: &ExtractedJobPosting,
    ) -> MatchResult {
        let resume_skills = profile.skill_names();
        let jd_skills = posting.skill_names();

        let mut matched = Vec::new();
        let mut missing = Vec::new();
        for jd_skill in &jd_skills {
            let display = SkillTaxonomy::display_name(jd_skill);
            if resume_skills
                .iter()
                .any(|rs| skills_equivalent(rs, jd_skill))
            {
                matched.push(display);
            } else {
                missing.push(display);
            }
        }

        let mut extra: Vec<String> = resume_skills
            .iter()
            .filter(|rs| !jd_skills.iter().any(|js| skills_equivalent(rs, js)))
            .map(|rs| SkillTaxonomy::display_name(rs))
            .collect();
        extra.truncate(EXTRA_SKILLS_CAP);

        let mut similar: Vec<SimilarSkill> = missing
            .iter()
            .flat_map(|m| find_similar(m, &resume_skills, self.config.similarity_threshold))
            .collect();
        similar.sort_by(|a, b| b.similarity.partial_cmp(&a.similarity).unwrap());
        let mut seen = HashSet::new();
        similar.retain(|s| seen.insert(s.skill.clone()));
        similar.truncate(SIMILAR_SKILLS_CAP);

        MatchResult {
            matched,
            missing,
            extra,
            similar,
        }
    }

    /// Compare keyword universes: both documents are normalized through the
    /// same stemming path, then every JD keyword is bucketed exactly once.
    fn match_keywords(&self, resume_text: &str, job_text: &str) -> KeywordAnalysis {
        let resume_keywords =
            extract_keywords(resume_text, self.config.min_keyword_frequency_resume);
        let jd_keywords = extract_keywords(job_text, self.config.min_keyword_frequency_job);
        let resume_set: HashSet<&str> = resume_keywords.iter().map(String::as_str).collect();

        let mut exact_matches = Vec::new();
        let mut similar_matches = Vec::new();
        let mut related_terms = Vec::new();
        let mut missing_keywords = Vec::new();

        for keyword in &jd_keywords {
            if resume_set.contains(keyword.as_str()) {
                exact_matches.push(keyword.clone());
                continue;
            }
            let scored: Vec<(String, f64)> = resume_keywords
                .iter()
                .map(|rk| (rk.clone(), bigram_similarity(keyword, rk)))
                .filter(|(_, s)| *s >= self.config.similarity_threshold)
                .collect();
            let best = scored
                .iter()
                .map(|(_, s)| *s)
                .fold(0.0_f64, f64::max);
            if best >= SIMILAR_KEYWORD_THRESHOLD {
                similar_matches.push(KeywordMatch {
                    keyword: keyword.clone(),
                    matches: scored.into_iter().map(|(rk, _)| rk).collect(),
                    similarity: best,
                });
            } else if best >= self.config.similarity_threshold {
                related_terms.push(KeywordMatch {
                    keyword: keyword.clone(),
                    matches: scored.into_iter().map(|(rk, _)| rk).collect(),
                    similarity: best,
                });
            } else {
                missing_keywords.push(keyword.clone());
            }
        }

        similar_matches.truncate(KEYWORD_MATCH_CAP);
        related_terms.truncate(KEYWORD_MATCH_CAP);

        let density = scoring::keyword_density(exact_matches.len(), missing_keywords.len());
        KeywordAnalysis {
            exact_matches,
            similar_matches,
            related_terms,
            missing_keywords,
            density,
        }
    }
}

fn assess_experience(
    match_score: u8,
    profile: &ExtractedProfile,
    posting: &ExtractedJobPosting,
    skills: &MatchResult,
) -> ExperienceAssessment {
    let alignment = if match_score > 70 {
        85
    } else if match_score > 50 {
        65
    } else {
        45
    };

    let mut gaps = Vec::new();
    if !skills.missing.is_empty() {
        let listed: Vec<&str> = skills.missing.iter().take(3).map(String::as_str).collect();
        gaps.push(format!("Missing key skills: {}.", listed.join(", ")));
    }
    if let Some(years) = posting.min_experience_years {
        if profile.experience.is_empty() {
            gaps.push(format!(
                "The posting asks for {}+ years of experience but the resume lists no work history.",
                years
            ));
        }
    }
    if let Some(level) = &posting.experience_level {
        if !profile
            .experience
            .iter()
            .any(|e| e.position.to_lowercase().contains(level))
        {
            gaps.push(format!(
                "No role at the {} level appears in the work history.",
                level
            ));
        }
    }

    let mut strengths = Vec::new();
    if !profile.experience.is_empty() {
        strengths.push(format!(
            "{} relevant roles listed with descriptions.",
            profile.experience.len()
        ));
    }
    if profile.experience.iter().any(|e| !e.duration.is_empty()) {
        strengths.push("Work history includes explicit durations.".to_string());
    }

    ExperienceAssessment {
        alignment,
        gaps,
        strengths,
    }
}

fn assess_education(
    profile: &ExtractedProfile,
    posting: &ExtractedJobPosting,
) -> EducationAssessment {
    if !posting.requires_education() {
        return EducationAssessment {
            meets_requirements: true,
            notes: "The posting states no formal education requirements.".to_string(),
        };
    }
    if profile.education.is_empty() {
        EducationAssessment {
            meets_requirements: false,
            notes: "The posting requires formal education but the resume lists none.".to_string(),
        }
    } else {
        EducationAssessment {
            meets_requirements: true,
            notes: format!(
                "{} education entries listed against the posting's requirements.",
                profile.education.len()
            ),
        }
    }
}
