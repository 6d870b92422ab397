// src/types/mod.rs
pub mod profile;
pub mod report;

pub use profile::{
    EducationEntry, ExperienceEntry, ExtractedJobPosting, ExtractedProfile, PersonalInfo,
    Proficiency, RequirementLevel, SkillRecord,
};
pub use report::{
    AnalysisReport, EducationAssessment, ExperienceAssessment, HiringProbability,
    KeywordAnalysis, KeywordMatch, MatchResult, Suggestion, SuggestionType,
};
