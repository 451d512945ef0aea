use serde::{Deserialize, Serialize};

/// One skill the backend has tagged on a candidate, with the flag saying
/// whether their code history actually demonstrates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggedSkill {
    pub name: String,
    pub matched: bool,
}

/// Coverage of one of a job's skill lists by a candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatch {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub percentage: f64,
}

/// Compares a candidate's tagged skills against one of the job's flat skill
/// lists. Comparison is case-insensitive. An empty job list yields 0%, never
/// NaN or a vacuous 100%.
pub fn match_skills(candidate_skills: &[TaggedSkill], job_skills: &[String]) -> SkillMatch {
    if job_skills.is_empty() {
        return SkillMatch {
            matched: vec![],
            missing: vec![],
            percentage: 0.0,
        };
    }

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for skill in job_skills {
        let covered = candidate_skills
            .iter()
            .any(|c| c.matched && c.name.eq_ignore_ascii_case(skill));
        if covered {
            matched.push(skill.clone());
        } else {
            missing.push(skill.clone());
        }
    }

    let percentage = matched.len() as f64 / job_skills.len() as f64 * 100.0;
    SkillMatch {
        matched,
        missing,
        percentage,
    }
}
