use serde::Serialize;

use super::domain::RubricCategory;

/// One anchor level of a rubric category (5 = Exceptional down to 1 = Inadequate).
#[derive(Debug, Clone, Serialize)]
pub struct RubricCriterion {
    pub level: u8,
    pub descriptor: &'static str,
    pub description: &'static str,
}

/// A category's scoring anchors, highest level first.
#[derive(Debug, Clone, Serialize)]
pub struct RubricCategoryGuide {
    pub category: RubricCategory,
    pub criteria: Vec<RubricCriterion>,
}

impl RubricCategoryGuide {
    pub fn descriptor_for(&self, level: u8) -> Option<&'static str> {
        self.criteria
            .iter()
            .find(|criterion| criterion.level == level)
            .map(|criterion| criterion.descriptor)
    }
}

/// The assessment rubric used across all clinical and operational roles.
#[derive(Debug)]
pub struct RubricGuide {
    categories: Vec<RubricCategoryGuide>,
}

impl RubricGuide {
    pub fn standard() -> Self {
        Self {
            categories: standard_category_guides(),
        }
    }

    pub fn categories(&self) -> &[RubricCategoryGuide] {
        &self.categories
    }

    pub fn for_category(&self, category: RubricCategory) -> Option<&RubricCategoryGuide> {
        self.categories
            .iter()
            .find(|guide| guide.category == category)
    }
}

fn standard_category_guides() -> Vec<RubricCategoryGuide> {
    vec![
        RubricCategoryGuide {
            category: RubricCategory::TechnicalExpertise,
            criteria: vec![
                RubricCriterion {
                    level: 5,
                    descriptor: "Exceptional",
                    description: "Demonstrates comprehensive oncology knowledge, stays current with latest research, shows deep understanding of treatment protocols and clinical trials",
                },
                RubricCriterion {
                    level: 4,
                    descriptor: "Proficient",
                    description: "Strong domain knowledge with good understanding of oncology principles, familiar with current practices and emerging treatments",
                },
                RubricCriterion {
                    level: 3,
                    descriptor: "Competent",
                    description: "Adequate technical knowledge for the role, understands basic oncology concepts and standard procedures",
                },
                RubricCriterion {
                    level: 2,
                    descriptor: "Developing",
                    description: "Limited technical knowledge, shows potential but requires significant training and development",
                },
                RubricCriterion {
                    level: 1,
                    descriptor: "Inadequate",
                    description: "Insufficient technical knowledge for the role, lacks basic understanding of oncology principles",
                },
            ],
        },
        RubricCategoryGuide {
            category: RubricCategory::CommunicationSkills,
            criteria: vec![
                RubricCriterion {
                    level: 5,
                    descriptor: "Exceptional",
                    description: "Excellent verbal/written communication, demonstrates high empathy with patients/families, exceptional teamwork and collaboration skills",
                },
                RubricCriterion {
                    level: 4,
                    descriptor: "Proficient",
                    description: "Clear and effective communication, shows good empathy and interpersonal skills, works well in team settings",
                },
                RubricCriterion {
                    level: 3,
                    descriptor: "Competent",
                    description: "Generally communicates well, adequate empathy and teamwork abilities, can work effectively with others",
                },
                RubricCriterion {
                    level: 2,
                    descriptor: "Developing",
                    description: "Communication needs improvement, limited demonstration of empathy, some difficulty working in teams",
                },
                RubricCriterion {
                    level: 1,
                    descriptor: "Inadequate",
                    description: "Poor communication skills, lacks empathy, struggles with teamwork and collaboration",
                },
            ],
        },
        RubricCategoryGuide {
            category: RubricCategory::CulturalFit,
            criteria: vec![
                RubricCriterion {
                    level: 5,
                    descriptor: "Exceptional",
                    description: "Perfectly aligns with Icon Oncology values, demonstrates patient-centered care philosophy, shows commitment to excellence and innovation",
                },
                RubricCriterion {
                    level: 4,
                    descriptor: "Proficient",
                    description: "Strong alignment with organizational values, understands patient-centered approach, committed to quality care",
                },
                RubricCriterion {
                    level: 3,
                    descriptor: "Competent",
                    description: "Generally aligns with company values, shows understanding of patient care importance, adequate commitment to quality",
                },
                RubricCriterion {
                    level: 2,
                    descriptor: "Developing",
                    description: "Some alignment with values but needs development, limited understanding of patient-centered care philosophy",
                },
                RubricCriterion {
                    level: 1,
                    descriptor: "Inadequate",
                    description: "Poor cultural fit, does not align with organizational values or patient care philosophy",
                },
            ],
        },
        RubricCategoryGuide {
            category: RubricCategory::ProblemSolving,
            criteria: vec![
                RubricCriterion {
                    level: 5,
                    descriptor: "Exceptional",
                    description: "Excellent analytical thinking, provides innovative solutions to complex cases, demonstrates superior clinical judgment and decision-making",
                },
                RubricCriterion {
                    level: 4,
                    descriptor: "Proficient",
                    description: "Good problem-solving abilities, can handle complex situations effectively, shows sound clinical judgment",
                },
                RubricCriterion {
                    level: 3,
                    descriptor: "Competent",
                    description: "Adequate problem-solving skills, can manage routine situations well, shows developing clinical judgment",
                },
                RubricCriterion {
                    level: 2,
                    descriptor: "Developing",
                    description: "Limited problem-solving abilities, struggles with complex situations, needs guidance for decision-making",
                },
                RubricCriterion {
                    level: 1,
                    descriptor: "Inadequate",
                    description: "Poor analytical skills, cannot handle complex problems, lacks clinical judgment",
                },
            ],
        },
        RubricCategoryGuide {
            category: RubricCategory::Professionalism,
            criteria: vec![
                RubricCriterion {
                    level: 5,
                    descriptor: "Exceptional",
                    description: "Impeccable professional appearance and demeanor, excellent punctuality and reliability, demonstrates highest ethical standards",
                },
                RubricCriterion {
                    level: 4,
                    descriptor: "Proficient",
                    description: "Professional appearance and behavior, reliable and punctual, shows good ethical awareness",
                },
                RubricCriterion {
                    level: 3,
                    descriptor: "Competent",
                    description: "Generally professional, adequate punctuality and reliability, understands ethical requirements",
                },
                RubricCriterion {
                    level: 2,
                    descriptor: "Developing",
                    description: "Some professional concerns, occasional punctuality issues, needs development in professional standards",
                },
                RubricCriterion {
                    level: 1,
                    descriptor: "Inadequate",
                    description: "Unprofessional appearance or behavior, poor punctuality, lacks understanding of professional standards",
                },
            ],
        },
    ]
}
