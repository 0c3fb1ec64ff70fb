//! Career path reference data
//!
//! Static career ladder shown on the Career tab: four stages gated by the
//! unlocked level, plus the supporting "why web development" material.

/// A rung of the career ladder.
#[derive(Debug, Clone, Copy)]
pub struct CareerStage {
    pub title: &'static str,
    /// Ladder level that unlocks this stage
    pub level_required: u8,
    pub skills: &'static [&'static str],
    pub salary: &'static str,
    pub companies: &'static [&'static str],
}

pub const CAREER_STAGES: [CareerStage; 4] = [
    CareerStage {
        title: "Junior Developer",
        level_required: 2,
        skills: &[
            "HTML, CSS, JavaScript",
            "Basic DOM manipulation",
            "Git & Version Control",
            "Responsive Design",
        ],
        salary: "$60K - $80K",
        companies: &["Startups", "Small Agencies", "Freelance Projects"],
    },
    CareerStage {
        title: "Mid-Level Developer",
        level_required: 3,
        skills: &[
            "Modern frameworks (React, Vue)",
            "Backend basics (Node.js)",
            "Databases",
            "API design",
            "Testing",
        ],
        salary: "$80K - $120K",
        companies: &["Mid-size Tech Companies", "Product Companies", "Agencies"],
    },
    CareerStage {
        title: "Senior Developer",
        level_required: 4,
        skills: &[
            "System design",
            "Architecture patterns",
            "Team leadership",
            "Mentoring",
            "DevOps basics",
            "Performance optimization",
        ],
        salary: "$120K - $180K",
        companies: &["FAANG companies", "High-growth startups", "Enterprise"],
    },
    CareerStage {
        title: "Tech Lead / Architect",
        level_required: 5,
        skills: &[
            "Full system design",
            "Tech strategy",
            "Team management",
            "Business acumen",
            "Advanced architecture",
            "Infrastructure",
        ],
        salary: "$150K - $250K+",
        companies: &["Leading tech companies", "Fortune 500", "Startup founders"],
    },
];

/// A "why become a web developer" card.
#[derive(Debug, Clone, Copy)]
pub struct Benefit {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const WEB_DEVELOPER_BENEFITS: [Benefit; 6] = [
    Benefit {
        icon: "📈",
        title: "High Demand",
        description: "Web developers are among the most sought-after professionals globally.",
    },
    Benefit {
        icon: "🌍",
        title: "Remote Opportunities",
        description: "Work from anywhere in the world with flexible schedules.",
    },
    Benefit {
        icon: "⚡",
        title: "Rapid Growth",
        description: "Skills are in constant demand with rapid career progression.",
    },
    Benefit {
        icon: "🏆",
        title: "Competitive Salary",
        description: "Web development offers competitive compensation packages.",
    },
    Benefit {
        icon: "👥",
        title: "Collaborative Work",
        description: "Work with creative teams on impactful projects.",
    },
    Benefit {
        icon: "💼",
        title: "Diverse Roles",
        description: "Choose frontend, backend, full-stack, or specialized areas.",
    },
];

/// A skill with the ladder level at which it counts as learned.
#[derive(Debug, Clone, Copy)]
pub struct RequiredSkill {
    pub name: &'static str,
    pub target_level: u8,
    pub description: &'static str,
}

pub const REQUIRED_SKILLS: [RequiredSkill; 8] = [
    RequiredSkill {
        name: "HTML & CSS",
        target_level: 1,
        description: "Fundamental for web development",
    },
    RequiredSkill {
        name: "JavaScript",
        target_level: 2,
        description: "Core programming language for web",
    },
    RequiredSkill {
        name: "React / Vue / Angular",
        target_level: 3,
        description: "Modern frontend frameworks",
    },
    RequiredSkill {
        name: "Node.js & Express",
        target_level: 3,
        description: "Backend development with JavaScript",
    },
    RequiredSkill {
        name: "Databases (SQL/NoSQL)",
        target_level: 3,
        description: "Data persistence and management",
    },
    RequiredSkill {
        name: "Git & GitHub",
        target_level: 2,
        description: "Version control and collaboration",
    },
    RequiredSkill {
        name: "APIs & REST",
        target_level: 4,
        description: "Backend communication patterns",
    },
    RequiredSkill {
        name: "DevOps & Deployment",
        target_level: 5,
        description: "Production deployment and monitoring",
    },
];

/// A milestone suggestion tied to a ladder level.
#[derive(Debug, Clone, Copy)]
pub struct Milestone {
    pub level: u8,
    pub milestone: &'static str,
    pub description: &'static str,
}

pub const NEXT_MILESTONES: [Milestone; 4] = [
    Milestone {
        level: 2,
        milestone: "Build 3 complete projects",
        description: "Portfolio building projects",
    },
    Milestone {
        level: 3,
        milestone: "Master one framework deeply",
        description: "Specialize in React or similar",
    },
    Milestone {
        level: 4,
        milestone: "Contribute to open source",
        description: "Real-world project experience",
    },
    Milestone {
        level: 5,
        milestone: "Lead a team or project",
        description: "Leadership and mentoring",
    },
];

/// Career stage label for the progress summary card.
pub fn career_stage_label(level: u8) -> &'static str {
    if level <= 2 {
        "Junior"
    } else if level <= 3 {
        "Mid-Level"
    } else if level <= 4 {
        "Senior"
    } else {
        "Tech Lead"
    }
}

/// Closing line of the progress summary.
pub fn outlook_message(level: u8) -> String {
    if level < 5 {
        format!(
            "You're {} levels away from reaching Tech Lead level with potential earnings of $150K-$250K+",
            5 - level
        )
    } else {
        "You've reached the highest level! Ready to lead and mentor others.".to_string()
    }
}

/// Fill percentage for a skill's progress gauge, capped at the target.
pub fn skill_progress_percent(current: u8, target: u8) -> u16 {
    debug_assert!(target >= 1);
    (u16::from(current.min(target)) * 100) / u16::from(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_label_bands() {
        assert_eq!(career_stage_label(1), "Junior");
        assert_eq!(career_stage_label(2), "Junior");
        assert_eq!(career_stage_label(3), "Mid-Level");
        assert_eq!(career_stage_label(4), "Senior");
        assert_eq!(career_stage_label(5), "Tech Lead");
    }

    #[test]
    fn stages_climb_the_ladder() {
        let levels: Vec<u8> = CAREER_STAGES.iter().map(|s| s.level_required).collect();
        assert_eq!(levels, vec![2, 3, 4, 5]);
    }

    #[test]
    fn skill_progress_caps_at_target() {
        assert_eq!(skill_progress_percent(1, 3), 33);
        assert_eq!(skill_progress_percent(3, 3), 100);
        assert_eq!(skill_progress_percent(5, 3), 100);
        assert_eq!(skill_progress_percent(1, 1), 100);
    }

    #[test]
    fn outlook_counts_remaining_levels() {
        assert!(outlook_message(2).contains("3 levels away"));
        assert!(outlook_message(5).contains("highest level"));
    }
}
