//! Strength/weak-area derivation from the placement assessment
//!
//! Three curriculum topics are probed by fixed question positions in the
//! assessment bank: variable declaration by question 0, async programming by
//! questions 3 and 6 together, DOM and array methods by questions 7 and 8
//! together. Each topic lands in exactly one of the two lists.

/// Labelled strengths and weak areas shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillProfile {
    pub strengths: Vec<String>,
    pub weak_areas: Vec<String>,
}

impl SkillProfile {
    /// Replace empty lists with the placeholder labels so the dashboard
    /// never renders an empty chip row.
    pub fn with_fallbacks(mut self) -> Self {
        if self.strengths.is_empty() {
            self.strengths = vec!["Fundamentals".to_string()];
        }
        if self.weak_areas.is_empty() {
            self.weak_areas = vec!["Advanced Topics".to_string()];
        }
        self
    }
}

/// Derive the raw skill profile from the ten assessment answers.
///
/// `answers[i]` is the selected option for question `i` (None when the
/// question was skipped, which counts as wrong); `key[i]` is the correct
/// option. Fallback labels are NOT applied here; callers that show the
/// profile chain [`SkillProfile::with_fallbacks`].
pub fn derive_skills(answers: &[Option<usize>], key: &[usize]) -> SkillProfile {
    debug_assert!(key.len() >= 9, "assessment key shorter than the probed positions");

    let correct = |i: usize| answers.get(i).copied().flatten() == key.get(i).copied();

    let mut profile = SkillProfile::default();
    let mut place = |label: &str, is_strength: bool| {
        if is_strength {
            profile.strengths.push(label.to_string());
        } else {
            profile.weak_areas.push(label.to_string());
        }
    };

    place("Variable Declaration", correct(0));
    place("Async Programming", correct(3) && correct(6));
    place("DOM & Array Methods", correct(7) && correct(8));

    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const KEY: [usize; 10] = [0, 0, 1, 1, 3, 1, 0, 0, 2, 1];

    fn answers_from(pairs: &[(usize, usize)]) -> Vec<Option<usize>> {
        let mut answers = vec![None; 10];
        for &(i, choice) in pairs {
            answers[i] = Some(choice);
        }
        answers
    }

    #[test]
    fn all_correct_yields_three_strengths() {
        let answers: Vec<Option<usize>> = KEY.iter().map(|&k| Some(k)).collect();
        let profile = derive_skills(&answers, &KEY);
        assert_eq!(
            profile.strengths,
            vec!["Variable Declaration", "Async Programming", "DOM & Array Methods"]
        );
        assert!(profile.weak_areas.is_empty());
    }

    #[test]
    fn all_wrong_yields_three_weak_areas() {
        let answers = vec![Some(3); 10];
        let profile = derive_skills(&answers, &KEY);
        assert!(profile.strengths.is_empty());
        assert_eq!(profile.weak_areas.len(), 3);
    }

    #[test]
    fn every_label_lands_in_exactly_one_list() {
        let answers = answers_from(&[(0, 0), (3, 1)]);
        let profile = derive_skills(&answers, &KEY);
        assert_eq!(profile.strengths.len() + profile.weak_areas.len(), 3);
        for label in &profile.strengths {
            assert!(!profile.weak_areas.contains(label));
        }
    }

    #[test]
    fn variable_declaration_needs_only_question_zero() {
        let answers = answers_from(&[(0, 0)]);
        let profile = derive_skills(&answers, &KEY);
        assert!(profile.strengths.contains(&"Variable Declaration".to_string()));
        assert!(profile.weak_areas.contains(&"Async Programming".to_string()));
    }

    #[test]
    fn async_needs_both_probe_questions() {
        // Question 3 right but question 6 wrong: still a weak area.
        let answers = answers_from(&[(3, 1), (6, 2)]);
        let profile = derive_skills(&answers, &KEY);
        assert!(profile.weak_areas.contains(&"Async Programming".to_string()));

        let answers = answers_from(&[(3, 1), (6, 0)]);
        let profile = derive_skills(&answers, &KEY);
        assert!(profile.strengths.contains(&"Async Programming".to_string()));
    }

    #[test]
    fn dom_needs_both_probe_questions() {
        let answers = answers_from(&[(7, 0), (8, 2)]);
        let profile = derive_skills(&answers, &KEY);
        assert!(profile.strengths.contains(&"DOM & Array Methods".to_string()));

        let answers = answers_from(&[(7, 0), (8, 0)]);
        let profile = derive_skills(&answers, &KEY);
        assert!(profile.weak_areas.contains(&"DOM & Array Methods".to_string()));
    }

    #[test]
    fn skipped_questions_count_as_wrong() {
        let profile = derive_skills(&vec![None; 10], &KEY);
        assert_eq!(profile.weak_areas.len(), 3);
    }

    #[test]
    fn fallbacks_fill_empty_lists_only() {
        let empty = SkillProfile::default().with_fallbacks();
        assert_eq!(empty.strengths, vec!["Fundamentals"]);
        assert_eq!(empty.weak_areas, vec!["Advanced Topics"]);

        let mixed = SkillProfile {
            strengths: vec!["Variable Declaration".to_string()],
            weak_areas: Vec::new(),
        }
        .with_fallbacks();
        assert_eq!(mixed.strengths, vec!["Variable Declaration"]);
        assert_eq!(mixed.weak_areas, vec!["Advanced Topics"]);
    }
}
