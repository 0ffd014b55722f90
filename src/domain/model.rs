use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Grade every course starts at before the user edits anything.
pub const DEFAULT_GRADE: f64 = 50.0;

/// Range hint shown next to grade inputs. Not enforced anywhere.
pub const GRADE_RANGE: (f64, f64) = (0.0, 100.0);

#[derive(Debug, Clone, Deserialize)]
pub struct CourseList {
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelInfo {
    pub model_name: String,
    #[serde(default)]
    pub input_courses: Vec<String>,
    #[serde(default)]
    pub output_courses: Vec<String>,
    #[serde(default)]
    pub metrics: HashMap<String, f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GradeSubmission {
    pub grades: HashMap<String, f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionOutcome {
    pub predictions: HashMap<String, f64>,
    #[serde(default)]
    pub model_used: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub model_loaded: bool,
    #[serde(default)]
    pub model_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestLifecycle {
    Idle,
    Loading,
    Success,
    Failed(String),
}

/// Best-effort numeric coercion for raw grade input. Anything that does not
/// parse as a finite number becomes 0.0; out-of-range values pass through
/// untouched. Callers must not tighten this into validation.
pub fn coerce_grade(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Grade mapping whose key set is fixed to the input schema at construction.
/// Iteration follows schema order. Writes to unknown courses are refused, so
/// the key set never grows or shrinks after initialization.
#[derive(Debug, Clone)]
pub struct GradeSheet {
    order: Vec<String>,
    grades: HashMap<String, f64>,
}

impl GradeSheet {
    pub fn with_defaults(courses: &[String]) -> Self {
        let grades = courses
            .iter()
            .map(|course| (course.clone(), DEFAULT_GRADE))
            .collect();
        Self {
            order: courses.to_vec(),
            grades,
        }
    }

    /// Returns false when `course` is not part of the schema; the sheet is
    /// left untouched in that case.
    pub fn set(&mut self, course: &str, value: f64) -> bool {
        match self.grades.get_mut(course) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn fill(&mut self, value: f64) {
        for slot in self.grades.values_mut() {
            *slot = value;
        }
    }

    pub fn get(&self, course: &str) -> Option<f64> {
        self.grades.get(course).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn course_ids(&self) -> &[String] {
        &self.order
    }

    /// Entries in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.order
            .iter()
            .filter_map(|course| self.grades.get(course).map(|v| (course.as_str(), *v)))
    }

    /// Snapshot of the current state as a request payload.
    pub fn to_submission(&self) -> GradeSubmission {
        GradeSubmission {
            grades: self.grades.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(courses: &[&str]) -> Vec<String> {
        courses.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn sheet_starts_with_default_for_every_course() {
        let sheet = GradeSheet::with_defaults(&schema(&["Math", "Physics"]));
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.get("Math"), Some(DEFAULT_GRADE));
        assert_eq!(sheet.get("Physics"), Some(DEFAULT_GRADE));
    }

    #[test]
    fn set_refuses_unknown_courses_and_key_set_is_stable() {
        let mut sheet = GradeSheet::with_defaults(&schema(&["Math", "Physics"]));
        assert!(sheet.set("Math", 75.0));
        assert!(!sheet.set("Chemistry", 99.0));
        assert_eq!(sheet.get("Chemistry"), None);
        assert_eq!(sheet.course_ids(), &schema(&["Math", "Physics"])[..]);

        sheet.fill(90.0);
        assert_eq!(sheet.course_ids(), &schema(&["Math", "Physics"])[..]);
        assert_eq!(sheet.len(), 2);
    }

    #[test]
    fn fill_overwrites_every_entry() {
        let mut sheet = GradeSheet::with_defaults(&schema(&["A", "B", "C"]));
        sheet.set("A", 12.0);
        sheet.fill(90.0);
        for (_, value) in sheet.iter() {
            assert_eq!(value, 90.0);
        }
    }

    #[test]
    fn iteration_follows_schema_order() {
        let sheet = GradeSheet::with_defaults(&schema(&["Z", "A", "M"]));
        let order: Vec<&str> = sheet.iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec!["Z", "A", "M"]);
    }

    #[test]
    fn coerce_grade_parses_numbers_and_falls_back_to_zero() {
        assert_eq!(coerce_grade("75"), 75.0);
        assert_eq!(coerce_grade(" 88.4 "), 88.4);
        assert_eq!(coerce_grade("-5"), -5.0);
        assert_eq!(coerce_grade("150"), 150.0);
        assert_eq!(coerce_grade("abc"), 0.0);
        assert_eq!(coerce_grade(""), 0.0);
        assert_eq!(coerce_grade("NaN"), 0.0);
        assert_eq!(coerce_grade("inf"), 0.0);
    }
}
