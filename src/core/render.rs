use crate::domain::model::PredictionOutcome;

/// Projects a prediction outcome over the output schema, in schema order.
/// Values are formatted to two decimals for display; the stored outcome
/// keeps full precision. Courses missing from the response are skipped.
pub fn render_predictions(
    output_courses: &[String],
    outcome: &PredictionOutcome,
) -> Vec<(String, String)> {
    let mut rows = Vec::new();
    let mut missing = 0usize;

    for course in output_courses {
        match outcome.predictions.get(course) {
            Some(value) => rows.push((course.clone(), format!("{:.2}", value))),
            None => missing += 1,
        }
    }

    if missing > 0 {
        tracing::debug!("{} output courses missing from prediction response", missing);
    }

    rows
}
