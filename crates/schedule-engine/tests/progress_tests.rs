//! Tests for GPA and degree progress.

use schedule_engine::progress::{
    calculate_gpa, format_gpa, grade_points, simulate_gpa, total_credits, DegreeProgress,
    GradedCourse,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn gpa_is_credit_weighted() {
    let courses = vec![GradedCourse::new(4, "A"), GradedCourse::new(3, "B"), GradedCourse::new(1, "C")];

    // (16 + 9 + 2) / 8
    assert!(approx(calculate_gpa(&courses), 27.0 / 8.0));
    assert_eq!(format_gpa(calculate_gpa(&courses)), "3.38");
    assert_eq!(total_credits(&courses), 8);
}

#[test]
fn no_courses_or_credits_is_zero_gpa() {
    assert_eq!(calculate_gpa(&[]), 0.0);
    assert_eq!(calculate_gpa(&[GradedCourse::new(0, "A")]), 0.0);
    assert_eq!(format_gpa(0.0), "0.00");
}

#[test]
fn unknown_grades_earn_no_points() {
    assert_eq!(grade_points("A"), 4.0);
    assert_eq!(grade_points("F"), 0.0);
    assert_eq!(grade_points("P"), 0.0);
    assert_eq!(grade_points("a"), 0.0);
}

#[test]
fn simulated_gpa_blends_current_record_with_planned_courses() {
    let planned = vec![GradedCourse::new(3, "A"), GradedCourse::new(3, "A")];

    // 3.0 over 30 credits = 90 points; +24 points over 6 credits.
    let gpa = simulate_gpa(3.0, 30, &planned);
    assert!(approx(gpa, 114.0 / 36.0));
}

#[test]
fn simulated_gpa_with_nothing_is_zero() {
    assert_eq!(simulate_gpa(0.0, 0, &[]), 0.0);
}

#[test]
fn degree_progress_remaining_and_percent() {
    let progress = DegreeProgress::new(45, 120);
    assert_eq!(progress.remaining(), 75);
    assert_eq!(progress.percent_complete(), 38);
}

#[test]
fn degree_progress_saturates_past_requirement() {
    let progress = DegreeProgress::new(130, 120);
    assert_eq!(progress.remaining(), 0);
    assert_eq!(progress.percent_complete(), 108);
}

#[test]
fn default_requirement_is_120_credits() {
    assert_eq!(DegreeProgress::default().required, 120);
    assert_eq!(DegreeProgress::new(0, 0).percent_complete(), 100);
}

#[test]
fn graded_courses_load_from_json() {
    let courses: Vec<GradedCourse> =
        serde_json::from_str(r#"[{"code":"MATH 1914","credits":4,"grade":"B"},{"credits":3,"grade":"A"}]"#)
            .unwrap();
    assert_eq!(courses[0].code.as_deref(), Some("MATH 1914"));
    assert!(approx(calculate_gpa(&courses), 24.0 / 7.0));
}
