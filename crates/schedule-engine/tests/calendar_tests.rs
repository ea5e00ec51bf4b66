//! Tests for template-week calendar projection.

use chrono::{NaiveDate, NaiveDateTime};
use schedule_engine::calendar::{
    class_id_from_event_id, group_classes_by_subject, template_day_offset,
};
use schedule_engine::{process_calendar_events, EventColor, ScheduledClass, TemplateWeek};

fn class(id: &str, subject: &str, number: &str, time: &str) -> ScheduledClass {
    ScheduledClass {
        id: id.to_string(),
        subject: subject.to_string(),
        number: number.to_string(),
        title: "Calculus and Analytic Geometry I".to_string(),
        credits: 4,
        instructor: "Dr. Smith".to_string(),
        time: time.to_string(),
        location: "Physical Sciences 120".to_string(),
        color: String::new(),
        class_type: None,
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

#[test]
fn mwf_class_yields_three_events_on_template_days() {
    let classes = vec![class("101", "MATH", "1914", "MWF 9:00am-9:50am")];

    let events = process_calendar_events(&classes, &TemplateWeek::default());

    assert_eq!(events.len(), 3);
    let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["101-M", "101-W", "101-F"]);

    // Template week starts Monday 2024-01-01.
    assert_eq!(events[0].start, at(2024, 1, 1, 9, 0));
    assert_eq!(events[0].end, at(2024, 1, 1, 9, 50));
    assert_eq!(events[1].start, at(2024, 1, 3, 9, 0));
    assert_eq!(events[2].start, at(2024, 1, 5, 9, 0));
    assert_eq!(events[2].end, at(2024, 1, 5, 9, 50));
}

#[test]
fn event_title_and_description_come_from_class() {
    let classes = vec![class("101", "MATH", "1914", "TR 1:30pm-2:45pm")];

    let events = process_calendar_events(&classes, &TemplateWeek::default());

    assert_eq!(events[0].title, "MATH 1914");
    assert_eq!(
        events[0].description,
        "Calculus and Analytic Geometry I\nDr. Smith\nPhysical Sciences 120"
    );
    assert_eq!(events[0].location, "Physical Sciences 120");
    assert_eq!(events[1].id, "101-R");
    assert_eq!(events[1].start, at(2024, 1, 4, 13, 30));
}

#[test]
fn unparseable_time_contributes_no_events() {
    let classes = vec![
        class("1", "ENGL", "1113", "TBA"),
        class("2", "HIST", "1483", ""),
        class("3", "CS", "2334", "M 3:00pm-4:15pm"),
    ];

    let events = process_calendar_events(&classes, &TemplateWeek::default());

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "3-M");
}

#[test]
fn events_follow_class_then_day_order() {
    let classes = vec![
        class("a", "CS", "2334", "WF 8:00am-8:50am"),
        class("b", "MATH", "1914", "MT 8:00am-8:50am"),
    ];

    let events = process_calendar_events(&classes, &TemplateWeek::default());

    let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["a-W", "a-F", "b-M", "b-T"]);
}

#[test]
fn custom_template_week() {
    let week = TemplateWeek::new(NaiveDate::from_ymd_opt(2026, 8, 17).unwrap()).unwrap();
    let classes = vec![class("1", "CS", "2334", "F 10:00am-10:50am")];

    let events = process_calendar_events(&classes, &week);

    assert_eq!(events[0].start, at(2026, 8, 21, 10, 0));
}

#[test]
fn template_week_must_start_on_monday() {
    let tuesday = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    assert!(TemplateWeek::new(tuesday).is_err());
}

#[test]
fn unknown_day_letter_maps_to_monday() {
    // The parser drops unknown letters, but the projector's own lookup puts
    // them on Monday. Both behaviours are kept as-is.
    assert_eq!(template_day_offset('S'), 0);
    assert_eq!(template_day_offset('x'), 0);
    assert_eq!(template_day_offset('R'), 3);

    let week = TemplateWeek::default();
    assert_eq!(week.date_for('S'), week.monday());
}

#[test]
fn class_color_maps_onto_calendar_palette() {
    let mut c = class("1", "CS", "2334", "M 9:00am-9:50am");
    c.color = "bg-green-500".to_string();
    let mut d = class("2", "CS", "2413", "T 9:00am-9:50am");
    d.color = "#8b5cf6".to_string();
    let e = class("3", "CS", "3113", "W 9:00am-9:50am");

    let events = process_calendar_events(&[c, d, e], &TemplateWeek::default());

    assert_eq!(events[0].color, EventColor::Emerald);
    assert_eq!(events[1].color, EventColor::Violet);
    assert_eq!(events[2].color, EventColor::Sky);
}

#[test]
fn event_id_maps_back_to_class_id() {
    assert_eq!(class_id_from_event_id("101-M"), "101");
    assert_eq!(class_id_from_event_id("CS-2334-001-R"), "CS-2334-001");
    assert_eq!(class_id_from_event_id("plain"), "plain");
}

#[test]
fn subjects_grouped_in_first_appearance_order() {
    let classes = vec![
        class("1", "MATH", "1914", "TBA"),
        class("2", "CS", "2334", "TBA"),
        class("3", "MATH", "2924", "TBA"),
    ];
    assert_eq!(group_classes_by_subject(&classes), vec!["MATH", "CS"]);
}

#[test]
fn events_serialize_with_local_datetimes() {
    let classes = vec![class("101", "MATH", "1914", "M 9:00am-9:50am")];
    let events = process_calendar_events(&classes, &TemplateWeek::default());

    let json = serde_json::to_value(&events[0]).unwrap();
    assert_eq!(json["start"], "2024-01-01T09:00:00");
    assert_eq!(json["color"], "sky");
}

#[test]
fn absurd_hour_still_projects_one_event_per_day() {
    let classes = vec![class("9", "CS", "2334", "M 99999999:00am-1:00am")];

    let events = process_calendar_events(&classes, &TemplateWeek::default());

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].end, at(2024, 1, 1, 1, 0));
    assert!(events[0].start > events[0].end);
}
