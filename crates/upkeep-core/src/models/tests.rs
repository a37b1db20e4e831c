#[cfg(test)]
mod model_tests {
    use jiff::{civil::date, tz::TimeZone};
    use serde_json::json;

    use crate::models::{
        calendar::{self, WEEKDAYS},
        find_run_for_date, Answer, AssociationBulkCreate, ChecklistBundle, ChecklistMeta,
        ChecklistRun, CronRule, CronSettingsPayload, RunStatus, RunSubmission,
        RunSubmissionResponse, ScheduleChips, ScheduleField, ScheduleRule, Scope, ServerWindow,
    };

    fn chips(months: &[&str], days: &[&str], weeks: &[&str], hours: &[&str]) -> ScheduleChips {
        let owned = |values: &[&str]| values.iter().map(|v| (*v).to_string()).collect();
        ScheduleChips {
            months: owned(months),
            days: owned(days),
            weeks: owned(weeks),
            hours: owned(hours),
            ..Default::default()
        }
    }

    fn create_test_cron_rule() -> CronRule {
        CronRule {
            scope: Scope::Week,
            days_of_week: vec![1, 5],
            hours: vec![9],
            minutes: Vec::new(),
            timezone: "Asia/Kolkata".to_string(),
            label: None,
            enabled: true,
        }
    }

    fn cron_rule_json() -> serde_json::Value {
        json!({
            "scope": "WEEK",
            "days_of_week": [1, 5],
            "hours": [9],
            "minutes": [],
            "timezone": "Asia/Kolkata",
            "enabled": true,
        })
    }

    fn create_test_run(id: i64, scheduled_for: &str) -> ChecklistRun {
        ChecklistRun {
            run_id: json!(id),
            scheduled_for: scheduled_for.parse().unwrap(),
            status: RunStatus::new("pending"),
        }
    }

    #[test]
    fn test_toggle_twice_restores_unset() {
        for field in ScheduleField::ALL {
            let value = *field.range().start();
            let rule = ScheduleRule::default();
            let toggled = rule.toggle(field, value);
            assert_eq!(toggled.selection(field).map(|s| s.len()), Some(1));
            assert_eq!(toggled.toggle(field, value), rule, "field {field}");
        }
    }

    #[test]
    fn test_toggle_keeps_ascending_order_and_receiver() {
        let original = ScheduleRule::default().toggle(ScheduleField::Hours, 14);
        let next = original.toggle(ScheduleField::Hours, 9);

        let hours: Vec<u8> = next.hours.clone().unwrap().into_iter().collect();
        assert_eq!(hours, vec![9, 14]);
        assert_eq!(original.hours.unwrap().len(), 1);
    }

    #[test]
    fn test_toggle_out_of_range_is_ignored() {
        let rule = ScheduleRule::default().toggle(ScheduleField::Hours, 5);
        assert_eq!(rule.toggle(ScheduleField::Hours, 24), rule);
        assert_eq!(rule.toggle(ScheduleField::Months, 0), rule);
        assert!(rule.try_toggle(ScheduleField::Weekdays, 7).is_err());
        assert!(rule.try_toggle(ScheduleField::Minutes, -1).is_err());
    }

    #[test]
    fn test_with_scope_preserves_selections() {
        let rule = ScheduleRule::new(Scope::Week)
            .toggle(ScheduleField::Weekdays, 2)
            .toggle(ScheduleField::Minutes, 45);

        let hourly = rule.with_scope(Scope::Hour);
        assert_eq!(hourly.scope, Scope::Hour);
        assert_eq!(hourly.weekdays, rule.weekdays);
        assert_eq!(hourly.with_scope(Scope::Week), rule);
    }

    #[test]
    fn test_with_selection_normalizes() {
        let rule =
            ScheduleRule::default().with_selection(ScheduleField::DaysOfMonth, [31, 0, 1, 1, 40]);
        let days: Vec<u8> = rule.days_of_month.unwrap().into_iter().collect();
        assert_eq!(days, vec![1, 31]);

        let cleared = ScheduleRule::default().with_selection(ScheduleField::Hours, [99]);
        assert!(cleared.is_unrestricted());
    }

    #[test]
    fn test_deserialize_normalizes_lists() {
        let rule: ScheduleRule = serde_json::from_value(json!({
            "scope": "week",
            "weekdays": [6, 0, 0, 9],
            "hours": [],
            "minutes": null,
        }))
        .unwrap();

        assert_eq!(rule.scope, Scope::Week);
        let weekdays: Vec<u8> = rule.weekdays.clone().unwrap().into_iter().collect();
        assert_eq!(weekdays, vec![0, 6]);
        assert_eq!(rule.hours, None);
        assert_eq!(rule.minutes, None);
        assert_eq!(rule.months, None);
    }

    #[test]
    fn test_scope_wire_names() {
        assert_eq!(serde_json::to_value(Scope::Year).unwrap(), json!("YEAR"));
        let parsed: Scope = serde_json::from_value(json!("hour")).unwrap();
        assert_eq!(parsed, Scope::Hour);
        assert!(serde_json::from_value::<Scope>(json!("fortnight")).is_err());
        assert_eq!(Scope::default(), Scope::Day);
    }

    #[test]
    fn test_field_ranges() {
        assert_eq!(ScheduleField::Months.options().len(), 12);
        assert_eq!(ScheduleField::DaysOfMonth.options().first(), Some(&1));
        assert_eq!(ScheduleField::Weekdays.options(), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(ScheduleField::Seconds.options().len(), 60);
        assert!(ScheduleField::Hours.contains(23));
        assert!(!ScheduleField::Hours.contains(-1));
        let field: ScheduleField = serde_json::from_value(json!("days_of_month")).unwrap();
        assert_eq!(field, ScheduleField::DaysOfMonth);
    }

    #[test]
    fn test_chips_round_trip() {
        let input = chips(&["MAR", "JAN"], &["15", "1"], &["SUN", "MON"], &["9"]);
        let rule = ScheduleRule::from_chips(Scope::Year, &input);

        let output = rule.to_chips();
        assert_eq!(output.months, vec!["JAN", "MAR"]);
        assert_eq!(output.days, vec!["1", "15"]);
        assert_eq!(output.weeks, vec!["MON", "SUN"]);
        assert_eq!(output.hours, vec!["9"]);
        assert!(output.minutes.is_empty());

        assert_eq!(ScheduleRule::from_chips(Scope::Year, &output), rule);
    }

    #[test]
    fn test_chips_drop_unknown_labels_and_values() {
        let input = chips(&["jan", "SMARCH"], &["32", "abc", "7"], &["Fun"], &["24"]);
        let rule = ScheduleRule::from_chips(Scope::Month, &input);

        assert_eq!(rule.months.unwrap().into_iter().collect::<Vec<_>>(), vec![1]);
        assert_eq!(rule.days_of_month.unwrap().into_iter().collect::<Vec<_>>(), vec![7]);
        assert_eq!(rule.weekdays, None);
        assert_eq!(rule.hours, None);
        assert!(ScheduleRule::from_chips(Scope::Day, &ScheduleChips::default()).is_unrestricted());
    }

    #[test]
    fn test_weekday_table_is_a_bijection() {
        for entry in WEEKDAYS {
            assert_eq!(calendar::to_sunday_zero(entry.monday_zero), Some(entry.sunday_zero));
            assert_eq!(calendar::to_monday_zero(entry.sunday_zero), Some(entry.monday_zero));
            assert_eq!(calendar::weekday_from_label(entry.label), Some(entry.monday_zero));
        }
        assert_eq!(calendar::to_sunday_zero(6), Some(0));
        assert_eq!(calendar::to_sunday_zero(7), None);
        assert_eq!(calendar::weekday_label(0), Some("MON"));
    }

    #[test]
    fn test_month_labels() {
        assert_eq!(calendar::month_label(1), Some("JAN"));
        assert_eq!(calendar::month_label(12), Some("DEC"));
        assert_eq!(calendar::month_label(0), None);
        assert_eq!(calendar::month_label(13), None);
        assert_eq!(calendar::month_from_label("dec"), Some(12));
    }

    #[test]
    fn test_find_run_for_date_uses_zone() {
        let runs = vec![
            create_test_run(1, "2024-03-01T03:00:00Z"),
            create_test_run(2, "2024-03-01T20:00:00Z"),
        ];
        let kolkata = TimeZone::get("Asia/Kolkata").unwrap();

        let run = find_run_for_date(&runs, date(2024, 3, 2), &kolkata).unwrap();
        assert_eq!(run.run_id, json!(2));

        let run = find_run_for_date(&runs, date(2024, 3, 1), &TimeZone::UTC).unwrap();
        assert_eq!(run.run_id, json!(1));

        assert!(find_run_for_date(&runs, date(2024, 3, 3), &TimeZone::UTC).is_none());
    }

    #[test]
    fn test_server_window_bounds() {
        let window = ServerWindow {
            start: date(2024, 3, 1),
            end_exclusive: date(2024, 4, 1),
        };
        assert!(window.contains(date(2024, 3, 1)));
        assert!(window.contains(date(2024, 3, 31)));
        assert!(!window.contains(date(2024, 4, 1)));
        assert!(!window.contains(date(2024, 2, 29)));
    }

    #[test]
    fn test_run_deserializes_from_listing() {
        let run: ChecklistRun = serde_json::from_value(json!({
            "run_id": "r-17",
            "scheduled_for": "2024-03-01T14:30:00+05:30",
            "status": "Completed",
        }))
        .unwrap();

        assert_eq!(run.scheduled_for.to_string(), "2024-03-01T09:00:00Z");
        assert!(run.status.is_completed());
        assert!(!run.status.is_pending());
    }

    #[test]
    fn test_answer_and_submission_shapes() {
        let submission = RunSubmission::draft(vec![
            Answer::new(4, Some(json!("ok"))),
            Answer::new(5, None),
            Answer::not_applicable(6),
        ]);

        assert_eq!(
            serde_json::to_value(&submission).unwrap(),
            json!({
                "answers": [
                    { "question": 4, "value": "ok", "is_na": false },
                    { "question": 5, "value": {}, "is_na": false },
                    { "question": 6, "value": {}, "is_na": true },
                ],
                "finalize": false,
            })
        );
        assert!(RunSubmission::finalized(Vec::new()).finalize);
    }

    #[test]
    fn test_submission_response_keeps_extra_fields() {
        let response: RunSubmissionResponse =
            serde_json::from_value(json!({ "finalized": true, "run_id": 9 })).unwrap();
        assert!(response.finalized);
        assert_eq!(response.extra.get("run_id"), Some(&json!(9)));
    }

    #[test]
    fn test_cron_settings_payload_shape() {
        let payload = CronSettingsPayload {
            allowed_time_to_submit: "24:00:00".to_string(),
            extension_time: "00:30:00".to_string(),
            lock_overdue_task: true,
            supervisors: vec![2],
            supplier_id: Some(11),
            locked_group_ids: Vec::new(),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "allowed_time_to_submit": "24:00:00",
                "extension_time": "00:30:00",
                "lock_overdue_task": true,
                "supervisors": [2],
                "supplier_id": 11,
                "locked_group_ids": [],
            })
        );
    }

    #[test]
    fn test_checklist_meta_shape() {
        let meta = ChecklistMeta {
            name: "Fire extinguisher check".to_string(),
            description: String::new(),
            start_date: Some(date(2024, 3, 1)),
            end_date: None,
            priority: 2,
        };
        assert_eq!(
            serde_json::to_value(&meta).unwrap(),
            json!({
                "name": "Fire extinguisher check",
                "description": "",
                "start_date": "2024-03-01",
                "end_date": null,
                "priority": 2,
            })
        );

        let parsed: ChecklistMeta = serde_json::from_value(json!({
            "name": "Daily walk",
            "start_date": null,
            "end_date": "2024-12-31",
            "priority": 1,
        }))
        .unwrap();
        assert_eq!(parsed.description, "");
        assert_eq!(parsed.end_date, Some(date(2024, 12, 31)));
    }

    #[test]
    fn test_checklist_bundle_shape() {
        let bundle = ChecklistBundle {
            checklist: ChecklistMeta {
                name: "Generator".to_string(),
                description: "Weekly run-up".to_string(),
                start_date: Some(date(2024, 3, 1)),
                end_date: None,
                priority: 1,
            },
            groups: vec![json!({ "name": "Fuel", "order": 1 })],
            questions: vec![json!({ "text": "Level ok?", "group": 0 })],
            cron_rule: create_test_cron_rule(),
            cron_settings: CronSettingsPayload {
                allowed_time_to_submit: "24:00:00".to_string(),
                extension_time: "00:00:00".to_string(),
                ..Default::default()
            },
        };

        assert_eq!(
            serde_json::to_value(&bundle).unwrap(),
            json!({
                "checklist": {
                    "name": "Generator",
                    "description": "Weekly run-up",
                    "start_date": "2024-03-01",
                    "end_date": null,
                    "priority": 1,
                },
                "groups": [{ "name": "Fuel", "order": 1 }],
                "questions": [{ "text": "Level ok?", "group": 0 }],
                "cron_rule": cron_rule_json(),
                "cron_settings": {
                    "allowed_time_to_submit": "24:00:00",
                    "extension_time": "00:00:00",
                    "lock_overdue_task": false,
                    "supervisors": [],
                    "supplier_id": null,
                    "locked_group_ids": [],
                },
            })
        );
    }

    #[test]
    fn test_association_bulk_create_shape() {
        let body = AssociationBulkCreate {
            checklist: 12,
            asset_ids: vec![3, 4],
            user_ids: vec![8],
            asset_map: [("3".to_string(), "Pump A".to_string())].into_iter().collect(),
            user_map: Default::default(),
            start_date: Some(date(2024, 3, 1)),
            end_date: None,
            cron_rule: create_test_cron_rule(),
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "checklist": 12,
                "asset_ids": [3, 4],
                "user_ids": [8],
                "asset_map": { "3": "Pump A" },
                "user_map": {},
                "start_date": "2024-03-01",
                "end_date": null,
                "cron_rule": cron_rule_json(),
            })
        );

        let parsed: AssociationBulkCreate = serde_json::from_value(json!({
            "checklist": 12,
            "start_date": "2024-03-01",
            "end_date": null,
            "cron_rule": cron_rule_json(),
        }))
        .unwrap();
        assert!(parsed.asset_ids.is_empty());
        assert!(parsed.user_map.is_empty());
        assert_eq!(parsed.cron_rule, create_test_cron_rule());
    }
}
