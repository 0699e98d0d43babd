use chrono::{Duration, NaiveDate, Utc};
use roadmap_backend::db::models::activity::LearningActivity;
use roadmap_backend::services::ActivityService;
use uuid::Uuid;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
}

fn days_ago(offset: i64) -> NaiveDate {
    today() - Duration::days(offset)
}

fn rec(date: NaiveDate, minutes: i32) -> LearningActivity {
    let now = Utc::now();
    LearningActivity {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        date,
        minutes_spent: minutes,
        skills_completed: 0,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn streak_counts_consecutive_days_back_from_today() {
    // rows arrive newest first, the order the repository returns them in
    let rows = vec![rec(today(), 30), rec(days_ago(1), 20), rec(days_ago(2), 10)];
    assert_eq!(ActivityService::streak(&rows, today()), 3);
}

#[test]
fn missing_today_gets_the_yesterday_grace() {
    let rows = vec![rec(days_ago(1), 20), rec(days_ago(2), 10)];
    assert_eq!(ActivityService::streak(&rows, today()), 2);
}

#[test]
fn last_activity_two_days_ago_means_no_streak() {
    let rows = vec![rec(days_ago(2), 20), rec(days_ago(3), 10)];
    assert_eq!(ActivityService::streak(&rows, today()), 0);
}

#[test]
fn gap_inside_the_run_stops_the_count() {
    let rows = vec![rec(today(), 30), rec(days_ago(1), 20), rec(days_ago(3), 10)];
    assert_eq!(ActivityService::streak(&rows, today()), 2);
}

#[test]
fn zero_minute_rows_do_not_keep_a_streak_alive() {
    // a completions-only row today: the streak anchors on yesterday instead
    let rows = vec![rec(today(), 0), rec(days_ago(1), 20)];
    assert_eq!(ActivityService::streak(&rows, today()), 1);

    // a zero-minute day inside the run breaks it
    let rows = vec![rec(today(), 30), rec(days_ago(1), 0), rec(days_ago(2), 20)];
    assert_eq!(ActivityService::streak(&rows, today()), 1);
}

#[test]
fn no_rows_means_no_streak() {
    assert_eq!(ActivityService::streak(&[], today()), 0);
}

#[test]
fn weekly_window_is_seven_days_inclusive() {
    let rows = vec![rec(today(), 10), rec(days_ago(6), 20), rec(days_ago(7), 40)];
    assert_eq!(ActivityService::minutes_since(&rows, days_ago(6)), 30);
    assert_eq!(ActivityService::minutes_since(&rows, days_ago(7)), 70);
}

#[test]
fn goal_percent_caps_at_one_hundred() {
    assert_eq!(ActivityService::goal_percent(300, 10), 50);
    assert_eq!(ActivityService::goal_percent(100, 10), 17);
    assert_eq!(ActivityService::goal_percent(900, 10), 100);
    assert_eq!(ActivityService::goal_percent(0, 10), 0);
    assert_eq!(ActivityService::goal_percent(100, 0), 0);
}

#[test]
fn daily_series_is_zero_filled_oldest_first() {
    let rows = vec![rec(today(), 45), rec(days_ago(3), 15)];
    let series = ActivityService::daily_series(&rows, today());

    assert_eq!(series.len(), 7);
    assert_eq!(series[0].date, days_ago(6));
    assert_eq!(series[6].date, today());
    assert_eq!(series[6].minutes_spent, 45);
    assert_eq!(series[3].minutes_spent, 15);
    assert_eq!(series.iter().filter(|d| d.minutes_spent == 0).count(), 5);
}
