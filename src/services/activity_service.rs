use std::collections::HashMap;

use chrono::{Duration, NaiveDate, Utc};
use diesel::prelude::*;

use crate::{
    db::models::activity::{
        ActivityStats, DailyActivity, LearningActivity, NewLearningActivity, RecordActivityRequest,
    },
    db::repositories::{activity::ActivityRepo, profiles::ProfilesRepo, progress::ProgressRepo},
    error::AppError,
    services::{
        context::RequestContext, progress_service::ProgressService,
        roadmaps_service::RoadmapsService,
    },
};

/// Dashboard totals look at a trailing month of records.
const TOTAL_WINDOW_DAYS: i64 = 30;
const WEEKLY_WINDOW_DAYS: i64 = 7;
const DAILY_SERIES_DAYS: i64 = 7;

/// Used when the profile sets no weekly goal and no weekly hours.
const DEFAULT_WEEKLY_GOAL_HOURS: i32 = 10;

pub struct ActivityService;

impl ActivityService {
    pub fn record(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        req: &RecordActivityRequest,
    ) -> Result<LearningActivity, AppError> {
        let now = Utc::now();
        let today = now.date_naive();
        let date = req.date.unwrap_or(today);
        if date > today {
            return Err(AppError::validation("Activity date cannot be in the future"));
        }

        let row = ActivityRepo::upsert_increment(
            conn,
            &NewLearningActivity {
                user_id: ctx.user_id,
                date,
                minutes_spent: req.minutes_spent,
                skills_completed: req.skills_completed.unwrap_or(0),
            },
            now,
        )?;
        Ok(row)
    }

    pub fn stats(conn: &mut PgConnection, ctx: &RequestContext) -> Result<ActivityStats, AppError> {
        let today = Utc::now().date_naive();
        let profile = ProfilesRepo::find_or_create(conn, ctx.user_id, ctx.email.as_deref())?;
        let rows = ActivityRepo::list_desc(conn, ctx.user_id)?;

        let (completed_skills, total_skills) = match RoadmapsService::resolve_active(conn, ctx)? {
            Some(roadmap) => {
                let data = RoadmapsService::parse_document(&roadmap)?;
                let completed = ProgressRepo::count_completed(conn, ctx.user_id, roadmap.id)?;
                (completed as usize, data.skill_count())
            }
            None => (0, 0),
        };

        let weekly_minutes =
            Self::minutes_since(&rows, today - Duration::days(WEEKLY_WINDOW_DAYS - 1));
        let total_minutes =
            Self::minutes_since(&rows, today - Duration::days(TOTAL_WINDOW_DAYS - 1));
        let goal_hours = profile
            .weekly_goal_hours
            .or(profile.weekly_hours)
            .unwrap_or(DEFAULT_WEEKLY_GOAL_HOURS);

        Ok(ActivityStats {
            streak_days: Self::streak(&rows, today),
            weekly_minutes,
            total_minutes,
            weekly_goal_percent: Self::goal_percent(weekly_minutes, goal_hours),
            completed_skills,
            total_skills,
            completion_percent: ProgressService::percent(completed_skills, total_skills),
            daily: Self::daily_series(&rows, today),
        })
    }

    /// Consecutive days with recorded study time, newest first. The streak
    /// anchors on today, or on yesterday when today has no time yet, so it
    /// does not read as broken before the user studies. Days with a row but
    /// zero minutes do not keep a streak alive.
    pub fn streak(rows: &[LearningActivity], today: NaiveDate) -> u32 {
        let days: Vec<NaiveDate> = rows
            .iter()
            .filter(|r| r.minutes_spent > 0)
            .map(|r| r.date)
            .collect();

        let Some(first) = days.first() else {
            return 0;
        };
        let yesterday = today - Duration::days(1);
        if *first != today && *first != yesterday {
            return 0;
        }

        let mut streak = 0u32;
        let mut expected = *first;
        for day in days {
            if day == expected {
                streak += 1;
                expected = expected - Duration::days(1);
            } else if day < expected {
                break;
            }
        }
        streak
    }

    /// Minutes over `[cutoff, today]`. Rows keep one entry per date, so a
    /// plain sum is enough.
    pub fn minutes_since(rows: &[LearningActivity], cutoff: NaiveDate) -> i32 {
        rows.iter()
            .filter(|r| r.date >= cutoff)
            .map(|r| r.minutes_spent)
            .sum()
    }

    /// Share of the weekly goal already studied, capped at 100.
    pub fn goal_percent(weekly_minutes: i32, goal_hours: i32) -> i32 {
        let goal_minutes = goal_hours * 60;
        if goal_minutes <= 0 {
            return 0;
        }
        let percent = (f64::from(weekly_minutes) / f64::from(goal_minutes)) * 100.0;
        percent.round().min(100.0) as i32
    }

    /// The last seven calendar days, oldest first, with zero rows filled in
    /// for days without activity. Chart-ready as is.
    pub fn daily_series(rows: &[LearningActivity], today: NaiveDate) -> Vec<DailyActivity> {
        let by_date: HashMap<NaiveDate, &LearningActivity> =
            rows.iter().map(|r| (r.date, r)).collect();

        (0..DAILY_SERIES_DAYS)
            .rev()
            .map(|offset| {
                let date = today - Duration::days(offset);
                match by_date.get(&date) {
                    Some(row) => DailyActivity {
                        date,
                        minutes_spent: row.minutes_spent,
                        skills_completed: row.skills_completed,
                    },
                    None => DailyActivity {
                        date,
                        minutes_spent: 0,
                        skills_completed: 0,
                    },
                }
            })
            .collect()
    }
}
