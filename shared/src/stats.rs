//! Records exchanged with the backend API.
//!
//! Field names are camelCase on the wire to match the backend's JSON. Every
//! numeric field defaults so a partial response still deserializes; the
//! client treats all of this as display-only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response of `GET /api/gamification/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatsResponse {
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub total_xp: u32,
    #[serde(default)]
    pub weekly_xp: u32,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub level_progress: f64,
    #[serde(default)]
    pub xp_for_next_level: u32,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub longest_streak: u32,
    #[serde(default)]
    pub quizzes_completed: u32,
    #[serde(default)]
    pub flashcards_studied: u32,
    #[serde(default)]
    pub focus_sessions_completed: u32,
    #[serde(default)]
    pub total_study_time_minutes: u32,
    #[serde(default)]
    pub last_activity_date: Option<NaiveDate>,
}

fn default_level() -> u32 {
    1
}

impl Default for UserStatsResponse {
    fn default() -> Self {
        Self {
            user_id: None,
            total_xp: 0,
            weekly_xp: 0,
            level: 1,
            level_progress: 0.0,
            xp_for_next_level: 100,
            current_streak: 0,
            longest_streak: 0,
            quizzes_completed: 0,
            flashcards_studied: 0,
            focus_sessions_completed: 0,
            total_study_time_minutes: 0,
            last_activity_date: None,
        }
    }
}

/// Body of `POST /api/gamification/focus-session`. Fire-and-forget from the
/// client's perspective; the backend recomputes XP if the count is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusSessionRequest {
    pub duration_minutes: u32,
    pub xp_earned: u32,
}

/// Response to an XP-awarding event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XpEventResponse {
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub xp_earned: u32,
    #[serde(default)]
    pub new_total_xp: u32,
    #[serde(default = "default_level")]
    pub new_level: u32,
    #[serde(default)]
    pub leveled_up: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of `POST /api/auth/login`. On failure `message` carries one of
/// the backend's error codes rather than prose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Compact display form for XP totals: `12.3K`, `1.5M`.
pub fn format_compact(value: u32) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(0), "0");
        assert_eq!(format_compact(999), "999");
        assert_eq!(format_compact(1_000), "1.0K");
        assert_eq!(format_compact(12_345), "12.3K");
        assert_eq!(format_compact(999_999), "1000.0K");
        assert_eq!(format_compact(1_000_000), "1.0M");
        assert_eq!(format_compact(1_550_000), "1.6M");
    }

    #[test]
    fn test_stats_deserialize_partial_response() {
        // Backend is only guaranteed to send a level.
        let stats: UserStatsResponse = serde_json::from_str(r#"{"level": 7}"#).unwrap();
        assert_eq!(stats.level, 7);
        assert_eq!(stats.total_xp, 0);
        assert_eq!(stats.current_streak, 0);
        assert!(stats.last_activity_date.is_none());
    }

    #[test]
    fn test_stats_deserialize_full_response() {
        let stats: UserStatsResponse = serde_json::from_str(
            r#"{
                "userId": "6dd50c89-6f8e-4a6e-9b8e-1df6fbd06a2f",
                "totalXp": 4200,
                "weeklyXp": 310,
                "level": 6,
                "levelProgress": 41.5,
                "xpForNextLevel": 1469,
                "currentStreak": 4,
                "longestStreak": 11,
                "quizzesCompleted": 18,
                "flashcardsStudied": 240,
                "focusSessionsCompleted": 9,
                "totalStudyTimeMinutes": 385,
                "lastActivityDate": "2026-02-14"
            }"#,
        )
        .unwrap();
        assert_eq!(stats.total_xp, 4200);
        assert_eq!(stats.focus_sessions_completed, 9);
        assert_eq!(
            stats.last_activity_date,
            NaiveDate::from_ymd_opt(2026, 2, 14)
        );
    }

    #[test]
    fn test_focus_session_request_wire_names() {
        let body = FocusSessionRequest {
            duration_minutes: 25,
            xp_earned: 60,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["durationMinutes"], 25);
        assert_eq!(json["xpEarned"], 60);
    }

    #[test]
    fn test_login_failure_carries_code() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"success": false, "message": "INVALID_CREDENTIALS"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message.as_deref(), Some("INVALID_CREDENTIALS"));
        assert!(resp.token.is_none());
    }
}
