//! Dashboard aggregates and attendee search.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Attendee, Status};
use crate::transform::StatsResponse;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStats {
    pub total: usize,
    pub checked_in: usize,
    pub pending: usize,
    pub no_show: usize,
    /// Distinct sport labels across all attendees.
    pub sports_count: usize,
    /// Attendees per sport. An attendee with several sports counts once in each.
    pub sport_breakdown: BTreeMap<String, usize>,
}

impl EventStats {
    pub fn from_attendees(attendees: &[Attendee]) -> Self {
        let mut stats = EventStats {
            total: attendees.len(),
            ..Default::default()
        };

        for attendee in attendees {
            match attendee.status {
                Status::Registered => stats.checked_in += 1,
                Status::Pending => stats.pending += 1,
                Status::NoShow => stats.no_show += 1,
            }

            let distinct: BTreeSet<&str> = attendee
                .sports
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect();
            for sport in distinct {
                *stats.sport_breakdown.entry(sport.to_string()).or_insert(0) += 1;
            }
        }

        stats.sports_count = stats.sport_breakdown.len();
        stats
    }

    /// Checked-in share of the total as a whole percentage.
    pub fn check_in_rate(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.checked_in as f64 * 100.0 / self.total as f64).round() as u32
    }
}

impl From<StatsResponse> for EventStats {
    fn from(response: StatsResponse) -> Self {
        EventStats {
            total: response.total,
            checked_in: response.checked_in,
            pending: response.pending,
            no_show: response.no_show,
            sports_count: response.sports_count,
            sport_breakdown: response.sport_breakdown,
        }
    }
}

/// Checked-in attendees, newest check-in first, at most `limit`.
pub fn recent_check_ins(attendees: &[Attendee], limit: usize) -> Vec<&Attendee> {
    let mut checked: Vec<&Attendee> = attendees
        .iter()
        .filter(|a| a.is_checked_in() && a.check_in_time.is_some())
        .collect();
    checked.sort_by(|a, b| b.check_in_time.cmp(&a.check_in_time));
    checked.truncate(limit);
    checked
}

/// Dashboard search box. Names, email and id match case-insensitively, the phone
/// matches as a plain substring. A blank term keeps everyone.
pub fn filter_attendees<'a>(attendees: &'a [Attendee], term: &str) -> Vec<&'a Attendee> {
    let term = term.trim();
    if term.is_empty() {
        return attendees.iter().collect();
    }
    let needle = term.to_lowercase();

    attendees
        .iter()
        .filter(|a| {
            a.first_name.to_lowercase().contains(&needle)
                || a.last_name.to_lowercase().contains(&needle)
                || a.email.to_lowercase().contains(&needle)
                || a.phone.contains(term)
                || a.id.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn attendee(id: &str, first: &str, status: Status, minute: Option<u32>) -> Attendee {
        Attendee {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: "Andrade".to_string(),
            phone: "0991234567".to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            sports: vec!["Yoga".to_string(), "Running".to_string()],
            status,
            check_in_time: minute.map(|m| Utc.with_ymd_and_hms(2026, 3, 8, 14, m, 0).unwrap()),
            registration_date: Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap(),
            cedula: None,
            age: None,
            sector: None,
            birth_date: None,
            profession: None,
        }
    }

    fn sample() -> Vec<Attendee> {
        let mut crossfit = attendee("WPF-003", "Lucía", Status::NoShow, None);
        crossfit.sports = vec!["CrossFit".to_string(), "CrossFit".to_string()];
        vec![
            attendee("WPF-001", "Ana", Status::Registered, Some(5)),
            attendee("WPF-002", "Carla", Status::Pending, None),
            crossfit,
            attendee("WPF-004", "Diana", Status::Registered, Some(40)),
        ]
    }

    #[test]
    fn test_counts_by_status() {
        let stats = EventStats::from_attendees(&sample());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.checked_in, 2);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.no_show, 1);
        assert_eq!(stats.check_in_rate(), 50);
    }

    #[test]
    fn test_sport_breakdown_counts_each_attendee_once() {
        let stats = EventStats::from_attendees(&sample());
        assert_eq!(stats.sports_count, 3);
        assert_eq!(stats.sport_breakdown["Yoga"], 3);
        assert_eq!(stats.sport_breakdown["CrossFit"], 1);
    }

    #[test]
    fn test_empty_collection() {
        let stats = EventStats::from_attendees(&[]);
        assert_eq!(stats, EventStats::default());
        assert_eq!(stats.check_in_rate(), 0);
    }

    #[test]
    fn test_rate_rounds() {
        let stats = EventStats {
            total: 3,
            checked_in: 2,
            ..Default::default()
        };
        assert_eq!(stats.check_in_rate(), 67);
    }

    #[test]
    fn test_recent_check_ins_newest_first() {
        let attendees = sample();
        let recent = recent_check_ins(&attendees, 5);
        let ids: Vec<_> = recent.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["WPF-004", "WPF-001"]);

        assert_eq!(recent_check_ins(&attendees, 1).len(), 1);
    }

    #[test]
    fn test_filter_matches_fields() {
        let attendees = sample();
        assert_eq!(filter_attendees(&attendees, "LUCÍA").len(), 1);
        assert_eq!(filter_attendees(&attendees, "wpf-00").len(), 4);
        assert_eq!(filter_attendees(&attendees, "carla@").len(), 1);
        assert_eq!(filter_attendees(&attendees, "123456").len(), 4);
        assert_eq!(filter_attendees(&attendees, "andrade").len(), 4);
        assert!(filter_attendees(&attendees, "zzz").is_empty());
    }

    #[test]
    fn test_blank_filter_keeps_everyone() {
        let attendees = sample();
        assert_eq!(filter_attendees(&attendees, "   ").len(), attendees.len());
    }
}
