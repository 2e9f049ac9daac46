// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Static reference data: complaint categories, municipal departments, and
//! the seed dataset the store starts from.
//!
//! Category counts are display-seed figures; they are not reconciled with
//! the live issue collection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::issue::{Issue, Priority, Status, TimelineEntry, SUBMIT_NOTE};

/// A complaint category with its display icon and a static issue count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub icon: String,
    pub count: u32,
}

/// A municipal department with published performance figures. Read-only
/// reference data, never mutated by any operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub name: String,
    pub response_time: String,
    pub resolution_rate: String,
}

fn category(name: &str, icon: &str, count: u32) -> Category {
    Category {
        name: name.to_string(),
        icon: icon.to_string(),
        count,
    }
}

fn department(name: &str, response_time: &str, resolution_rate: &str) -> Department {
    Department {
        name: name.to_string(),
        response_time: response_time.to_string(),
        resolution_rate: resolution_rate.to_string(),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The complaint categories offered on the report form.
pub fn seed_categories() -> Vec<Category> {
    vec![
        category("Roads", "🛣️", 145),
        category("Water Supply", "💧", 89),
        category("Electricity", "⚡", 76),
        category("Waste Management", "🗑️", 112),
        category("Street Lights", "💡", 54),
        category("Public Transport", "🚌", 32),
        category("Parks & Gardens", "🌳", 28),
        category("Building & Construction", "🏗️", 41),
    ]
}

/// The municipal departments shown on the analytics view.
pub fn seed_departments() -> Vec<Department> {
    vec![
        department("Mumbai Municipal Corporation", "2.3 days", "78%"),
        department("Delhi Municipal Corporation", "3.1 days", "71%"),
        department("BBMP Bengaluru", "1.8 days", "82%"),
        department("Chennai Corporation", "2.7 days", "75%"),
    ]
}

/// The sample issues the store starts from before the mirror is consulted.
pub fn seed_issues() -> Vec<Issue> {
    vec![
        Issue {
            id: "CVC2025001".to_string(),
            title: "Large Pothole on MG Road".to_string(),
            description: "Deep pothole causing accidents near City Mall junction. \
                          Multiple vehicles damaged."
                .to_string(),
            category: "Roads".to_string(),
            location: "MG Road, Sector 14, Mumbai".to_string(),
            coordinates: Some("19.0760,72.8777".to_string()),
            priority: Priority::High,
            status: Status::InProgress,
            reported_by: "Rahul Sharma".to_string(),
            report_date: date(2025, 1, 15),
            assigned_to: "Mumbai Municipal Corporation - Roads Department".to_string(),
            votes: 45,
            comments: 12,
            timeline: vec![
                TimelineEntry::new(Status::Reported, date(2025, 1, 15)).with_note(SUBMIT_NOTE),
                TimelineEntry::new(Status::Assigned, date(2025, 1, 16))
                    .with_note("Assigned to Roads Department"),
                TimelineEntry::new(Status::InProgress, date(2025, 1, 18))
                    .with_note("Work started, materials arranged"),
            ],
        },
        Issue {
            id: "CVC2025002".to_string(),
            title: "Street Light Not Working".to_string(),
            description: "स्ट्रीट लाइट 3 महीने से काम नहीं कर रही। रात में सुरक्षा की समस्या।"
                .to_string(),
            category: "Street Lights".to_string(),
            location: "Sector 21, Noida".to_string(),
            coordinates: Some("28.5355,77.3910".to_string()),
            priority: Priority::Medium,
            status: Status::Resolved,
            reported_by: "Priya Singh".to_string(),
            report_date: date(2025, 1, 10),
            assigned_to: "Noida Authority - Electrical Department".to_string(),
            votes: 23,
            comments: 8,
            timeline: vec![
                TimelineEntry::new(Status::Reported, date(2025, 1, 10)),
                TimelineEntry::new(Status::Assigned, date(2025, 1, 11)),
                TimelineEntry::new(Status::InProgress, date(2025, 1, 12)),
                TimelineEntry::new(Status::Resolved, date(2025, 1, 14))
                    .with_note("New LED light installed"),
            ],
        },
        Issue {
            id: "CVC2025003".to_string(),
            title: "Water Supply Disruption".to_string(),
            description: "No water supply for 4 days in residential area. \
                          Affecting 200+ families."
                .to_string(),
            category: "Water Supply".to_string(),
            location: "Koramangala, Bengaluru".to_string(),
            coordinates: Some("12.9352,77.6245".to_string()),
            priority: Priority::Emergency,
            status: Status::Assigned,
            reported_by: "Amit Kumar".to_string(),
            report_date: date(2025, 1, 20),
            assigned_to: "BWSSB - Water Distribution".to_string(),
            votes: 67,
            comments: 24,
            timeline: vec![
                TimelineEntry::new(Status::Reported, date(2025, 1, 20))
                    .with_note("Emergency issue reported"),
                TimelineEntry::new(Status::Assigned, date(2025, 1, 20))
                    .with_note("Assigned to Water Distribution team"),
            ],
        },
    ]
}

#[cfg(test)]
#[path = "refdata_tests.rs"]
mod tests;
