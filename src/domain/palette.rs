//! The single status/urgency color table. Views read from here and never
//! declare their own mappings.

use crate::types::{ColorPair, TaskStatus, Urgency};

pub const SUCCESS: ColorPair = ColorPair {
    background: "#E8F5E9",
    text: "#43A047",
};
pub const WARNING: ColorPair = ColorPair {
    background: "#FFF8E1",
    text: "#F9A825",
};
pub const DANGER: ColorPair = ColorPair {
    background: "#FFEBEE",
    text: "#E53935",
};
pub const CAUTION: ColorPair = ColorPair {
    background: "#FFF3E0",
    text: "#FB8C00",
};
pub const NEUTRAL: ColorPair = ColorPair {
    background: "#F5F5F5",
    text: "#616161",
};

pub const LABEL_COMPLETED: &str = "Selesai";
pub const LABEL_DUE_TODAY: &str = "Deadline Tugas Hari Ini";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub label: &'static str,
    pub colors: ColorPair,
}

/// Default label and colors for a status whose deadline is unknown.
/// `None` for unknown statuses; callers show the raw string with `NEUTRAL`.
pub fn status_style(status: &TaskStatus) -> Option<StatusStyle> {
    let style = match status {
        TaskStatus::OnPending => StatusStyle {
            label: "Tersedia",
            colors: ColorPair {
                background: "#E8EAF6",
                text: "#3949AB",
            },
        },
        TaskStatus::WorkingOnIt => StatusStyle {
            label: "Sedang Dikerjakan",
            colors: ColorPair {
                background: "#FFF4E5",
                text: "#FF9800",
            },
        },
        TaskStatus::OnReview => StatusStyle {
            label: "Dalam Review",
            colors: ColorPair {
                background: "#E3F2FD",
                text: "#1E88E5",
            },
        },
        TaskStatus::OnHold => StatusStyle {
            label: "Ditunda",
            colors: ColorPair {
                background: "#F3E5F5",
                text: "#8E24AA",
            },
        },
        TaskStatus::Rejected => StatusStyle {
            label: "Ditolak",
            colors: ColorPair {
                background: "#FDECEC",
                text: "#F69292",
            },
        },
        TaskStatus::Completed => StatusStyle {
            label: LABEL_COMPLETED,
            colors: SUCCESS,
        },
        TaskStatus::Unknown(_) => return None,
    };
    Some(style)
}

pub fn urgency_colors(urgency: Urgency) -> ColorPair {
    match urgency {
        Urgency::Overdue => DANGER,
        Urgency::DueToday => WARNING,
        Urgency::Upcoming => CAUTION,
        Urgency::Terminal => SUCCESS,
    }
}
