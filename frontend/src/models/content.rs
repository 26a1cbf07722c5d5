// Static display records. Built once in `catalog` and never mutated.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VideoItem {
    pub title: &'static str,
    pub description: &'static str,
    pub embed_url: &'static str,
    pub duration: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FraudTopic {
    pub title: &'static str,
    pub description: &'static str,
    pub badge: &'static str,
    pub tips: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn badge_class(&self) -> &'static str {
        match self {
            Severity::Critical => "badge critical",
            Severity::High => "badge high",
            Severity::Medium => "badge medium",
            Severity::Low => "badge low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThreatRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub severity: Severity,
    pub source: &'static str,
    pub detected: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActivityRecord {
    pub title: &'static str,
    pub detail: &'static str,
    pub time: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressRecord {
    pub module: &'static str,
    pub completed: u32,
    pub total: u32,
}

impl ProgressRecord {
    /// Completion in whole percent. An empty module counts as 0.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let done = u64::from(self.completed.min(self.total));
        (done * 100 / u64::from(self.total)) as u32
    }
}

/// Blocked threats for one weekday, fed to the dashboard chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThreatVolume {
    pub day: &'static str,
    pub blocked: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent() {
        let p = ProgressRecord { module: "UPI Safety", completed: 3, total: 4 };
        assert_eq!(p.percent(), 75);
    }

    #[test]
    fn test_progress_percent_clamps() {
        let over = ProgressRecord { module: "x", completed: 9, total: 4 };
        assert_eq!(over.percent(), 100);
        let empty = ProgressRecord { module: "y", completed: 0, total: 0 };
        assert_eq!(empty.percent(), 0);
    }

    #[test]
    fn test_progress_percent_large_totals() {
        let big = ProgressRecord { module: "z", completed: 3_000_000_000, total: 4_000_000_000 };
        assert_eq!(big.percent(), 75);
        let full = ProgressRecord { module: "z", completed: u32::MAX, total: u32::MAX };
        assert_eq!(full.percent(), 100);
    }

    #[test]
    fn test_severity_badges() {
        assert_eq!(Severity::Critical.badge_class(), "badge critical");
        assert_eq!(Severity::Low.badge_class(), "badge low");
        assert_eq!(Severity::High.label(), "High");
    }
}
